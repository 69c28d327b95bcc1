use crate::ops::traits::Scalar;

/// Checks if two slices are approximately equal element-wise.
/// Panics if lengths differ or data differs beyond the tolerance.
pub fn check_slice_near<T: Scalar>(actual: &[T], expected: &[T], tolerance: T) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (*a - *e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
