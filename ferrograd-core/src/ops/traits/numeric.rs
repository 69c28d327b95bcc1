use num_traits::Float;
use std::fmt::Debug;

/// A trait representing scalar types usable in FerroGrad operations.
///
/// This trait bounds the element types (like `f32`, `f64`) accepted by the
/// operator surface and the higher-order sequence combinators. `Float` already
/// provides `zero()`, `one()`, `exp()`, `ln()`, `abs()`, etc., so the
/// operations themselves need no further machinery.
pub trait Scalar:
    Float // Includes Num + Copy + Signed + PartialOrd + etc.
    + Debug
    + Copy // Float requires Copy, explicitly listed for clarity
    + Send
    + Sync
    + 'static
{
    /// Strict upper bound on `|x - y|` used by `is_close`. A difference of
    /// exactly this value is NOT close.
    const CLOSE_TOLERANCE: Self;
}

// Implement the trait for f32 and f64.
// The compiler checks if f32/f64 satisfy all the bounds of Scalar.
impl Scalar for f32 {
    const CLOSE_TOLERANCE: Self = 1e-2;
}

impl Scalar for f64 {
    const CLOSE_TOLERANCE: Self = 1e-2;
}

// Simple compile-time tests to ensure the trait bounds work.
#[cfg(test)]
mod tests {
    use super::*;

    // Function requiring the Scalar bound
    fn process_scalar<T: Scalar>(_value: T) {
        // Do nothing, just check if it compiles
    }

    #[test]
    fn test_f32_impl_scalar() {
        process_scalar(1.0f32);
        assert_eq!(f32::CLOSE_TOLERANCE, 1e-2);
    }

    #[test]
    fn test_f64_impl_scalar() {
        process_scalar(1.0f64);
        assert_eq!(f64::CLOSE_TOLERANCE, 1e-2);
    }
}
