// ferrograd-core/src/ops/comparison_test.rs

#[cfg(test)]
mod tests {
    use crate::ops::comparison::{eq, is_close, lt, max};

    #[test]
    fn test_lt_basic() {
        assert!(lt(1.0_f64, 2.0));
        assert!(!lt(2.0_f64, 1.0));
        assert!(!lt(2.0_f64, 2.0));
    }

    #[test]
    fn test_eq_basic() {
        assert!(eq(2.0_f64, 2.0));
        assert!(!eq(2.0_f64, 2.5));
        // NaN is never equal to itself
        assert!(!eq(f64::NAN, f64::NAN));
    }

    #[test]
    fn test_max_basic() {
        assert_eq!(max(1.0_f64, 2.0), 2.0);
        assert_eq!(max(2.0_f64, 1.0), 2.0);
        assert_eq!(max(-3.0_f32, -7.0), -3.0);
        // Ties keep the first argument
        assert_eq!(max(5.0_f64, 5.0), 5.0);
    }

    #[test]
    fn test_is_close_within_threshold() {
        assert!(is_close(1.0_f64, 1.005));
        assert!(is_close(1.005_f64, 1.0));
        assert!(is_close(-2.0_f64, -2.009));
    }

    #[test]
    fn test_is_close_outside_threshold() {
        assert!(!is_close(1.0_f64, 1.02));
        assert!(!is_close(1.02_f64, 1.0));
        assert!(!is_close(10.0_f32, 10.5));
    }

    #[test]
    fn test_is_close_boundary_is_strict() {
        // |0.0 - 0.01| compares the tolerance against itself, so the strict
        // `<` makes the boundary not close.
        assert!(!is_close(0.0_f64, 0.01));
        assert!(!is_close(0.01_f64, 0.0));
        assert!(!is_close(0.0_f32, 0.01));
    }
}
