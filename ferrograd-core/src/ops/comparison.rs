// ferrograd-core/src/ops/comparison.rs

//! # Comparison Operations
//!
//! Scalar comparisons and the closeness predicate used throughout gradient
//! checking. `lt` and `eq` return booleans; `max` selects one of its inputs.

use crate::ops::traits::Scalar;

/// Determines if `x` is less than `y`.
pub fn lt<T: Scalar>(x: T, y: T) -> bool {
    x < y
}

/// Determines if `x` is equal to `y`.
pub fn eq<T: Scalar>(x: T, y: T) -> bool {
    x == y
}

/// Finds the max of `x` and `y`.
pub fn max<T: Scalar>(x: T, y: T) -> T {
    if lt(x, y) {
        y
    } else {
        x
    }
}

/// Determines if `x` is close to `y`.
///
/// True iff `|x - y| < Scalar::CLOSE_TOLERANCE` (strict inequality; a
/// difference of exactly the tolerance is not close).
pub fn is_close<T: Scalar>(x: T, y: T) -> bool {
    (x - y).abs() < T::CLOSE_TOLERANCE
}

// --- Tests ---
#[cfg(test)]
#[path = "comparison_test.rs"]
mod tests; // Link to the test file
