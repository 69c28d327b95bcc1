// ferrograd-core/src/ops/arithmetic.rs

//! # Elementary Arithmetic Operations
//!
//! Pure binary and unary arithmetic over a [`Scalar`] element type. These are
//! the smallest building blocks of the library; each is a single expression
//! and cannot fail.

use crate::ops::traits::Scalar;

/// Computes the product of `x` and `y`.
pub fn mul<T: Scalar>(x: T, y: T) -> T {
    x * y
}

/// Returns the same value.
pub fn id<T: Scalar>(x: T) -> T {
    x
}

/// Computes the sum of `x` and `y`.
pub fn add<T: Scalar>(x: T, y: T) -> T {
    x + y
}

/// Computes the negation of `x`.
pub fn neg<T: Scalar>(x: T) -> T {
    -x
}

// --- Tests ---
#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests; // Link to the test file
