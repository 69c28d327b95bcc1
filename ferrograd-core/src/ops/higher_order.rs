// ferrograd-core/src/ops/higher_order.rs

//! # Higher-order Sequence Operations
//!
//! Generic combinators over slices of scalars (`map`, `zip_with`, `reduce`)
//! and the list operations built from them. Every function allocates a fresh
//! output and leaves its inputs untouched; a differentiation engine uses these
//! as the element-wise layer beneath tensor operations.

use crate::ops::arithmetic::{add, mul, neg};
use crate::ops::traits::Scalar;

/// Applies `f` to each element of `values`, producing a fresh vector of the
/// same length.
pub fn map<T, F>(f: F, values: &[T]) -> Vec<T>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    values.iter().map(|&x| f(x)).collect()
}

/// Combines `lhs` and `rhs` position-wise with `f`.
///
/// The output length is `min(lhs.len(), rhs.len())`; trailing elements of the
/// longer input are ignored.
pub fn zip_with<T, F>(f: F, lhs: &[T], rhs: &[T]) -> Vec<T>
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    lhs.iter().zip(rhs.iter()).map(|(&a, &b)| f(a, b)).collect()
}

/// Reduces `values` to one scalar using repeated calls to `f`, left to right.
///
/// There is no explicit seed: sequences of zero or one element reduce to
/// zero. This is a deliberate simplification, not a conventional fold, and it
/// makes `sum` and `prod` of a single-element sequence zero as well.
/// Otherwise the fold starts from `f(values[0], values[1])`.
pub fn reduce<T, F>(f: F, values: &[T]) -> T
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    if values.len() <= 1 {
        return T::zero();
    }
    let mut acc = f(values[0], values[1]);
    for &x in &values[2..] {
        acc = f(acc, x);
    }
    acc
}

/// Negates each element of `values`.
pub fn neg_list<T: Scalar>(values: &[T]) -> Vec<T> {
    map(neg, values)
}

/// Computes the element-wise sum of `lhs` and `rhs`.
pub fn add_lists<T: Scalar>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    zip_with(add, lhs, rhs)
}

/// Computes the sum of `values` (under the seedless `reduce` policy).
pub fn sum<T: Scalar>(values: &[T]) -> T {
    reduce(add, values)
}

/// Computes the product of `values` (under the seedless `reduce` policy).
pub fn prod<T: Scalar>(values: &[T]) -> T {
    reduce(mul, values)
}

// --- Tests ---
#[cfg(test)]
#[path = "higher_order_test.rs"]
mod tests; // Link to the test file
