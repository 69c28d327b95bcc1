// ferrograd-core/src/ops/activation.rs

//! # Activation Functions
//!
//! The logistic function and the Rectified Linear Unit, plus the ReLU
//! derivative helper used during backpropagation.

use crate::ops::traits::Scalar;
use log::warn;

/// Computes the sigmoid (logistic function) of `x`.
///
/// Calculated as \( \frac{1}{1 + e^{-x}} \) for `x >= 0` and
/// \( \frac{e^x}{1 + e^x} \) for `x < 0`, so `exp` is only ever evaluated on
/// a non-positive argument and cannot overflow.
pub fn sigmoid<T: Scalar>(x: T) -> T {
    if x >= T::zero() {
        T::one() / (T::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (T::one() + e)
    }
}

/// Computes the ReLU of `x`: `x` if `x > 0`, else zero.
pub fn relu<T: Scalar>(x: T) -> T {
    if x > T::zero() {
        x
    } else {
        T::zero()
    }
}

/// Computes the derivative of ReLU times an upstream gradient.
///
/// Returns `y` for `x > 0` and zero for `x < 0`. The derivative is undefined
/// at exactly `x == 0`; this implementation emits a warning and uses zero
/// there rather than failing.
pub fn relu_back<T: Scalar>(x: T, y: T) -> T {
    if x < T::zero() {
        return T::zero();
    }
    if x == T::zero() {
        warn!("relu_back: the derivative of ReLU is undefined at zero, using 0");
        return T::zero();
    }
    y
}

// --- Tests ---
#[cfg(test)]
#[path = "activation_test.rs"]
mod tests; // Link to the test file
