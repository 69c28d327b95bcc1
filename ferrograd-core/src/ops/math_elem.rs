// ferrograd-core/src/ops/math_elem.rs

//! # Element-wise Math Functions
//!
//! The exponential, logarithm and reciprocal, together with the derivative
//! helpers a reverse-mode engine needs for `log` and `inv`.
//!
//! `log`, `inv` and the derivative helpers are fallible: domain violations and
//! divisions by zero are surfaced to the caller as [`FerroGradError`] values
//! rather than propagated as `NaN`/`inf`. Nothing is retried or recovered
//! internally.

use crate::error::FerroGradError;
use crate::ops::traits::Scalar;

/// Computes the exponential of `x`.
pub fn exp<T: Scalar>(x: T) -> T {
    x.exp()
}

/// Computes the natural logarithm (base \( e \)) of `x`.
///
/// # Errors
/// Returns [`FerroGradError::DomainError`] for `x <= 0`; the logarithm is
/// only defined for strictly positive inputs.
pub fn log<T: Scalar>(x: T) -> Result<T, FerroGradError> {
    if x <= T::zero() {
        return Err(FerroGradError::DomainError {
            operation: "log".to_string(),
            value: x.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(x.ln())
}

/// Computes the reciprocal of `x`.
///
/// # Errors
/// Returns [`FerroGradError::DivisionByZero`] for `x == 0`.
pub fn inv<T: Scalar>(x: T) -> Result<T, FerroGradError> {
    if x == T::zero() {
        return Err(FerroGradError::DivisionByZero {
            operation: "inv".to_string(),
        });
    }
    Ok(T::one() / x)
}

/// Computes the derivative of `log` times an upstream gradient.
///
/// Using the chain rule \( \frac{dL}{dx} = \frac{dL}{dz} \cdot \frac{dz}{dx} \),
/// where \( z = \ln(x) \) and \( \frac{dz}{dx} = \frac{1}{x} \), this
/// returns `y / x`.
///
/// # Errors
/// Returns [`FerroGradError::DivisionByZero`] for `x == 0`.
pub fn log_back<T: Scalar>(x: T, y: T) -> Result<T, FerroGradError> {
    if x == T::zero() {
        return Err(FerroGradError::DivisionByZero {
            operation: "log_back".to_string(),
        });
    }
    Ok(y / x)
}

/// Computes the derivative of `inv` times an upstream gradient.
///
/// With \( z = \frac{1}{x} \) and \( \frac{dz}{dx} = -\frac{1}{x^2} \), this
/// returns `-y / x^2`.
///
/// # Errors
/// Returns [`FerroGradError::DivisionByZero`] for `x == 0`.
pub fn inv_back<T: Scalar>(x: T, y: T) -> Result<T, FerroGradError> {
    if x == T::zero() {
        return Err(FerroGradError::DivisionByZero {
            operation: "inv_back".to_string(),
        });
    }
    Ok(-(y / (x * x)))
}

// --- Tests ---
#[cfg(test)]
#[path = "math_elem_test.rs"]
mod tests; // Link to the test file
