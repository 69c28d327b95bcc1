use thiserror::Error;

/// Custom error type for the FerroGrad primitive layer.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum FerroGradError {
    #[error("Domain error during operation {operation}: input {value} is outside the valid domain")]
    DomainError { operation: String, value: f64 },

    #[error("Division by zero during operation {operation}")]
    DivisionByZero { operation: String },
    // Add more specific errors as needed
}
