//! # Operator Module (`ops`)
//!
//! This module serves as the central hub for the elementary operators of
//! FerroGrad. Operations are categorized into submodules based on their
//! functionality.
//!
//! ## Structure:
//!
//! - **Submodules:** Operations are grouped logically (e.g., `arithmetic`,
//!   `comparison`, `math_elem`, `activation`, `higher_order`).
//! - **Free functions:** Every operation is a pure free function over a
//!   [`Scalar`](traits/numeric/trait.Scalar.html) element type. There is no
//!   state and no setup; fallible operations return `Result`.
//! - **Derivative helpers:** The `*_back` functions (`log_back`, `inv_back`,
//!   `relu_back`) take the original input together with an upstream gradient
//!   and return the chain-rule product. They are the pieces a reverse-mode
//!   differentiation engine calls during backpropagation.
//! - **Traits (`ops::traits`):** Defines the numeric element bound shared by
//!   all operations.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: Elementary arithmetic (mul, add, id, neg).
//! - [`comparison`]: Comparisons and the closeness predicate (lt, eq, max, is_close).
//! - [`math_elem`]: Element-wise math functions and their derivative helpers
//!   (exp, log, inv, log_back, inv_back).
//! - [`activation`]: Activation functions and the ReLU derivative helper
//!   (sigmoid, relu, relu_back).
//! - [`higher_order`]: Generic sequence combinators (map, zip_with, reduce)
//!   and the list operations built from them.

pub mod traits;

// Declare operation submodules
pub mod activation;
pub mod arithmetic;
pub mod comparison;
pub mod higher_order;
pub mod math_elem;
