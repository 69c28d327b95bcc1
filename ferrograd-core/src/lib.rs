// Déclare les modules principaux de la crate
pub mod error;
pub mod ops;
pub mod utils;

// Ré-exporte la surface plate des opérateurs pour qu'ils soient accessibles
// directement via `ferrograd_core::mul`, etc.
pub use ops::activation::{relu, relu_back, sigmoid};
pub use ops::arithmetic::{add, id, mul, neg};
pub use ops::comparison::{eq, is_close, lt, max};
pub use ops::higher_order::{add_lists, map, neg_list, prod, reduce, sum, zip_with};
pub use ops::math_elem::{exp, inv, inv_back, log, log_back};
pub use ops::traits::Scalar;

// Re-export traits required by public functions/structs
pub use num_traits;

pub use error::FerroGradError;
