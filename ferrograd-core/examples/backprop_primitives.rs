//! # Exemple : Primitives de Rétropropagation
//!
//! Cet exemple illustre la couche de primitives de `ferrograd-core` :
//! une passe avant élément par élément (`relu`, `sigmoid`) suivie d'une
//! passe arrière pilotée à la main avec les fonctions `*_back`.
//!
//! ## Fonctionnalités Démontrées:
//! 1.  **Passe avant**: application de `relu` puis `sigmoid` via `map`.
//! 2.  **Passe arrière**: propagation d'un gradient amont avec `zip_with`
//!     et `relu_back`.
//! 3.  **Dérivées scalaires**: `log_back` et `inv_back` en un point.
//!
//! ## Exécution
//! Pour exécuter cet exemple, utilisez la commande :
//! `cargo run --example backprop_primitives`
//!

use ferrograd_core::{
    inv_back, log_back, map, relu, relu_back, sigmoid, sum, zip_with, FerroGradError,
};

fn main() -> Result<(), FerroGradError> {
    // Passe avant : pré-activations -> relu -> sigmoid
    let pre_activation = vec![-1.5_f64, -0.3, 0.7, 2.0];
    let hidden = map(relu, &pre_activation);
    let output = map(sigmoid, &hidden);

    println!("pre-activation: {:?}", pre_activation);
    println!("after relu:     {:?}", hidden);
    println!("after sigmoid:  {:?}", output);

    // Passe arrière : un gradient amont de 1 partout, poussé à travers relu.
    let upstream = vec![1.0_f64; pre_activation.len()];
    let grad = zip_with(relu_back, &pre_activation, &upstream);
    println!("relu gradient:  {:?}", grad);
    println!("gradient mass:  {}", sum(&grad));

    // Dérivées scalaires en un point, gradient amont de 1.
    let x = 2.0_f64;
    println!("d/dx log(x) at {}: {}", x, log_back(x, 1.0)?);
    println!("d/dx 1/x   at {}: {}", x, inv_back(x, 1.0)?);

    Ok(())
}
