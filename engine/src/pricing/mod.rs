//! Pricing Module
//!
//! Three layers, lowest first: the height-band primitive shared by all
//! catalog pricing, the matrix key builder that names a priced variant,
//! and the total-price resolver with matrix-first / catalog-fallback
//! precedence.

mod band;
mod matrix_key;
mod resolver;

pub use band::*;
pub use matrix_key::*;
pub use resolver::*;
