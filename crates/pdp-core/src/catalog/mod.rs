//! Product catalog module.
//!
//! Contains the product record and its variations.

mod product;
mod variation;

pub use product::{Product, ProductImage, ProductType};
pub use variation::{Variation, Variations};
