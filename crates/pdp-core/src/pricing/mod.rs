//! Price resolution module.
//!
//! Normalization of raw price strings, extraction from combined variable
//! product prices, and the final display pair.

mod display;
mod normalize;
mod variant_price;

pub use display::{PriceDisplay, PriceDisplayResolver};
pub use normalize::normalize;
pub use variant_price::{AggregatePriceFormat, DelimitedAggregate, PriceSide};
