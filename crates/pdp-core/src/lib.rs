//! Price resolution and variant selection for the storefront product detail view.
//!
//! This crate holds the decision logic behind a single product page:
//!
//! - **Catalog**: the product record and its variations, parsed leniently
//! - **Pricing**: price string cleanup, combined-price extraction, display pair
//! - **Selection**: variation registry and the view lifecycle state machine
//! - **Description**: markup to plain text behind a capability trait
//! - **Cart**: the hand-off passed to the add-to-cart collaborator
//!
//! # Example
//!
//! ```rust
//! use pdp_core::prelude::*;
//!
//! let json = r#"{
//!     "name": "Guitar Picks",
//!     "onSale": true,
//!     "price": "kr 80 - kr 100",
//!     "variations": { "nodes": [
//!         { "id": "a", "databaseId": 1, "name": "Picks - Thin", "stockQuantity": 5 },
//!         { "id": "b", "databaseId": 2, "name": "Picks - Heavy", "stockQuantity": 2 }
//!     ]}
//! }"#;
//!
//! let mut viewer = ProductViewer::default();
//! viewer.deliver(Product::from_json(json).unwrap());
//!
//! let view = viewer.view();
//! assert_eq!(view.price.current, "kr 80");
//! assert_eq!(view.price.original.as_deref(), Some("kr 100"));
//!
//! viewer.select_from_value("2").unwrap();
//! assert_eq!(viewer.cart_request().unwrap().variation_id, Some(DatabaseId(2)));
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod description;
pub mod error;
pub mod ids;
pub mod pricing;
pub mod selection;
pub mod view;

pub use error::PdpError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{AddToCart, AddToCartRequest};
    pub use crate::catalog::{Product, ProductImage, ProductType, Variation, Variations};
    pub use crate::config::PdpConfig;
    pub use crate::description::{
        plain_description, DescriptionSanitizer, HtmlSanitizer, UnsupportedSanitizer,
    };
    pub use crate::error::PdpError;
    pub use crate::ids::*;
    pub use crate::pricing::{
        normalize, AggregatePriceFormat, DelimitedAggregate, PriceDisplay, PriceDisplayResolver,
        PriceSide,
    };
    pub use crate::selection::{
        option_label, LifecycleEvent, LifecycleObserver, ProductViewLifecycle, SelectionState,
        VariantOption, VariantRegistry, ViewPhase,
    };
    pub use crate::view::{ProductView, ProductViewer};
}
