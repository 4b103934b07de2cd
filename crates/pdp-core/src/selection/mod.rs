//! Variant selection module.
//!
//! The variation registry and the view lifecycle that owns the selection.

mod lifecycle;
mod registry;

pub use lifecycle::{
    LifecycleEvent, LifecycleObserver, ProductViewLifecycle, SelectionState, ViewPhase,
};
pub use registry::{option_label, option_label_with, VariantOption, VariantRegistry, OPTION_SEPARATOR};
