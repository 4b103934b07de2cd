//! Structured logging for product detail views.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging correlated by view id
//! - `LogBuilder` - Fluent construction of log entries with fields
//! - `LoggingObserver` - Lifecycle observer that logs selection changes

mod logging;
mod observer;

pub use logging::*;
pub use observer::*;

// Re-export ViewId from pdp-core for convenience
pub use pdp_core::ViewId;
