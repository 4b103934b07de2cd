//! Lifecycle events as log lines.

use pdp_core::selection::{LifecycleEvent, LifecycleObserver};
use pdp_core::{DatabaseId, ViewId};

use crate::logging::{LogLevel, StructuredLogger};

/// Observer that writes every lifecycle event to a [`StructuredLogger`].
///
/// Transitions log at info, rejected selections at warn.
#[derive(Debug, Clone)]
pub struct LoggingObserver {
    logger: StructuredLogger,
}

impl LoggingObserver {
    pub fn new(logger: StructuredLogger) -> Self {
        Self { logger }
    }
}

fn id(value: Option<DatabaseId>) -> Option<i64> {
    value.map(DatabaseId::get)
}

impl LifecycleObserver for LoggingObserver {
    fn on_event(&self, view_id: &ViewId, event: &LifecycleEvent) {
        let level = match event {
            LifecycleEvent::SelectionRejected { .. } => LogLevel::Warn,
            _ => LogLevel::Info,
        };
        let builder = self
            .logger
            .builder(level, format!("Product view {}", event.name().replace('_', " ")))
            .field("event", event.name())
            .field("view", view_id.as_str());

        let builder = match event {
            LifecycleEvent::Initialized { default } => builder.field_opt_i64("selected", id(*default)),
            LifecycleEvent::Reselected { previous, default } => builder
                .field_opt_i64("previous", id(*previous))
                .field_opt_i64("selected", id(*default)),
            LifecycleEvent::SelectionChanged { from, to } => builder
                .field_opt_i64("previous", id(*from))
                .field_i64("selected", to.get()),
            LifecycleEvent::SelectionRejected { value, reason } => builder
                .field("value", value.clone())
                .field("reason", reason.clone()),
        };
        builder.emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogFormat, LogOutput};
    use pdp_core::catalog::{Product, Variation};
    use pdp_core::selection::ProductViewLifecycle;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_lifecycle_is_logged() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = StructuredLogger::new(ViewId::new("view-7"))
            .with_format(LogFormat::Json)
            .with_output(LogOutput::Buffer(lines.clone()));

        let mut lifecycle = ProductViewLifecycle::with_view_id(ViewId::new("view-7"))
            .with_observer(LoggingObserver::new(logger));
        let product = Product::new("Picks")
            .with_variations([Variation::new(1, "Picks - Thin"), Variation::new(2, "Picks - Heavy")]);

        lifecycle.on_product(&product);
        lifecycle.select_variation(DatabaseId(2)).unwrap();
        let _ = lifecycle.select_variation(DatabaseId(3));

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["event"], "initialized");
        assert_eq!(first["selected"], 1);
        assert_eq!(first["message"], "Product view initialized");

        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["previous"], 1);
        assert_eq!(second["selected"], 2);

        let third: serde_json::Value = serde_json::from_str(&lines[2]).unwrap();
        assert_eq!(third["level"], "warn");
        assert_eq!(third["value"], "3");
    }
}
