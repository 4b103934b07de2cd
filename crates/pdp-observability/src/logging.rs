//! Structured logging with view context.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use pdp_core::config::LoggingConfig;
use pdp_core::ViewId;
use serde::Serialize;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "text" => Ok(Self::Human),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// View ID for correlation.
    pub view_id: String,
    /// Product being viewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Microseconds since the logger was created.
    pub elapsed_us: u64,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}", self.level, self.message);

        if let Some(product) = &self.product {
            s.push_str(&format!(" <{}>", product));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Where formatted entries go.
#[derive(Debug, Clone, Default)]
pub enum LogOutput {
    #[default]
    Stderr,
    /// In-memory capture, mostly for tests.
    Buffer(Arc<Mutex<Vec<String>>>),
}

/// Structured logger bound to one product view.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    view_id: ViewId,
    product: Option<String>,
    start_time: Instant,
    min_level: LogLevel,
    format: LogFormat,
    output: LogOutput,
}

impl StructuredLogger {
    /// Create a new logger for a view.
    pub fn new(view_id: ViewId) -> Self {
        Self {
            view_id,
            product: None,
            start_time: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            output: LogOutput::Stderr,
        }
    }

    /// Create a logger from configuration; unknown values keep the defaults.
    pub fn from_config(view_id: ViewId, config: &LoggingConfig) -> Self {
        let mut logger = Self::new(view_id);
        if let Ok(level) = config.level.parse() {
            logger.min_level = level;
        }
        if let Ok(format) = config.format.parse() {
            logger.format = format;
        }
        logger
    }

    /// Set the product name attached to every entry.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set output destination.
    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            view_id: self.view_id.to_string(),
            product: self.product.clone(),
            fields,
            elapsed_us: self.start_time.elapsed().as_micros() as u64,
        };

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };

        match &self.output {
            LogOutput::Stderr => eprintln!("{}", output),
            LogOutput::Buffer(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(output);
                }
            }
        }
    }

    /// Get the view ID.
    pub fn view_id(&self) -> &ViewId {
        &self.view_id
    }

    /// Start building an entry at `level`.
    pub fn builder(&self, level: LogLevel, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, level, message)
    }

    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add an optional integer field; `None` is logged as null.
    pub fn field_opt_i64(mut self, key: &str, value: Option<i64>) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(level: LogLevel, format: LogFormat) -> (StructuredLogger, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = StructuredLogger::new(ViewId::new("view-1"))
            .with_min_level(level)
            .with_format(format)
            .with_output(LogOutput::Buffer(lines.clone()));
        (logger, lines)
    }

    #[test]
    fn test_level_filtering() {
        let (logger, lines) = captured(LogLevel::Info, LogFormat::Human);
        logger.debug("hidden");
        logger.info("shown");
        logger.warn("also shown");

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[INFO] shown");
        assert_eq!(lines[1], "[WARN] also shown");
    }

    #[test]
    fn test_json_entry_has_fields() {
        let (logger, lines) = captured(LogLevel::Debug, LogFormat::Json);
        let logger = logger.with_product("Guitar Picks");
        logger
            .info_builder("Variation selected")
            .field_i64("variation_id", 42)
            .field_bool("valid", true)
            .emit();

        let lines = lines.lock().unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["view_id"], "view-1");
        assert_eq!(value["product"], "Guitar Picks");
        assert_eq!(value["variation_id"], 42);
        assert_eq!(value["valid"], true);
    }

    #[test]
    fn test_human_entry_lists_fields_in_order() {
        let (logger, lines) = captured(LogLevel::Info, LogFormat::Human);
        logger
            .info_builder("Ready")
            .field("b", "two")
            .field_opt_i64("a", None)
            .emit();

        assert_eq!(lines.lock().unwrap()[0], r#"[INFO] Ready | a=null b="two""#);
    }

    #[test]
    fn test_parse_level_and_format() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!("human".parse::<LogFormat>().unwrap(), LogFormat::Human);
    }

    #[test]
    fn test_from_config() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "nonsense".to_string(),
        };
        let logger = StructuredLogger::from_config(ViewId::new("v"), &config);
        assert_eq!(logger.min_level(), LogLevel::Debug);
        assert_eq!(logger.format, LogFormat::Json);
    }
}
