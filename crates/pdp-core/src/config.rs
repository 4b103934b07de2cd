//! Product view configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pricing::DelimitedAggregate;
use crate::selection::OPTION_SEPARATOR;
use crate::PdpError;

/// Image shown when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600";

/// Top-level configuration, loadable from TOML or JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdpConfig {
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PdpConfig {
    /// Load config from a file. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PdpError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| PdpError::ConfigRead {
            path: display.clone(),
            reason: e.to_string(),
        })?;

        if is_json(path) {
            serde_json::from_str(&content).map_err(|e| PdpError::ConfigParse {
                path: display,
                reason: e.to_string(),
            })
        } else {
            Self::from_toml(&content).map_err(|e| match e {
                PdpError::ConfigParse { reason, .. } => PdpError::ConfigParse {
                    path: display,
                    reason,
                },
                other => other,
            })
        }
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, PdpError> {
        toml::from_str(content).map_err(|e| PdpError::ConfigParse {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Render config as TOML.
    pub fn to_toml(&self) -> Result<String, PdpError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Problems that would make rendering misbehave silently.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.pricing.aggregate_delimiter.is_empty() {
            problems.push(
                "pricing.aggregate_delimiter is empty; sale prices of variable products will render blank"
                    .to_string(),
            );
        }
        if self.display.option_separator.is_empty() {
            problems.push("display.option_separator is empty; option labels show full names".to_string());
        }
        if self.display.placeholder_image.is_empty() {
            problems.push("display.placeholder_image is empty".to_string());
        }
        problems
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Pricing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Separator between the current and original value of a combined price.
    #[serde(default = "default_delimiter")]
    pub aggregate_delimiter: String,
}

fn default_delimiter() -> String {
    DelimitedAggregate::default().delimiter().to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            aggregate_delimiter: default_delimiter(),
        }
    }
}

impl PricingConfig {
    pub fn aggregate_format(&self) -> DelimitedAggregate {
        DelimitedAggregate::new(self.aggregate_delimiter.clone())
    }
}

/// Display strings and layout flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder_image: String,

    #[serde(default = "default_option_separator")]
    pub option_separator: String,

    #[serde(default = "default_loading_message")]
    pub loading_message: String,

    #[serde(default = "default_stock_suffix")]
    pub stock_suffix: String,

    #[serde(default = "default_option_stock_suffix")]
    pub option_stock_suffix: String,

    #[serde(default = "default_options_label")]
    pub options_label: String,

    /// Footer under the cart button. Empty hides it.
    #[serde(default = "default_shipping_note", skip_serializing_if = "Option::is_none")]
    pub shipping_note: Option<String>,

    /// Whether the add-to-cart control spans the full column width.
    #[serde(default = "default_true")]
    pub full_width_cart: bool,
}

fn default_placeholder() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

fn default_option_separator() -> String {
    OPTION_SEPARATOR.to_string()
}

fn default_loading_message() -> String {
    "Caricamento prodotto...".to_string()
}

fn default_stock_suffix() -> String {
    "disponibili in magazzino".to_string()
}

fn default_option_stock_suffix() -> String {
    "disp.".to_string()
}

fn default_options_label() -> String {
    "Opzioni disponibili".to_string()
}

fn default_shipping_note() -> Option<String> {
    Some("Spedizione rapida per tutti i tuoi prodotti Harry Potter e plettri.".to_string())
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder(),
            option_separator: default_option_separator(),
            loading_message: default_loading_message(),
            stock_suffix: default_stock_suffix(),
            option_stock_suffix: default_option_stock_suffix(),
            options_label: default_options_label(),
            shipping_note: default_shipping_note(),
            full_width_cart: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format: human or json.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
