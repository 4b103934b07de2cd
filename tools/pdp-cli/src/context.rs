//! CLI execution context.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use pdp_core::catalog::Product;
use pdp_core::config::PdpConfig;
use pdp_core::view::ProductViewer;
use pdp_core::ViewId;
use pdp_observability::{LogLevel, LoggingObserver, StructuredLogger};

use crate::output::Output;

/// Config file names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["pdp.toml", ".pdp.toml", "pdp.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Loaded configuration.
    pub config: PdpConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or by searching upwards.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (
                PdpConfig::load(path).with_context(|| format!("Failed to load config: {}", path))?,
                Some(PathBuf::from(path)),
            ),
            None => match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (PdpConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Logger for one view, honouring `--verbose`.
    pub fn logger(&self, view_id: ViewId) -> StructuredLogger {
        let logger = StructuredLogger::from_config(view_id, &self.config.logging);
        if self.output.is_verbose() {
            logger.with_min_level(LogLevel::Debug)
        } else {
            logger
        }
    }

    /// A viewer with logging attached and the product already delivered.
    pub fn viewer_for(&self, product: Product) -> ProductViewer {
        let view_id = ViewId::generate();
        let logger = self.logger(view_id.clone()).with_product(product.name.clone());
        logger
            .debug_builder("Delivering product")
            .field("type", product.product_type().as_str())
            .field_i64("variations", product.variation_nodes().len() as i64)
            .emit();

        let mut viewer = ProductViewer::new(self.config.clone())
            .with_view_id(view_id)
            .with_observer(LoggingObserver::new(logger));
        viewer.deliver(product);
        viewer
    }
}

/// Read a product JSON document from a file, or from stdin when `path` is `-`.
pub fn read_product(path: &str) -> Result<Product> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read product from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read product file: {}", path))?
    };

    parse_product(&content).with_context(|| format!("Failed to parse product: {}", path))
}

/// Parse a product document. A GraphQL response envelope
/// (`{"data": {"product": {...}}}`) is unwrapped.
pub fn parse_product(content: &str) -> Result<Product> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let product = match value.pointer("/data/product") {
        Some(inner) => inner.clone(),
        None => value,
    };
    Ok(serde_json::from_value(product)?)
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<(PdpConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.exists() {
                if let Ok(config) = PdpConfig::load(&candidate) {
                    return Some((config, candidate));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
