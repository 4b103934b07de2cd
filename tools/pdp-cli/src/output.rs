//! Output formatting for the CLI.

use console::style;
use pdp_core::pricing::PriceDisplay;
use pdp_core::selection::VariantOption;

/// Output handler for CLI messages.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print the resolved price pair.
    pub fn price(&self, display: &PriceDisplay) {
        self.kv("price", &self.format_price(display));
    }

    /// Print one selector entry; the selected one is highlighted.
    pub fn variant_option(&self, option: &VariantOption, stock_suffix: &str) {
        let line = format!(
            "{} {} ({} {})",
            style(option.value).dim(),
            option.label,
            option.stock,
            stock_suffix
        );
        if option.selected {
            self.list_item(&format!("{} {}", style(line).bold(), style("(selected)").green()));
        } else {
            self.list_item(&line);
        }
    }

    /// Price pair as one line, the original price struck through.
    pub fn format_price(&self, display: &PriceDisplay) -> String {
        match &display.original {
            Some(original) => format!(
                "{} (was {})",
                style(&display.current).bold(),
                style(original).strikethrough()
            ),
            None => display.current.clone(),
        }
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        let output = Output::new(false, false);
        let regular = PriceDisplay {
            current: "100 kr".to_string(),
            original: None,
        };
        assert_eq!(output.format_price(&regular), "100 kr");

        let sale = PriceDisplay {
            current: "80 kr".to_string(),
            original: Some("100 kr".to_string()),
        };
        let line = output.format_price(&sale);
        assert!(line.contains("80 kr"));
        assert!(line.contains(" (was "));
        assert!(line.contains("100 kr"));
    }
}
