//! CLI command implementations.

pub mod config;
pub mod options;
pub mod price;
pub mod render;
pub mod select;

use clap::{Args, Subcommand};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Product JSON file, or `-` for stdin.
    pub product: String,

    /// Selector value to apply before rendering.
    #[arg(short, long)]
    pub select: Option<String>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,

    /// Render only the product markup, without the page wrapper.
    #[arg(long)]
    pub body_only: bool,
}

/// Arguments for the price command.
#[derive(Args)]
pub struct PriceArgs {
    /// Product JSON file, or `-` for stdin.
    pub product: String,

    /// Override the combined price delimiter.
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Print one side of the combined price instead ("right" selects the
    /// original price, anything else the current one).
    #[arg(long)]
    pub side: Option<String>,
}

/// Arguments for the options command.
#[derive(Args)]
pub struct OptionsArgs {
    /// Product JSON file, or `-` for stdin.
    pub product: String,
}

/// Arguments for the select command.
#[derive(Args)]
pub struct SelectArgs {
    /// Product JSON file, or `-` for stdin.
    pub product: String,

    /// Selector value (a variation database id).
    pub value: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
