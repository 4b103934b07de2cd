//! PDP CLI - render and inspect storefront product detail views.
//!
//! Commands:
//! - `pdp render` - Render a product JSON document to HTML
//! - `pdp price` - Show the resolved price pair
//! - `pdp options` - List the variation selector entries
//! - `pdp select` - Apply a selector value and print the cart request
//! - `pdp config` - Manage configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, OptionsArgs, PriceArgs, RenderArgs, SelectArgs};

/// PDP CLI - Render and inspect product detail views
#[derive(Parser)]
#[command(name = "pdp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a product to HTML
    Render(RenderArgs),

    /// Show the display price of a product
    Price(PriceArgs),

    /// List the variation options of a product
    Options(OptionsArgs),

    /// Select a variation and print the add-to-cart request
    Select(SelectArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Price(args) => commands::price::run(args, &ctx),
        Commands::Options(args) => commands::options::run(args, &ctx),
        Commands::Select(args) => commands::select::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
