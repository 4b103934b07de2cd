//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use pdp_core::config::PdpConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[pricing]");
    ctx.output
        .kv("aggregate_delimiter", &format!("{:?}", config.pricing.aggregate_delimiter));

    ctx.output.info("[display]");
    ctx.output.kv("placeholder_image", &config.display.placeholder_image);
    ctx.output
        .kv("option_separator", &format!("{:?}", config.display.option_separator));
    ctx.output.kv("loading_message", &config.display.loading_message);
    ctx.output.kv("stock_suffix", &config.display.stock_suffix);
    ctx.output.kv("option_stock_suffix", &config.display.option_stock_suffix);
    ctx.output.kv("options_label", &config.display.options_label);
    if let Some(ref note) = config.display.shipping_note {
        ctx.output.kv("shipping_note", note);
    }
    ctx.output
        .kv("full_width_cart", &config.display.full_width_cart.to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("level", &config.logging.level);
    ctx.output.kv("format", &config.logging.format);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = PdpConfig::default().to_toml()?;
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let warnings = ctx.config.validate();

    if ctx.config.logging.level.parse::<pdp_observability::LogLevel>().is_err() {
        errors.push(format!("logging.level '{}' is not a log level", ctx.config.logging.level));
    }
    if ctx.config.logging.format.parse::<pdp_observability::LogFormat>().is_err() {
        errors.push(format!("logging.format '{}' must be json or human", ctx.config.logging.format));
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
