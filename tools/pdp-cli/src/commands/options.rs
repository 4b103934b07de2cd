//! List the variation options of a product.

use anyhow::Result;

use super::OptionsArgs;
use crate::context::{read_product, Context};

/// Run the options command.
pub fn run(args: OptionsArgs, ctx: &Context) -> Result<()> {
    let product = read_product(&args.product)?;
    let viewer = ctx.viewer_for(product);
    let view = viewer.view();

    if ctx.output.is_json() {
        ctx.output.json(&view.options);
        return Ok(());
    }

    if !view.has_variations() {
        ctx.output.info(&format!("{} is a simple product", view.name));
        return Ok(());
    }

    let display = &ctx.config.display;
    ctx.output.header(&display.options_label);
    if view.options.is_empty() {
        ctx.output.warn("No variations available");
        return Ok(());
    }

    for option in &view.options {
        ctx.output.variant_option(option, &display.option_stock_suffix);
    }

    Ok(())
}
