//! Render a product to HTML.

use std::fs;

use anyhow::{Context as _, Result};
use product_detail::{render_product_body, render_product_page};

use super::RenderArgs;
use crate::context::{read_product, Context};

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let product = read_product(&args.product)?;
    let mut viewer = ctx.viewer_for(product);

    if let Some(value) = &args.select {
        viewer
            .select_from_value(value)
            .with_context(|| format!("Cannot select '{}'", value))?;
    }

    if ctx.output.is_json() {
        ctx.output.json(&viewer.view());
        return Ok(());
    }

    let html = if args.body_only {
        render_product_body(&viewer)
    } else {
        render_product_page(&viewer)
    };

    match &args.out {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("Failed to write {}", path))?;
            ctx.output.success(&format!("Rendered: {}", path));
        }
        None => println!("{}", html),
    }

    Ok(())
}
