//! Apply a selector value and print the add-to-cart request.

use anyhow::{anyhow, Context as _, Result};
use pdp_core::selection::{option_label_with, VariantRegistry};

use super::SelectArgs;
use crate::context::{read_product, Context};

/// Run the select command.
pub fn run(args: SelectArgs, ctx: &Context) -> Result<()> {
    let product = read_product(&args.product)?;
    let mut viewer = ctx.viewer_for(product);

    let selected = viewer
        .select_from_value(&args.value)
        .with_context(|| format!("Cannot select '{}'", args.value))?;

    let request = viewer
        .cart_request()
        .ok_or_else(|| anyhow!("Product view is not ready"))?;

    if ctx.output.is_verbose() {
        let label = VariantRegistry::new(request.product.variation_nodes())
            .get(selected)
            .map(|v| option_label_with(&v.name, &ctx.config.display.option_separator))
            .unwrap_or_default();
        ctx.output.success(&format!("Selected variation {} {}", selected, label));
    }
    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
}
