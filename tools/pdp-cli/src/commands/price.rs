//! Show the display price of a product.

use anyhow::Result;
use pdp_core::pricing::{normalize, AggregatePriceFormat, DelimitedAggregate, PriceSide};

use super::PriceArgs;
use crate::context::{read_product, Context};

/// Run the price command.
pub fn run(args: PriceArgs, ctx: &Context) -> Result<()> {
    let product = read_product(&args.product)?;
    let format = match &args.delimiter {
        Some(delimiter) => DelimitedAggregate::new(delimiter.clone()),
        None => ctx.config.pricing.aggregate_format(),
    };

    if let Some(selector) = &args.side {
        let side = PriceSide::from_selector(selector);
        let raw = format.extract_side(product.price.as_deref().unwrap_or_default(), side);
        let value = normalize(Some(&raw));
        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({ "side": side.as_str(), "value": value }));
        } else {
            println!("{}", value);
        }
        return Ok(());
    }

    let viewer = ctx.viewer_for(product).with_price_format(format);
    let view = viewer.view();
    if ctx.output.is_json() {
        ctx.output.json(&view.price);
        return Ok(());
    }

    ctx.output.header(&view.name);
    ctx.output.kv("type", view.product_type.as_str());
    ctx.output.price(&view.price);
    if view.price.is_sale() && view.price.current.is_empty() {
        ctx.output.warn("Sale price is empty; check the combined price delimiter");
    }

    Ok(())
}
