//! Product detail page - server-side rendering of a single product view.
//!
//! Renders a [`ProductViewer`] snapshot into HTML:
//! - Loading placeholder until the product is delivered
//! - Hero (image with placeholder fallback, title)
//! - Price pair with struck-through original on sale
//! - Plain-text description, stock badge
//! - Variant selector and add-to-cart form carrying the selection

mod sections;

use pdp_core::view::ProductViewer;

pub use sections::*;

/// Render the inner markup of the product view.
pub fn render_product_body(viewer: &ProductViewer) -> String {
    let display = &viewer.config().display;
    let view = viewer.view();

    if !view.is_ready() {
        return render_loading(&display.loading_message);
    }

    let cart = viewer
        .cart_request()
        .map(|request| render_add_to_cart(&request, display.shipping_note.as_deref()))
        .unwrap_or_default();

    [
        render_hero(&view),
        render_pricing(&view.price),
        render_description(&view.description),
        render_stock(view.stock, &display.stock_suffix),
        render_variants(&view.options, &display.options_label, &display.option_stock_suffix),
        cart,
    ]
    .into_iter()
    .filter(|section| !section.is_empty())
    .collect::<Vec<_>>()
    .join("\n")
}

/// Render a complete HTML document for the product view.
pub fn render_product_page(viewer: &ProductViewer) -> String {
    let view = viewer.view();
    let title = if view.name.is_empty() {
        "Product".to_string()
    } else {
        sections::escape_html(&view.name)
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
    <main class="pdp-container" data-view="{view_id}">
{body}
    </main>
</body>
</html>"#,
        title = title,
        styles = PDP_STYLES,
        view_id = sections::escape_html(viewer.view_id().as_str()),
        body = render_product_body(viewer),
    )
}

/// CSS styles for the product view.
pub const PDP_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #fff; }
.pdp-container { max-width: 1200px; margin: 0 auto; padding: 3rem 1rem; display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
.product-hero { grid-row: span 6; }
.product-image-main { width: 100%; border-radius: 1rem; }
.product-name { font-size: 2.25rem; font-weight: bold; color: #111; }
.price-sale { display: flex; align-items: center; gap: 1rem; }
.price-current { font-size: 1.875rem; font-weight: bold; color: #111; }
.price-current--sale { color: #dc2626; }
.price-original { font-size: 1.25rem; color: #9ca3af; }
.product-description p { color: #4b5563; line-height: 1.6; }
.stock-badge { display: inline-flex; padding: 0.25rem 0.75rem; border-radius: 9999px; background: #dcfce7; color: #166534; font-size: 0.875rem; }
.variant-label { display: block; font-weight: 600; margin-bottom: 0.5rem; }
.variant-select { width: 100%; max-width: 24rem; height: 3rem; padding: 0 1rem; border-radius: 0.75rem; border: 1px solid #e5e7eb; }
.btn-add-to-cart { background: #111; color: #fff; border: none; padding: 1rem 2rem; border-radius: 0.75rem; cursor: pointer; }
.btn-add-to-cart--full { width: 100%; max-width: 24rem; }
.shipping-note { margin-top: 1.5rem; font-size: 0.875rem; color: #9ca3af; }
.product-loading { grid-column: span 2; display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; }
.loading-spinner { width: 3rem; height: 3rem; border: 4px solid #e5e7eb; border-top-color: #111; border-radius: 50%; }
"#;
