//! Pricing section renderer.

use pdp_core::pricing::PriceDisplay;

use super::escape_html;

/// Render the price pair. On sale the original price is struck through.
pub fn render_pricing(price: &PriceDisplay) -> String {
    let body = match &price.original {
        Some(original) => format!(
            r#"<div class="price-sale">
        <p class="price-current price-current--sale">{}</p>
        <p class="price-original"><s>{}</s></p>
    </div>"#,
            escape_html(&price.current),
            escape_html(original)
        ),
        None => format!(
            r#"<p class="price-current">{}</p>"#,
            escape_html(&price.current)
        ),
    };

    format!(
        r#"<section class="product-pricing" data-section="pricing">
    {body}
</section>"#,
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_price() {
        let html = render_pricing(&PriceDisplay {
            current: "100 kr".to_string(),
            original: None,
        });
        assert!(html.contains(r#"<p class="price-current">100 kr</p>"#));
        assert!(!html.contains("price-original"));
    }

    #[test]
    fn test_sale_price() {
        let html = render_pricing(&PriceDisplay {
            current: "80 kr".to_string(),
            original: Some("100 kr".to_string()),
        });
        assert!(html.contains("price-current--sale\">80 kr"));
        assert!(html.contains("<s>100 kr</s>"));
    }

    #[test]
    fn test_empty_price_renders() {
        let html = render_pricing(&PriceDisplay::default());
        assert!(html.contains(r#"<p class="price-current"></p>"#));
    }
}
