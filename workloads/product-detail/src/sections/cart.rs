//! Add-to-cart section renderer.

use pdp_core::cart::AddToCartRequest;

use super::escape_html;

/// Render the add-to-cart form for the current hand-off.
///
/// The variation field is only present for variable products.
pub fn render_add_to_cart(request: &AddToCartRequest<'_>, shipping_note: Option<&str>) -> String {
    let product_field = match request.product.database_id {
        Some(id) => format!(r#"<input type="hidden" name="product" value="{}">"#, id),
        None => String::new(),
    };
    let variation_field = match request.variation_id {
        Some(id) => format!(r#"<input type="hidden" name="variation" value="{}">"#, id),
        None => String::new(),
    };
    let width_class = if request.full_width {
        " btn-add-to-cart--full"
    } else {
        ""
    };
    let note = match shipping_note {
        Some(text) if !text.is_empty() => {
            format!(r#"<p class="shipping-note">{}</p>"#, escape_html(text))
        }
        _ => String::new(),
    };

    format!(
        r#"<section class="product-cart" data-section="cart">
    <form method="post" action="/cart" class="add-to-cart">
        {product_field}
        {variation_field}
        <button type="submit" class="btn-add-to-cart{width_class}">Add to Cart</button>
    </form>
    {note}
</section>"#,
        product_field = product_field,
        variation_field = variation_field,
        width_class = width_class,
        note = note
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdp_core::catalog::{Product, Variation};
    use pdp_core::DatabaseId;

    #[test]
    fn test_simple_product_form() {
        let mut product = Product::new("Wand");
        product.database_id = Some(DatabaseId(7));
        let request = AddToCartRequest {
            product: &product,
            variation_id: None,
            full_width: true,
        };

        let html = render_add_to_cart(&request, Some("Fast shipping"));
        assert!(html.contains(r#"name="product" value="7""#));
        assert!(!html.contains(r#"name="variation""#));
        assert!(html.contains("btn-add-to-cart--full"));
        assert!(html.contains("Fast shipping"));
    }

    #[test]
    fn test_variable_product_form() {
        let product = Product::new("Picks").with_variations([Variation::new(12, "Picks - Thin")]);
        let request = AddToCartRequest {
            product: &product,
            variation_id: Some(DatabaseId(12)),
            full_width: false,
        };

        let html = render_add_to_cart(&request, None);
        assert!(html.contains(r#"name="variation" value="12""#));
        assert!(!html.contains("btn-add-to-cart--full"));
        assert!(!html.contains("shipping-note"));
    }
}
