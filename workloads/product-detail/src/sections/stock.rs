//! Stock badge renderer.

use super::escape_html;

/// Render the stock badge; only positive quantities are shown.
pub fn render_stock(stock: Option<i64>, suffix: &str) -> String {
    match stock {
        Some(quantity) if quantity > 0 => format!(
            r#"<section class="product-stock" data-section="stock">
    <span class="stock-badge">&#9679; {} {}</span>
</section>"#,
            quantity,
            escape_html(suffix)
        ),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_stock() {
        let html = render_stock(Some(3), "disponibili in magazzino");
        assert!(html.contains("3 disponibili in magazzino"));
    }

    #[test]
    fn test_hidden_stock() {
        assert_eq!(render_stock(None, "left"), "");
        assert_eq!(render_stock(Some(0), "left"), "");
        assert_eq!(render_stock(Some(-2), "left"), "");
    }
}
