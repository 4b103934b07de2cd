//! Variant selector renderer.

use pdp_core::selection::VariantOption;

use super::escape_html;

/// Render the variant selector. Simple products get no selector.
pub fn render_variants(options: &[VariantOption], label: &str, stock_suffix: &str) -> String {
    if options.is_empty() {
        return String::new();
    }

    let entries: String = options
        .iter()
        .map(|option| {
            format!(
                r#"
            <option value="{value}" data-key="{key}"{selected}>{label} ({stock} {suffix})</option>"#,
                value = option.value,
                key = escape_html(option.key.as_str()),
                selected = if option.selected { " selected" } else { "" },
                label = escape_html(&option.label),
                stock = option.stock,
                suffix = escape_html(stock_suffix),
            )
        })
        .collect();

    format!(
        r#"<section class="product-variants" data-section="variants">
    <label for="variant" class="variant-label">{label}</label>
    <select id="variant" name="variation" class="variant-select">{entries}
    </select>
</section>"#,
        label = escape_html(label),
        entries = entries
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdp_core::{DatabaseId, VariationNodeId};

    fn option(id: i64, label: &str, stock: i64, selected: bool) -> VariantOption {
        VariantOption {
            key: VariationNodeId::new(format!("node-{}", id)),
            value: DatabaseId(id),
            label: label.to_string(),
            stock,
            selected,
        }
    }

    #[test]
    fn test_no_options_renders_nothing() {
        assert_eq!(render_variants(&[], "Options", "left"), "");
    }

    #[test]
    fn test_options_in_order_with_selection() {
        let html = render_variants(
            &[option(1, "Red", 5, false), option(2, "Blue", 0, true)],
            "Opzioni disponibili",
            "disp.",
        );

        let red = html.find(r#"value="1""#).unwrap();
        let blue = html.find(r#"value="2""#).unwrap();
        assert!(red < blue);
        assert!(html.contains(r#"<option value="2" data-key="node-2" selected>Blue (0 disp.)</option>"#));
        assert!(html.contains(">Red (5 disp.)</option>"));
        assert!(html.contains("Opzioni disponibili"));
    }
}
