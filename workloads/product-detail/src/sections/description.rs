//! Description section renderer.

use super::escape_html;

/// Render the plain-text description. Nothing is rendered when it is empty.
pub fn render_description(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!(
        r#"<section class="product-description" data-section="description">
    <p>{}</p>
</section>"#,
        escape_html(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_renders_nothing() {
        assert_eq!(render_description(""), "");
    }

    #[test]
    fn test_description_is_escaped() {
        let html = render_description("Fish & chips");
        assert!(html.contains("<p>Fish &amp; chips</p>"));
    }
}
