//! Loading state renderer.

use super::escape_html;

/// Render the placeholder shown until the product is available.
pub fn render_loading(message: &str) -> String {
    format!(
        r#"<section class="product-loading" data-section="loading">
    <p class="loading-message">{}</p>
    <div class="loading-spinner" aria-hidden="true"></div>
</section>"#,
        escape_html(message)
    )
}
