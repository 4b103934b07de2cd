//! Product hero section renderer.

use pdp_core::view::ProductView;

use super::escape_html;

/// Render the product image and title.
pub fn render_hero(view: &ProductView) -> String {
    format!(
        r#"<section class="product-hero" data-section="hero">
    <div class="product-gallery">
        <img id="product-image" src="{src}" alt="{alt}" class="product-image-main">
    </div>
    <h1 class="product-name">{name}</h1>
</section>"#,
        src = escape_html(&view.image_url),
        alt = escape_html(&view.name),
        name = escape_html(&view.name),
    )
}
