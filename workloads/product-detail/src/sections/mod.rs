//! Section renderers for the product detail page.

mod cart;
mod description;
mod hero;
mod loading;
mod pricing;
mod stock;
mod variants;

pub use cart::*;
pub use description::*;
pub use hero::*;
pub use loading::*;
pub use pricing::*;
pub use stock::*;
pub use variants::*;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
