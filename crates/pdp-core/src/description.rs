//! Rich-text description to plain text.
//!
//! Markup parsing is a capability of the rendering environment. Environments
//! without it render an empty description instead of failing.

use scraper::Html;

/// Converts description markup into plain text.
pub trait DescriptionSanitizer {
    /// Whether this environment can parse markup at all.
    fn supports_markup(&self) -> bool;

    /// Text content of `markup`. Only called when [`supports_markup`] is true.
    ///
    /// [`supports_markup`]: DescriptionSanitizer::supports_markup
    fn extract_text(&self, markup: &str) -> String;
}

/// Sanitizer backed by an HTML parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSanitizer;

impl DescriptionSanitizer for HtmlSanitizer {
    fn supports_markup(&self) -> bool {
        true
    }

    fn extract_text(&self, markup: &str) -> String {
        if !markup.contains('<') && !markup.contains('&') {
            return markup.trim().to_string();
        }
        let fragment = Html::parse_fragment(markup);
        let text: String = fragment.root_element().text().collect();
        text.trim().to_string()
    }
}

/// Environment without markup parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedSanitizer;

impl DescriptionSanitizer for UnsupportedSanitizer {
    fn supports_markup(&self) -> bool {
        false
    }

    fn extract_text(&self, _markup: &str) -> String {
        String::new()
    }
}

/// Plain-text description for display; empty when absent or unsupported.
pub fn plain_description(sanitizer: &dyn DescriptionSanitizer, description: Option<&str>) -> String {
    match description {
        Some(markup) if sanitizer.supports_markup() => sanitizer.extract_text(markup),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        let text = plain_description(&HtmlSanitizer, Some("<p>Hello <b>world</b></p>"));
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn test_decodes_entities() {
        let text = plain_description(&HtmlSanitizer, Some("<p>Fish &amp; chips&nbsp;only</p>"));
        assert_eq!(text, "Fish & chips\u{a0}only");
    }

    #[test]
    fn test_concatenates_blocks_like_text_content() {
        let text = plain_description(&HtmlSanitizer, Some("<p>One</p><p>Two</p>"));
        assert_eq!(text, "OneTwo");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(plain_description(&HtmlSanitizer, Some("  No markup ")), "No markup");
    }

    #[test]
    fn test_absent_description() {
        assert_eq!(plain_description(&HtmlSanitizer, None), "");
    }

    #[test]
    fn test_unsupported_environment_falls_back_to_empty() {
        assert_eq!(
            plain_description(&UnsupportedSanitizer, Some("<p>Hidden</p>")),
            ""
        );
    }
}
