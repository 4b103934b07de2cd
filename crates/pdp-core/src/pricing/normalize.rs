//! Price string cleanup.

use regex::Regex;
use std::sync::LazyLock;

/// Non-breaking spaces, either as characters or as HTML entities.
static NBSP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)&nbsp;|&#0*160;|&#x0*a0;|[\u{00A0}\u{202F}\u{2007}]")
        .expect("non-breaking space pattern is valid")
});

/// Clean a raw price string so it is safe to render.
///
/// Every non-breaking space becomes an ordinary space and surrounding
/// whitespace is trimmed. A missing price yields an empty string.
pub fn normalize(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    NBSP_RE.replace_all(raw, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_empty() {
        assert_eq!(normalize(None), "");
    }

    #[test]
    fn test_entity_and_char_forms() {
        assert_eq!(normalize(Some("100&nbsp;kr")), "100 kr");
        assert_eq!(normalize(Some("100\u{a0}kr")), "100 kr");
        assert_eq!(normalize(Some("100&#160;kr")), "100 kr");
        assert_eq!(normalize(Some("100&#xA0;kr")), "100 kr");
        assert_eq!(normalize(Some("100&NBSP;kr")), "100 kr");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize(Some("  80 kr \n")), "80 kr");
        assert_eq!(normalize(Some("&nbsp;80 kr&nbsp;")), "80 kr");
        assert_eq!(normalize(Some("   ")), "");
    }

    #[test]
    fn test_plain_price_untouched() {
        assert_eq!(normalize(Some("100 kr")), "100 kr");
        assert_eq!(normalize(Some("€12,50")), "€12,50");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "  ",
            "100&nbsp;kr",
            "\u{a0}\u{a0}5\u{202f}000 kr ",
            "&&nbsp;nbsp;",
            "&#1&#160;60;",
            "kr 80 - kr 100",
        ];
        for s in samples {
            let once = normalize(Some(s));
            assert_eq!(normalize(Some(&once)), once, "input {:?}", s);
        }
    }
}
