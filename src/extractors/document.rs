// src/extractors/document.rs
use scraper::{Html, Selector};

/// Read-only, queryable view over one fetched profile page.
///
/// Parsing never fails: html5ever recovers from malformed markup, and lookups
/// on whatever tree it builds simply come back empty.
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    pub fn parse(raw: &str) -> Self {
        Self { html: Html::parse_document(raw) }
    }

    /// Value of `attr` on the first `<tag key="value">` in document order.
    /// Only the first match is consulted, even if it lacks `attr`.
    pub fn attr_where(&self, tag: &str, key: &str, value: &str, attr: &str) -> Option<&str> {
        let css = format!(r#"{}[{}="{}"]"#, tag, key, value.replace('"', "\\\""));
        let selector = match Selector::parse(&css) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::debug!("Unusable selector '{}': {:?}", css, e);
                return None;
            }
        };

        self.html
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr(attr))
    }

    /// `content` of the first `<meta property="...">`, e.g. `og:title`.
    pub fn meta_property(&self, property: &str) -> Option<&str> {
        self.attr_where("meta", "property", property, "content")
    }

    /// `content` of the first `<meta name="...">`, e.g. `description`.
    pub fn meta_name(&self, name: &str) -> Option<&str> {
        self.attr_where("meta", "name", name, "content")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html><html><head>
        <meta property="og:title" content="Jane (@jane)">
        <meta name="description" content="A &quot;quoted&quot; bio">
        <meta property="og:image">
        <meta property="og:image" content="second.jpg">
        </head><body></body></html>"#;

    #[test]
    fn test_meta_lookups() {
        let doc = ParsedDocument::parse(PAGE);
        assert_eq!(doc.meta_property("og:title"), Some("Jane (@jane)"));
        assert_eq!(doc.meta_name("description"), Some(r#"A "quoted" bio"#));
        assert_eq!(doc.meta_property("og:description"), None);
        // name and property lookups are distinct
        assert_eq!(doc.meta_name("og:title"), None);
    }

    #[test]
    fn test_first_match_wins_even_without_attribute() {
        let doc = ParsedDocument::parse(PAGE);
        assert_eq!(doc.meta_property("og:image"), None);
    }

    #[test]
    fn test_malformed_input_is_not_an_error() {
        let doc = ParsedDocument::parse("<meta property=\"og:title\" content=\"x\"<<<<</head>");
        let _ = doc.meta_property("og:title");
        assert_eq!(doc.meta_name("description"), None);

        let empty = ParsedDocument::parse("");
        assert_eq!(empty.meta_property("og:title"), None);
        assert_eq!(empty.attr_where("meta", "property", "a\"]b", "content"), None);
    }
}
