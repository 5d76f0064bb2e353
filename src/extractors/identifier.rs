// src/extractors/identifier.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::error::ExtractError;

const NO_IDENTIFIER: &str = "None";

// Inline script data carries the numeric account id: "props":{"id":"178414...".
static PROPS_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""props":\{"id":"(.*?)""#).expect("Failed to compile PROPS_ID_RE")
});

/// Internal account identifier scanned from the raw page text, or `"None"`.
/// Works on the raw text because the id lives in `<script>` data, not in attributes.
pub fn extract_identifier(raw: &str) -> String {
    match find_identifier(raw) {
        Ok(id) => id.to_string(),
        Err(e) => {
            tracing::debug!("Identifier unavailable: {}", e);
            NO_IDENTIFIER.to_string()
        }
    }
}

fn find_identifier(raw: &str) -> Result<&str, ExtractError> {
    let id = PROPS_ID_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .ok_or(ExtractError::PatternNotFound)?
        .as_str();

    if id.is_empty() {
        return Err(ExtractError::EmptyField("identifier"));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_found() {
        let raw = r#"<script>{"require":[{"props":{"id":"17841400000000000"}}]}</script>"#;
        assert_eq!(extract_identifier(raw), "17841400000000000");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let raw = r#""props":{"id":"111","x":1} "props":{"id":"222"}"#;
        assert_eq!(extract_identifier(raw), "111");
    }

    #[test]
    fn test_identifier_absent() {
        assert_eq!(extract_identifier("<html></html>"), "None");
        assert_eq!(extract_identifier(r#""props": {"id":"1"}"#), "None");
        assert_eq!(find_identifier(r#""props":{"id":""}"#), Err(ExtractError::EmptyField("identifier")));
    }

    #[test]
    fn test_match_does_not_cross_lines() {
        let raw = "\"props\":{\"id\":\"123\n\"";
        assert_eq!(find_identifier(raw), Err(ExtractError::PatternNotFound));
    }
}
