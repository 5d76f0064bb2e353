// src/extractors/bio.rs
use crate::extractors::document::ParsedDocument;
use crate::utils::error::ExtractError;

const DESCRIPTION_NAME: &str = "description";
const NO_BIO: &str = "None";

/// Profile bio from `<meta name="description">`, or `"None"`.
///
/// The platform quotes the bio inside a longer sentence:
/// `12 Followers, ... - Jane (@jane) on Instagram: "the bio"`.
pub fn extract_bio(doc: &ParsedDocument) -> String {
    match doc
        .meta_name(DESCRIPTION_NAME)
        .filter(|d| !d.is_empty())
        .ok_or(ExtractError::MissingAttribute(DESCRIPTION_NAME))
        .and_then(quoted_bio)
    {
        Ok(bio) => bio,
        Err(e) => {
            tracing::debug!("Bio unavailable: {}", e);
            NO_BIO.to_string()
        }
    }
}

/// Second `"`-delimited segment, trimmed, newlines folded to spaces.
fn quoted_bio(description: &str) -> Result<String, ExtractError> {
    let segment = description
        .split('"')
        .nth(1)
        .ok_or(ExtractError::MissingQuotedSegment)?;

    let bio = segment.trim().replace('\n', " ");
    if bio.is_empty() {
        return Err(ExtractError::EmptyField("bio"));
    }
    Ok(bio)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_description(description: &str) -> ParsedDocument {
        ParsedDocument::parse(&format!(
            r#"<html><head><meta name="description" content="{}"></head></html>"#,
            description
        ))
    }

    #[test]
    fn test_multiline_bio_is_folded() {
        let doc = page_with_description("foo &quot;This is my bio\nline two&quot; bar");
        assert_eq!(extract_bio(&doc), "This is my bio line two");
    }

    #[test]
    fn test_bio_is_trimmed() {
        let doc = page_with_description(
            "5 Followers - Jane (@jane) on Instagram: &quot;  coffee &amp; code  &quot;",
        );
        assert_eq!(extract_bio(&doc), "coffee & code");
    }

    #[test]
    fn test_missing_description() {
        let doc = ParsedDocument::parse("<html><head></head></html>");
        assert_eq!(extract_bio(&doc), "None");
    }

    #[test]
    fn test_unquoted_or_blank_bio() {
        assert_eq!(extract_bio(&page_with_description("no quotes at all")), "None");
        assert_eq!(extract_bio(&page_with_description("blank &quot;   &quot;")), "None");
        assert_eq!(extract_bio(&page_with_description("")), "None");
    }

    #[test]
    fn test_quoted_bio_errors() {
        assert_eq!(quoted_bio("x"), Err(ExtractError::MissingQuotedSegment));
        assert_eq!(quoted_bio(r#"a "" b"#), Err(ExtractError::EmptyField("bio")));
        assert_eq!(quoted_bio(r#"a "open ended"#), Ok("open ended".to_string()));
    }
}
