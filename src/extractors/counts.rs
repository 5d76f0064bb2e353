// src/extractors/counts.rs
use std::collections::HashMap;

use crate::extractors::document::ParsedDocument;
use crate::utils::error::ExtractError;

const SUMMARY_PROPERTY: &str = "og:description";
const UNKNOWN: &str = "?";

// Canonical keys after label normalization.
pub const FOLLOWERS: &str = "Followers";
pub const FOLLOWING: &str = "Following";
pub const POSTS: &str = "Posts";

/// Follower / following / post counts, kept as the page prints them ("1,234", "1.2M").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counts {
    pub followers: String,
    pub following: String,
    pub posts: String,
}

impl Counts {
    pub fn unknown() -> Self {
        Self {
            followers: UNKNOWN.to_string(),
            following: UNKNOWN.to_string(),
            posts: UNKNOWN.to_string(),
        }
    }

    /// Each field falls back to "?" on its own when its label was not seen.
    fn from_map(mut map: HashMap<String, String>) -> Self {
        let mut take = |key: &str| map.remove(key).unwrap_or_else(|| UNKNOWN.to_string());
        Self {
            followers: take(FOLLOWERS),
            following: take(FOLLOWING),
            posts: take(POSTS),
        }
    }
}

/// Reads counts from the `og:description` summary, e.g.
/// `"1,234 Followers, 56 Following, 78 Posts - See Instagram photos and videos from ..."`.
///
/// Any failure yields `Counts::unknown()`; there is no partial result.
pub fn extract_counts(doc: &ParsedDocument) -> Counts {
    let parsed = doc
        .meta_property(SUMMARY_PROPERTY)
        .ok_or(ExtractError::MissingAttribute(SUMMARY_PROPERTY))
        .and_then(parse_summary);

    match parsed {
        Ok(map) => Counts::from_map(map),
        Err(e) => {
            tracing::debug!("Counts unavailable: {}", e);
            Counts::unknown()
        }
    }
}

/// Pairs up `<value> <label>` tokens from the text before the first '-'.
///
/// Labels lose their last character ("Followers," -> "Followers",
/// "Following," -> "Following") except a bare "Posts".
fn parse_summary(summary: &str) -> Result<HashMap<String, String>, ExtractError> {
    let head = summary.split('-').next().unwrap_or_default();
    let tokens: Vec<&str> = head.split_whitespace().collect();

    let pairs = tokens.chunks_exact(2);
    if let [dangling] = pairs.remainder() {
        return Err(ExtractError::UnpairedToken(dangling.to_string()));
    }

    Ok(pairs
        .map(|pair| (normalize_label(pair[1]), pair[0].to_string()))
        .collect())
}

fn normalize_label(label: &str) -> String {
    if label == POSTS {
        return label.to_string();
    }
    let mut chars = label.chars();
    chars.next_back();
    chars.as_str().to_string()
}
