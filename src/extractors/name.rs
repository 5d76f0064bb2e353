// src/extractors/name.rs
use crate::extractors::document::ParsedDocument;
use crate::utils::text::capitalize_first;

const TITLE_PROPERTY: &str = "og:title";

/// Display name for the profile, or `None` when the page has no title.
///
/// A missing `og:title` is the existence gate: the platform serves a page
/// without one for unknown accounts.
///
/// Titles look like `"Display Name (@handle) • Instagram photos and videos"`.
/// The part before the first `(` is used; otherwise the requested username.
pub fn extract_name(doc: &ParsedDocument, username: &str) -> Option<String> {
    let title = doc.meta_property(TITLE_PROPERTY).filter(|t| !t.is_empty())?;

    let display = match title.split_once('(') {
        Some((before, _)) => capitalize_first(before.trim()),
        None => String::new(),
    };

    if display.is_empty() {
        tracing::debug!("No display name in title {:?}, using username", title);
        return Some(capitalize_first(username));
    }
    Some(display)
}
