// src/extractors/profile.rs

// --- Imports ---
use serde::Serialize;

use crate::extractors::bio::extract_bio;
use crate::extractors::counts::{extract_counts, Counts};
use crate::extractors::document::ParsedDocument;
use crate::extractors::identifier::extract_identifier;
use crate::extractors::name::extract_name;

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    pub username: String,   // As requested, without a leading '@'
    pub name: String,       // Display name, never empty
    pub bio: String,        // "None" when unavailable
    pub followers: String,  // "?" when unavailable
    pub following: String,  // "?" when unavailable
    pub posts: String,      // "?" when unavailable
    pub identifier: String, // "None" when unavailable
    pub exists: bool,
}

/// Result of one lookup. `NotFound` is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(ProfileRecord),
    NotFound { username: String },
}

/// Extraction strategy for the fields that sit behind the existence gate.
/// Every method must return its sentinel instead of failing.
pub trait FieldStrategy {
    fn counts(&self, doc: &ParsedDocument) -> Counts;
    fn bio(&self, doc: &ParsedDocument) -> String;
    fn identifier(&self, raw: &str) -> String;
}

/// Reads fields from the page's meta tags and inline script data.
pub struct MetaTagStrategy;

impl FieldStrategy for MetaTagStrategy {
    fn counts(&self, doc: &ParsedDocument) -> Counts {
        extract_counts(doc)
    }

    fn bio(&self, doc: &ParsedDocument) -> String {
        extract_bio(doc)
    }

    fn identifier(&self, raw: &str) -> String {
        extract_identifier(raw)
    }
}

// --- Main Assembler Structure ---
pub struct ProfileAssembler<S = MetaTagStrategy> {
    strategy: S,
}

impl ProfileAssembler<MetaTagStrategy> {
    pub fn new() -> Self {
        Self { strategy: MetaTagStrategy }
    }
}

impl<S: FieldStrategy> ProfileAssembler<S> {
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    /// Turns one fetched page into a lookup outcome.
    ///
    /// The name runs first; without a title the remaining extractors are
    /// skipped entirely.
    pub fn assemble(&self, raw: &str, username: &str) -> LookupOutcome {
        let doc = ParsedDocument::parse(raw);

        let Some(name) = extract_name(&doc, username) else {
            tracing::info!("No title on page for '{}', profile does not exist", username);
            return LookupOutcome::NotFound { username: username.to_string() };
        };

        let counts = self.strategy.counts(&doc);
        let bio = self.strategy.bio(&doc);
        let identifier = self.strategy.identifier(raw);

        tracing::debug!("Assembled profile for '{}': name={:?}, id={}", username, name, identifier);
        LookupOutcome::Found(ProfileRecord {
            username: username.to_string(),
            name,
            bio,
            followers: counts.followers,
            following: counts.following,
            posts: counts.posts,
            identifier,
            exists: true,
        })
    }
}
