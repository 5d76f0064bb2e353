// src/extractors/mod.rs
pub mod bio;
pub mod counts;
pub mod document;
pub mod identifier;
pub mod name;
pub mod profile;

// Re-export key extraction types for convenience
pub use profile::{LookupOutcome, ProfileAssembler, ProfileRecord};
