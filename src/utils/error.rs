// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 404 Not Found, 500 Internal Server Error

    #[error("Rate limit likely exceeded")]
    RateLimited, // 429 Too Many Requests or 403 Forbidden

    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),
}

/// Recoverable failure inside a single field extractor.
/// Never leaves the extractor: each one maps it to its sentinel value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Missing meta attribute: {0}")]
    MissingAttribute(&'static str),

    #[error("Count value without a label: {0}")]
    UnpairedToken(String),

    #[error("No quoted segment in description")]
    MissingQuotedSegment,

    #[error("Field is empty: {0}")]
    EmptyField(&'static str),

    #[error("Pattern not found in page")]
    PatternNotFound,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to fetch profile page: {0}")]
    Fetch(#[from] FetchError), // Automatically convert fetch errors

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
