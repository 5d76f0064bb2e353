// src/instagram/models.rs
use std::fmt;

use crate::utils::error::FetchError;

/// A username that is safe to put in a profile URL path and a log file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Accepts `jane` or `@jane`. Rejects empty input and characters that
    /// would change the URL path or escape the logs directory.
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let name = input.trim().trim_start_matches('@');

        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '/' | '\\' | '?' | '#' | '%'));
        if invalid {
            return Err(FetchError::InvalidUsername(input.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constructs the URL of this user's profile page
    pub fn profile_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
