// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::extractors::ProfileRecord;
use crate::instagram::Username;
use crate::utils::error::StorageError;

/// Keeps the raw page (and optionally the extracted record) of each lookup
/// under one logs directory for later inspection.
pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Writes the fetched page verbatim to `<base_dir>/<username>.log`, replacing any previous one.
    pub fn save_raw_page(&self, username: &Username, html: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}.log", username));

        fs::write(&file_path, html)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved raw page to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves the extracted record in JSON format as `<base_dir>/<username>.json`
    pub fn save_record(&self, record: &ProfileRecord) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}.json", record.username));

        let metadata = serde_json::json!({
            "profile": record,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved record to {}", file_path.display());

        Ok(file_path)
    }
}
