use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while reading translation tables.
///
/// A missing key or a missing table file is never reported here; both fall back
/// to the untranslated string.
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// The table file exists but is not a flat JSON object of strings
    #[error("Malformed translation table {}: {source}", path.display())]
    TableFormat {
        /// Path of the offending table file
        path: PathBuf,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },
    /// The table file exists but could not be read
    #[error("Failed to read translation table {}: {source}", path.display())]
    TableRead {
        /// Path of the unreadable table file
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}

impl TranslatorError {
    /// Path of the table file this error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::TableFormat { path, .. } | Self::TableRead { path, .. } => path,
        }
    }
}
