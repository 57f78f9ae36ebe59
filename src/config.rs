//! Translator settings, optionally read from a `.translator.json` file.

use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::language::LanguageTag;
use crate::table::DEFAULT_EXTENSION;

/// Name of the settings file looked up by [`load_from_dir`].
pub const CONFIG_FILE_NAME: &str = ".translator.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting has a value the translator cannot use
    #[error("Invalid setting '{field}': {reason}")]
    Invalid {
        /// camelCase name of the setting
        field: &'static str,
        reason: String,
    },
    #[error("Failed to read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslatorSettings {
    /// Language the strings passed to `translate` are written in.
    pub source_language: LanguageTag,
    /// Language lookups are made against.
    pub target_language: LanguageTag,
    /// Directory holding `<tag>.<extension>` table files.
    /// If unset, tables are resolved against the working directory.
    pub translations_path: Option<PathBuf>,
    /// Table file extension, without the leading dot.
    pub extension: String,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            source_language: LanguageTag::default(),
            target_language: LanguageTag::default(),
            translations_path: None,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl TranslatorSettings {
    /// Checks the settings, reporting the first unusable field.
    ///
    /// # Errors
    /// `ConfigError::Invalid` for an empty language, an empty extension or an
    /// extension containing a path separator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_language.is_empty() {
            return Err(invalid("sourceLanguage", "must not be empty"));
        }
        if self.target_language.is_empty() {
            return Err(invalid("targetLanguage", "must not be empty"));
        }

        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(invalid("extension", "must not be empty"));
        }
        if extension.contains(std::path::is_separator) {
            return Err(invalid(
                "extension",
                format!("'{}' must not contain a path separator", self.extension),
            ));
        }

        Ok(())
    }
}

/// Shorthand for a `ConfigError::Invalid`.
fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.into() }
}

/// Read and validate `<dir>/.translator.json`.
///
/// A relative `translationsPath` is resolved against `dir`.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and holds valid settings
/// - `Ok(None)`: there is no settings file
/// - `Err(ConfigError)`: the file could not be read, parsed or validated
pub fn load_from_dir(dir: &Path) -> Result<Option<TranslatorSettings>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.is_file() {
        tracing::debug!("Settings file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading settings from: {:?}", config_path);

    let content = std::fs::read(&config_path)
        .map_err(|source| ConfigError::Read { path: config_path.clone(), source })?;
    let mut settings: TranslatorSettings = serde_json::from_slice(&content)
        .map_err(|source| ConfigError::Parse { path: config_path.clone(), source })?;
    settings.validate()?;

    if let Some(path) = &settings.translations_path
        && path.is_relative()
    {
        settings.translations_path = Some(dir.join(path));
    }

    tracing::debug!("Loaded settings: {:?}", settings);
    Ok(Some(settings))
}
