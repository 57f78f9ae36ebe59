//! Translator: language settings plus a per-language table cache.

use std::collections::HashMap;
use std::path::{
    MAIN_SEPARATOR_STR,
    Path,
    PathBuf,
};
use std::sync::Arc;

use crate::config::{
    ConfigError,
    TranslatorSettings,
    load_from_dir,
};
use crate::error::TranslatorError;
use crate::language::LanguageTag;
use crate::placeholder::substitute;
use crate::table::{
    DEFAULT_EXTENSION,
    TranslationTable,
    load_table_file,
};

/// Looks up translated strings in per-language tables.
///
/// Tables are read from `<translations path><tag>.<extension>` the first time a
/// language is requested and cached for the lifetime of the translator. A
/// missing table file is cached as an empty table and never retried.
///
/// Lookups take `&mut self`; share a translator between threads by wrapping it
/// in a `Mutex`.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Language strings passed to `translate` are written in
    source: LanguageTag,
    /// Language lookups are made against
    target: LanguageTag,
    /// Table directory, always ending in exactly one separator
    translations_path: Option<PathBuf>,
    /// Table file extension without the leading dot
    extension: String,
    /// Loaded tables keyed by language
    cache: HashMap<LanguageTag, Arc<TranslationTable>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Creates a translator with source and target `en-gb` and no table directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: LanguageTag::default(),
            target: LanguageTag::default(),
            translations_path: None,
            extension: DEFAULT_EXTENSION.to_string(),
            cache: HashMap::new(),
        }
    }

    /// Creates a translator from (already validated) settings.
    #[must_use]
    pub fn from_settings(settings: &TranslatorSettings) -> Self {
        let mut translator = Self::new();
        translator.set_source(settings.source_language.as_str());
        translator.set_target(settings.target_language.as_str());
        translator.set_extension(&settings.extension);
        if let Some(path) = &settings.translations_path {
            translator.set_translations_path(path);
        }
        translator
    }

    /// Creates a translator from the `.translator.json` in `dir`.
    ///
    /// Without a settings file, or when it names no `translationsPath`, tables
    /// are read from `dir` itself.
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let mut settings = load_from_dir(dir)?.unwrap_or_default();
        settings.translations_path.get_or_insert_with(|| dir.to_path_buf());
        Ok(Self::from_settings(&settings))
    }

    /// Sets the source language. An empty tag leaves it unchanged.
    pub fn set_source(&mut self, tag: &str) -> &LanguageTag {
        if tag.is_empty() {
            tracing::warn!("Ignoring empty source language");
        } else {
            self.source = LanguageTag::new(tag);
            tracing::debug!("Source language set to {}", self.source);
        }
        &self.source
    }

    #[must_use]
    pub const fn source(&self) -> &LanguageTag {
        &self.source
    }

    /// Sets the target language. An empty tag leaves it unchanged.
    pub fn set_target(&mut self, tag: &str) -> &LanguageTag {
        if tag.is_empty() {
            tracing::warn!("Ignoring empty target language");
        } else {
            self.target = LanguageTag::new(tag);
            tracing::debug!("Target language set to {}", self.target);
        }
        &self.target
    }

    #[must_use]
    pub const fn target(&self) -> &LanguageTag {
        &self.target
    }

    /// Sets the table directory, normalized to end in exactly one separator.
    ///
    /// Repeated separators inside the path are collapsed as well. The
    /// directory is not checked here; a missing directory simply means every
    /// table is missing.
    pub fn set_translations_path(&mut self, path: impl AsRef<Path>) -> &Path {
        let mut normalized: PathBuf = path.as_ref().components().collect();
        if normalized.as_os_str().is_empty() {
            normalized.push(MAIN_SEPARATOR_STR);
        } else {
            // pushing an empty component appends a single trailing separator
            normalized.push("");
        }
        tracing::debug!("Translations path set to {:?}", normalized);
        self.translations_path.insert(normalized)
    }

    #[must_use]
    pub fn translations_path(&self) -> Option<&Path> {
        self.translations_path.as_deref()
    }

    /// Sets the table file extension. Leading dots are dropped; an empty
    /// extension leaves it unchanged.
    pub fn set_extension(&mut self, extension: &str) -> &str {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            tracing::warn!("Ignoring empty table extension");
        } else {
            self.extension = extension.to_string();
        }
        &self.extension
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path of the table file for `language`.
    #[must_use]
    pub fn table_path(&self, language: &LanguageTag) -> PathBuf {
        let dir = self.translations_path.as_deref().unwrap_or_else(|| Path::new(""));
        dir.join(format!("{language}.{}", self.extension))
    }

    /// Returns the table for `language`, reading it on first use.
    ///
    /// Once a language is cached, later calls return the same table even if
    /// the file changes or disappears. Failed reads are not cached.
    pub fn load(&mut self, language: &LanguageTag) -> Result<Arc<TranslationTable>, TranslatorError> {
        if let Some(table) = self.cache.get(language) {
            return Ok(Arc::clone(table));
        }

        let file_path = self.table_path(language);
        let table = Arc::new(load_table_file(&file_path)?.unwrap_or_default());
        tracing::debug!("Cached {} entries for {}", table.len(), language);
        self.cache.insert(language.clone(), Arc::clone(&table));

        Ok(table)
    }

    /// Translates `text` into `target` (the current target if `None`).
    ///
    /// Returns `text` unchanged when there is no entry for it.
    pub fn get(&mut self, text: &str, target: Option<&LanguageTag>) -> Result<String, TranslatorError> {
        let target = target.unwrap_or(&self.target).clone();
        let table = self.load(&target)?;

        Ok(table.get(text).unwrap_or(text).to_string())
    }

    /// Translates `text` from `source` (the current source if `None`) into
    /// the current target, then applies placeholder `values`.
    ///
    /// No lookup happens when source and target are the same language.
    pub fn translate(
        &mut self,
        text: &str,
        values: &[(&str, &str)],
        source: Option<&LanguageTag>,
    ) -> Result<String, TranslatorError> {
        let source = source.unwrap_or(&self.source);
        let translated =
            if *source == self.target { text.to_string() } else { self.get(text, None)? };

        if values.is_empty() {
            return Ok(translated);
        }
        Ok(substitute(&translated, values))
    }

    /// Whether a table for `language` is already cached.
    #[must_use]
    pub fn is_loaded(&self, language: &LanguageTag) -> bool {
        self.cache.contains_key(language)
    }

    /// Languages with a cached table, in no particular order.
    pub fn cached_languages(&self) -> impl Iterator<Item = &LanguageTag> {
        self.cache.keys()
    }
}
