//! Translation table input definitions

use std::collections::HashMap;
use std::path::Path;

use crate::error::TranslatorError;

/// Default extension of translation table files.
pub const DEFAULT_EXTENSION: &str = "json";

/// Mapping from original strings to their translations for one language.
///
/// Tables are immutable once loaded; a reload replaces the whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    /// Original string -> translated string
    entries: HashMap<String, String>,
}

impl TranslationTable {
    #[must_use]
    pub const fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Looks up the translation of `text` (exact, case-sensitive).
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&str> {
        self.entries.get(text).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Parse the raw bytes of a table file.
///
/// Only a flat, UTF-8 encoded JSON object whose values are all strings is
/// accepted.
///
/// # Errors
/// `TranslatorError::TableFormat` for invalid UTF-8, invalid JSON or any other shape.
pub fn parse_table(content: &[u8], file_path: &Path) -> Result<TranslationTable, TranslatorError> {
    let entries: HashMap<String, String> = serde_json::from_slice(content)
        .map_err(|source| TranslatorError::TableFormat { path: file_path.to_path_buf(), source })?;

    Ok(TranslationTable::new(entries))
}

/// Load a translation table file.
///
/// # Returns
/// - `Ok(Some(table))`: the file exists and holds a valid table
/// - `Ok(None)`: the file does not exist
/// - `Err(TranslatorError)`: the file could not be read or parsed
pub fn load_table_file(file_path: &Path) -> Result<Option<TranslationTable>, TranslatorError> {
    if !file_path.is_file() {
        tracing::debug!("Translation table not found: {:?}", file_path);
        return Ok(None);
    }

    tracing::debug!("Loading translation table from: {:?}", file_path);

    let content = std::fs::read(file_path)
        .map_err(|source| TranslatorError::TableRead { path: file_path.to_path_buf(), source })?;
    let table = parse_table(&content, file_path)?;

    tracing::debug!("Loaded {} entries from {:?}", table.len(), file_path);
    Ok(Some(table))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[googletest::test]
    fn parse_flat_object() {
        let table =
            parse_table(br#"{"Hello": "Bonjour", "Goodbye": "Au revoir"}"#, Path::new("fr-fr.json"))
                .unwrap();

        expect_that!(table.get("Hello"), some(eq("Bonjour")));
        expect_that!(table.get("Goodbye"), some(eq("Au revoir")));
        expect_that!(table.get("hello"), none());
        expect_that!(table.len(), eq(2));
    }

    #[googletest::test]
    fn parse_empty_object() {
        let table = parse_table(b"{}", Path::new("xx.json")).unwrap();

        expect_that!(table.is_empty(), eq(true));
    }

    #[rstest]
    #[case::invalid_json("not json")]
    #[case::nested_object(r#"{"common": {"hello": "Hello"}}"#)]
    #[case::number_value(r#"{"count": 1}"#)]
    #[case::null_value(r#"{"hello": null}"#)]
    #[case::array(r#"["Hello", "Bonjour"]"#)]
    #[case::string(r#""Hello""#)]
    #[case::empty_file("")]
    fn parse_rejects_other_shapes(#[case] content: &str) {
        let result = parse_table(content.as_bytes(), Path::new("bad.json"));

        assert!(matches!(result, Err(TranslatorError::TableFormat { .. })));
    }

    #[rstest]
    fn parse_error_reports_path() {
        let err = parse_table(b"[]", Path::new("locales/de-de.json")).unwrap_err();

        assert_eq!(err.path(), Path::new("locales/de-de.json"));
        assert!(err.to_string().contains("locales/de-de.json"));
    }

    /// UTF-8 として不正なバイト列は読み込みエラーではなく形式エラー
    #[rstest]
    #[case::in_value(b"{\"Hello\": \"\xff\xfe\"}")]
    #[case::in_key(b"{\"\xff\": \"Bonjour\"}")]
    #[case::utf16_bom(b"\xff\xfe{\x00}\x00")]
    fn parse_rejects_invalid_utf8(#[case] content: &[u8]) {
        let result = parse_table(content, Path::new("fr-fr.json"));

        assert!(matches!(result, Err(TranslatorError::TableFormat { .. })));
    }

    #[rstest]
    fn load_invalid_utf8_file_is_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fr-fr.json");
        fs::write(&path, b"{\"Hello\": \"\xff\xfe\"}").unwrap();

        let result = load_table_file(&path);

        assert!(matches!(result, Err(TranslatorError::TableFormat { .. })));
    }

    /// ファイルが存在しない場合は None
    #[rstest]
    fn load_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_table_file(&temp_dir.path().join("xx-xx.json"));

        assert!(result.unwrap().is_none());
    }

    #[rstest]
    fn load_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fr-fr.json");
        fs::write(&path, r#"{"Hello": "Bonjour"}"#).unwrap();

        let table = load_table_file(&path).unwrap().unwrap();

        assert_eq!(table.get("Hello"), Some("Bonjour"));
    }

    /// ディレクトリはテーブルファイルとして扱わない
    #[rstest]
    fn load_directory_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("fr-fr.json")).unwrap();

        let result = load_table_file(&temp_dir.path().join("fr-fr.json"));

        assert!(result.unwrap().is_none());
    }

    #[rstest]
    fn collect_from_pairs() {
        let table: TranslationTable = [("Yes", "Oui"), ("No", "Non")].into_iter().collect();

        assert!(table.contains("Yes"));
        assert_eq!(table.iter().count(), 2);
    }
}
