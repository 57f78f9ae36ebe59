//! Language tag normalization.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Tag used for both source and target language when nothing else is set.
pub const DEFAULT_LANGUAGE: &str = "en-gb";

/// A normalized language tag (e.g. `en-gb`).
///
/// The only way to build one is through normalization, so two tags compare
/// equal exactly when their normalized forms match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Normalizes `tag` into a language tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        normalize(tag)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        normalize(tag)
    }
}

impl From<String> for LanguageTag {
    fn from(tag: String) -> Self {
        normalize(&tag)
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.0
    }
}

impl PartialEq<str> for LanguageTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Normalize a language tag (lowercase, spaces and underscores become `-`)
///
/// # Examples
/// ```
/// use table_translator::normalize;
///
/// assert_eq!(normalize("EN_US").as_str(), "en-us");
/// assert_eq!(normalize("En Us").as_str(), "en-us");
/// ```
#[must_use]
pub fn normalize(tag: &str) -> LanguageTag {
    LanguageTag(tag.to_lowercase().replace([' ', '_'], "-"))
}
