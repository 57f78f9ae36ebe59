//! table-translator
//!
//! Per-language lookup tables for translating strings, with language tag
//! normalization, lazily loaded and cached tables, and placeholder substitution.
//!
//! ```no_run
//! use table_translator::Translator;
//!
//! # fn main() -> Result<(), table_translator::TranslatorError> {
//! let mut translator = Translator::new();
//! translator.set_translations_path("locales");
//! translator.set_target("fr_FR");
//!
//! // Looks up locales/fr-fr.json and falls back to the input if missing.
//! let greeting = translator.translate("Welcome back, :user", &[(":user", "Ada")], None)?;
//! # let _ = greeting;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod language;
pub mod placeholder;
pub mod table;
mod test_utils;
pub mod translator;

pub use error::TranslatorError;
pub use language::{
    LanguageTag,
    normalize,
};
pub use placeholder::substitute;
pub use table::TranslationTable;
pub use translator::Translator;
