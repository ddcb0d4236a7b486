//! Language type: validated language representation.
//!
//! `Language` can only be built from codes present and enabled in the
//! registry, so every accessor can rely on the registry entry existing.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "es", "en")
    code: &'static str,
}

impl Language {
    pub const SPANISH: Language = Language { code: "es" };

    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The language served on unprefixed site paths.
    pub fn site_default() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// BCP-47 tag, e.g. "es-ES".
    pub fn locale_tag(&self) -> &'static str {
        self.config().locale_tag
    }

    /// Open Graph locale, e.g. "es_ES".
    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }

    /// URL prefix, e.g. "/es".
    pub fn path_prefix(&self) -> String {
        self.config().path_prefix()
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_constant() {
        let spanish = Language::SPANISH;
        assert_eq!(spanish.code(), "es");
        assert_eq!(spanish.name(), "Spanish");
        assert_eq!(spanish.native_name(), "Español");
        assert!(spanish.is_default());
    }

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(!english.is_default());
    }

    #[test]
    fn test_from_code_valid() {
        assert_eq!(Language::from_code("es").unwrap(), Language::SPANISH);
        assert_eq!(Language::from_code("en").unwrap(), Language::ENGLISH);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_site_default_is_spanish() {
        assert_eq!(Language::site_default(), Language::SPANISH);
    }

    #[test]
    fn test_locale_formats() {
        assert_eq!(Language::SPANISH.locale_tag(), "es-ES");
        assert_eq!(Language::SPANISH.og_locale(), "es_ES");
        assert_eq!(Language::ENGLISH.locale_tag(), "en-US");
        assert_eq!(Language::ENGLISH.og_locale(), "en_US");
    }

    #[test]
    fn test_path_prefix() {
        assert_eq!(Language::SPANISH.path_prefix(), "/es");
        assert_eq!(Language::ENGLISH.path_prefix(), "/en");
    }

    #[test]
    fn test_display_and_serialize_use_code() {
        assert_eq!(Language::ENGLISH.to_string(), "en");
        assert_eq!(
            serde_json::to_string(&Language::SPANISH).unwrap(),
            "\"es\""
        );
    }
}
