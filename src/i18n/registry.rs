//! Language registry: Single source of truth for all site languages.
//!
//! The registry is a process-wide singleton built with `OnceLock` on first
//! access and never mutated afterwards.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "es", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Spanish", "English")
    pub name: &'static str,

    /// Native name of the language (e.g., "Español", "English")
    pub native_name: &'static str,

    /// BCP-47 tag used for `inLanguage` in structured data (e.g., "es-ES")
    pub locale_tag: &'static str,

    /// Open Graph locale (e.g., "es_ES")
    pub og_locale: &'static str,

    /// Whether unprefixed site paths are served in this language (only one should be true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

impl LanguageConfig {
    /// URL prefix for routes in this language (e.g., "/es").
    pub fn path_prefix(&self) -> String {
        format!("/{}", self.code)
    }
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the default site language.
    ///
    /// # Panics
    /// Panics if zero or several languages are flagged as default. This is a
    /// configuration error in `default_languages`.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The site is published in Spanish (default, also served unprefixed) and English.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            locale_tag: "es-ES",
            og_locale: "es_ES",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            locale_tag: "en-US",
            og_locale: "en_US",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_spanish() {
        let config = LanguageRegistry::get()
            .get_by_code("es")
            .expect("Spanish should be registered");

        assert_eq!(config.name, "Spanish");
        assert_eq!(config.native_name, "Español");
        assert_eq!(config.locale_tag, "es-ES");
        assert_eq!(config.og_locale, "es_ES");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("English should be registered");

        assert_eq!(config.locale_tag, "en-US");
        assert_eq!(config.og_locale, "en_US");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_enabled_keeps_registry_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_enabled()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["es", "en"]);
    }

    #[test]
    fn test_default_language_is_spanish() {
        assert_eq!(LanguageRegistry::get().default_language().code, "es");
    }

    #[test]
    fn test_is_enabled() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_enabled("es"));
        assert!(registry.is_enabled("en"));
        assert!(!registry.is_enabled("pt"));
    }

    #[test]
    fn test_path_prefix() {
        let config = LanguageRegistry::get().get_by_code("en").unwrap();
        assert_eq!(config.path_prefix(), "/en");
    }
}
