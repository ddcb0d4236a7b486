//! Key-path resolution with `{name}` interpolation.
//!
//! Resolution is total: a key that cannot be displayed comes back verbatim so
//! missing copy is visible on the page instead of rendering blank.

use crate::i18n::{I18nError, Language, TranslationDocument, TranslationValue};
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, error};

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

static SPANISH_CATALOG: OnceLock<Translator> = OnceLock::new();
static ENGLISH_CATALOG: OnceLock<Translator> = OnceLock::new();

pub(crate) fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([^{}]*)\}").unwrap())
}

/// Named values substituted into `{name}` tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationParams {
    values: BTreeMap<String, String>,
}

impl TranslationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter; strings and numbers are stored in their display form.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.values.insert(name.into(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for TranslationParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |params, (name, value)| params.with(name, value))
    }
}

/// Replace every `{name}` that has a parameter; other tokens are kept as-is.
pub fn interpolate(template: &str, params: &TranslationParams) -> String {
    if params.is_empty() {
        return template.to_string();
    }
    placeholder_regex()
        .replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Translation catalog for one language.
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    document: TranslationDocument,
}

impl Translator {
    pub fn new(language: Language, document: TranslationDocument) -> Self {
        Self { language, document }
    }

    /// Build from the catalog compiled into the binary.
    pub fn embedded(language: Language) -> Result<Self, I18nError> {
        let document = TranslationDocument::from_json_str(embedded_source(language))?;
        Ok(Self::new(language, document))
    }

    /// Build from `<dir>/<code>.json`.
    pub fn from_dir(language: Language, dir: impl AsRef<Path>) -> Result<Self, I18nError> {
        let path = dir.as_ref().join(format!("{}.json", language.code()));
        let document = TranslationDocument::from_path(&path)?;
        debug!("Loaded {} catalog from {}", language, path.display());
        Ok(Self::new(language, document))
    }

    /// Process-wide catalog, parsed once from the embedded sources.
    ///
    /// A catalog that fails to parse is replaced by an empty one so lookups
    /// keep echoing keys instead of failing.
    pub fn global(language: Language) -> &'static Translator {
        let cell = if language == Language::ENGLISH {
            &ENGLISH_CATALOG
        } else {
            &SPANISH_CATALOG
        };
        cell.get_or_init(|| {
            Self::embedded(language).unwrap_or_else(|e| {
                error!("Embedded {} catalog is invalid: {}", language, e);
                Self::new(language, TranslationDocument::empty())
            })
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn document(&self) -> &TranslationDocument {
        &self.document
    }

    /// Resolve display copy for `key_path`.
    ///
    /// Text, number and boolean values are stringified and interpolated.
    /// Missing keys, `null`, lists and maps return `key_path` unchanged.
    pub fn resolve_scalar(&self, key_path: &str, params: Option<&TranslationParams>) -> String {
        match self.document.get(key_path).and_then(TranslationValue::as_display_scalar) {
            Some(text) => match params {
                Some(params) => interpolate(&text, params),
                None => text,
            },
            None => {
                debug!("Unresolved translation key '{}' ({})", key_path, self.language);
                key_path.to_string()
            }
        }
    }

    /// Resolve a list of copy lines. Anything but a list yields an empty vector.
    pub fn resolve_sequence(&self, key_path: &str) -> Vec<String> {
        match self.document.get(key_path) {
            Some(TranslationValue::List(items)) => items.iter().map(ToString::to_string).collect(),
            _ => {
                debug!("Translation key '{}' is not a list ({})", key_path, self.language);
                Vec::new()
            }
        }
    }
}

fn embedded_source(language: Language) -> &'static str {
    if language == Language::ENGLISH {
        include_str!("../../locales/en.json")
    } else {
        include_str!("../../locales/es.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator(json: &str) -> Translator {
        Translator::new(
            Language::SPANISH,
            TranslationDocument::from_json_str(json).expect("test catalog should parse"),
        )
    }

    fn greeting() -> Translator {
        translator(r#"{ "a": { "b": "Hello {name}" } }"#)
    }

    // ==================== resolve_scalar Tests ====================

    #[test]
    fn test_resolve_scalar_interpolates() {
        let params = TranslationParams::new().with("name", "World");
        assert_eq!(greeting().resolve_scalar("a.b", Some(&params)), "Hello World");
    }

    #[test]
    fn test_resolve_scalar_keeps_token_without_param() {
        assert_eq!(greeting().resolve_scalar("a.b", None), "Hello {name}");

        let unrelated = TranslationParams::new().with("other", "x");
        assert_eq!(
            greeting().resolve_scalar("a.b", Some(&unrelated)),
            "Hello {name}"
        );
    }

    #[test]
    fn test_resolve_scalar_missing_key_echoes() {
        assert_eq!(greeting().resolve_scalar("a.c", None), "a.c");
        assert_eq!(greeting().resolve_scalar("", None), "");
    }

    #[test]
    fn test_resolve_scalar_container_echoes() {
        let t = translator(r#"{ "items": ["x", "y"], "group": { "k": "v" }, "n": null }"#);
        assert_eq!(t.resolve_scalar("items", None), "items");
        assert_eq!(t.resolve_scalar("group", None), "group");
        assert_eq!(t.resolve_scalar("n", None), "n");
    }

    #[test]
    fn test_resolve_scalar_numbers_and_booleans() {
        let t = translator(r#"{ "stats": { "years": 5, "ratio": 0.5, "remote": true } }"#);
        assert_eq!(t.resolve_scalar("stats.years", None), "5");
        assert_eq!(t.resolve_scalar("stats.ratio", None), "0.5");
        assert_eq!(t.resolve_scalar("stats.remote", None), "true");
    }

    #[test]
    fn test_resolve_scalar_list_element() {
        let t = translator(r#"{ "items": ["x", "y {n}"] }"#);
        let params = TranslationParams::new().with("n", 2);
        assert_eq!(t.resolve_scalar("items.1", Some(&params)), "y 2");
        assert_eq!(t.resolve_scalar("items.two", None), "items.two");
    }

    #[test]
    fn test_resolve_scalar_repeated_token() {
        let t = translator(r#"{ "echo": "{w} and {w}" }"#);
        let params = TranslationParams::new().with("w", "again");
        assert_eq!(t.resolve_scalar("echo", Some(&params)), "again and again");
    }

    // ==================== resolve_sequence Tests ====================

    #[test]
    fn test_resolve_sequence_stringifies_in_order() {
        let t = translator(r#"{ "lines": ["Av. Larco 123", 42, true, null] }"#);
        assert_eq!(
            t.resolve_sequence("lines"),
            vec!["Av. Larco 123", "42", "true", "null"]
        );
    }

    #[test]
    fn test_resolve_sequence_non_list_is_empty() {
        assert!(greeting().resolve_sequence("a.b").is_empty());
        assert!(greeting().resolve_sequence("a").is_empty());
        assert!(greeting().resolve_sequence("missing.key").is_empty());
    }

    // ==================== interpolate Tests ====================

    #[test]
    fn test_interpolate_substituted_value_is_not_rescanned() {
        let params = TranslationParams::new().with("a", "{b}").with("b", "B");
        assert_eq!(interpolate("{a}-{b}", &params), "{b}-B");
    }

    #[test]
    fn test_interpolate_ignores_unbalanced_braces() {
        let params = TranslationParams::new().with("x", 1);
        assert_eq!(interpolate("{ {x} }", &params), "{ 1 }");
        assert_eq!(interpolate("{x", &params), "{x");
    }

    #[test]
    fn test_params_from_iter() {
        let params: TranslationParams = [("platform", "LinkedIn")].into_iter().collect();
        assert_eq!(params.get("platform"), Some("LinkedIn"));
    }

    // ==================== Catalog Loading Tests ====================

    #[test]
    fn test_embedded_catalogs_parse() {
        assert!(Translator::embedded(Language::SPANISH).is_ok());
        assert!(Translator::embedded(Language::ENGLISH).is_ok());
    }

    #[test]
    fn test_global_is_singleton_per_language() {
        let es1 = Translator::global(Language::SPANISH);
        let es2 = Translator::global(Language::SPANISH);
        let en = Translator::global(Language::ENGLISH);

        assert!(std::ptr::eq(es1, es2));
        assert_eq!(es1.language(), Language::SPANISH);
        assert_eq!(en.language(), Language::ENGLISH);
    }

    #[test]
    fn test_from_dir_reads_language_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), r#"{ "hi": "Hi" }"#).unwrap();

        let t = Translator::from_dir(Language::ENGLISH, dir.path()).unwrap();
        assert_eq!(t.resolve_scalar("hi", None), "Hi");
        assert!(Translator::from_dir(Language::SPANISH, dir.path()).is_err());
    }
}
