use crate::i18n::{Language, Translator};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub const DEFAULT_WHATSAPP_NUMBER: &str = "51973663807";

#[derive(Debug, Clone)]
pub struct Config {
    /// Language used for paths without a language prefix
    pub default_language: Language,

    /// Directory with `<code>.json` catalogs; embedded catalogs when unset
    pub locales_dir: Option<PathBuf>,

    /// International number without `+`, used in `wa.me` links
    pub whatsapp_number: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(code.trim()).context("Invalid DEFAULT_LANGUAGE")?,
            Err(_) => Language::site_default(),
        };

        let whatsapp_number = std::env::var("WHATSAPP_NUMBER")
            .unwrap_or_else(|_| DEFAULT_WHATSAPP_NUMBER.to_string());
        if whatsapp_number.is_empty() || !whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            bail!("WHATSAPP_NUMBER must contain digits only, got '{}'", whatsapp_number);
        }

        Ok(Self {
            default_language,
            locales_dir: std::env::var("LOCALES_DIR").ok().map(PathBuf::from),
            whatsapp_number,
        })
    }

    /// Load the catalog for `language` from `locales_dir`, or the embedded one.
    pub fn load_translator(&self, language: Language) -> Result<Translator> {
        let translator = match &self.locales_dir {
            Some(dir) => Translator::from_dir(language, dir)
                .with_context(|| format!("Failed to load {} catalog from {}", language, dir.display()))?,
            None => Translator::embedded(language)
                .with_context(|| format!("Embedded {} catalog is invalid", language))?,
        };
        Ok(translator)
    }
}
