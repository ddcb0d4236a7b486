//! Internationalization (i18n) for the site copy.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the site languages and their locales
//! - `language`: Validated `Language` type
//! - `value` / `document`: Tagged translation values and key-path lookup
//! - `translator`: Total `resolve_scalar` / `resolve_sequence` with interpolation
//! - `validator`: Key and placeholder parity between catalogs
//!
//! # Example
//!
//! ```rust,ignore
//! use elaris_site::i18n::{Language, TranslationParams, Translator};
//!
//! let t = Translator::global(Language::SPANISH);
//! let params = TranslationParams::new().with("platform", "LinkedIn");
//! let label = t.resolve_scalar("socialFeed.openPost", Some(&params));
//! let lines = t.resolve_sequence("contact.info.addressLines");
//! ```

mod document;
mod error;
mod language;
mod registry;
mod translator;
mod validator;
mod value;

pub use document::TranslationDocument;
pub use error::I18nError;
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use translator::{interpolate, TranslationParams, Translator};
pub use validator::{CatalogValidator, ValidationReport};
pub use value::TranslationValue;
