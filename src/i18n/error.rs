use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a translation catalog.
///
/// Lookups never fail; only building a `TranslationDocument` can.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read translation file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid translation JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("translation document root must be an object, found {0}")]
    InvalidRoot(&'static str),
}
