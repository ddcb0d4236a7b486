//! Check the translated catalogs against the Spanish reference catalog.
//!
//! Usage:
//!   cargo run --bin i18n-check
//!   LOCALES_DIR=locales cargo run --bin i18n-check
//!
//! Exits with a non-zero status when any catalog has errors.

use anyhow::{bail, Result};
use elaris_site::config::Config;
use elaris_site::i18n::{CatalogValidator, Language, LanguageRegistry};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("elaris_site=info".parse()?)
                .add_directive("i18n_check=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let reference_language = Language::site_default();
    let reference = config.load_translator(reference_language)?;

    let mut failed = 0;
    for lang_config in LanguageRegistry::get().list_enabled() {
        let language = Language::from_code(lang_config.code)?;
        if language == reference_language {
            continue;
        }

        let candidate = config.load_translator(language)?;
        let report = CatalogValidator::validate(reference.document(), candidate.document());

        for message in &report.errors {
            error!("[{}] {}", language, message);
        }
        for message in &report.warnings {
            warn!("[{}] {}", language, message);
        }

        if report.has_errors() {
            failed += 1;
        } else {
            info!(
                "[{}] catalog OK ({} warnings)",
                language,
                report.warnings.len()
            );
        }
    }

    if failed > 0 {
        bail!("{} catalog(s) failed validation", failed);
    }
    Ok(())
}
