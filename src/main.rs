//! Print the route and head metadata a path resolves to.
//!
//! Usage:
//!   cargo run -- /es/contacto
//!   cargo run -- /servicios --lang en
//!
//! Optional environment variables:
//! - DEFAULT_LANGUAGE (defaults to es)
//! - LOCALES_DIR (defaults to the embedded catalogs)
//! - WHATSAPP_NUMBER (defaults to 51973663807)

use anyhow::{bail, Context, Result};
use elaris_site::config::Config;
use elaris_site::i18n::Language;
use elaris_site::routes::resolve_route;
use elaris_site::whatsapp;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("elaris_site=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let mut pathname = None;
    let mut language = config.default_language;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--lang" {
            let code = args.next().context("--lang needs a language code")?;
            language = Language::from_code(&code)?;
        } else if pathname.is_none() {
            pathname = Some(arg);
        } else {
            bail!("Unexpected argument: {}", arg);
        }
    }
    let pathname = pathname.unwrap_or_else(|| "/".to_string());

    let translator = config.load_translator(language)?;
    let route = resolve_route(&pathname);
    info!("{} resolved to {:?}", pathname, route);

    if let Some(target) = route.redirect_target() {
        println!("redirect: {}", target);
        return Ok(());
    }

    if let Some(metadata) = route.metadata(&pathname, language, &translator) {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    }
    println!(
        "whatsapp: {}",
        whatsapp::floating_button_link(&translator, &config.whatsapp_number)
    );

    Ok(())
}
