//! Site route table.
//!
//! Maps a request path onto the page that renders it and the head metadata
//! that page publishes.

use crate::i18n::{Language, Translator};
use crate::seo::{
    get_seo_metadata, path_language, trim_trailing_slash, SeoMetadata, SeoPage, SeoRequest,
    SECTION_SLUGS,
};
use tracing::warn;

/// Booking page the `/meet` short link forwards to.
pub const MEETING_URL: &str = "https://calendly.com/contact-elarisdigitalsolutions/30min?month=2025-12";

pub const MEET_PATH: &str = "/meet";

pub const CUSTOM_SOFTWARE_PATH: &str = "/desarrollo-software-medida";

/// Sections reachable on the home page. `proceso` has an anchor and a route
/// but no indexable URL of its own.
pub const ROUTED_SECTIONS: [&str; 7] = [
    "servicios",
    "estandares",
    "portafolio",
    "productos",
    "clientes",
    "contacto",
    "proceso",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The single-page home, optionally scrolled to a section
    Home { section: Option<&'static str> },
    /// Custom software landing page
    CustomSoftware,
    /// Short link to the meeting booking page
    MeetRedirect,
    NotFound,
}

/// Resolve a request path. Unknown paths are `NotFound`.
///
/// A single trailing slash is ignored, as in `normalize_path`.
pub fn resolve_route(pathname: &str) -> Route {
    let pathname = trim_trailing_slash(pathname);
    match pathname {
        MEET_PATH => return Route::MeetRedirect,
        CUSTOM_SOFTWARE_PATH => return Route::CustomSoftware,
        _ => {}
    }

    let rest = match path_language(pathname) {
        Some(language) => &pathname[language.path_prefix().len()..],
        None => pathname,
    };

    match rest {
        "" | "/" => Route::Home { section: None },
        _ => match rest
            .strip_prefix('/')
            .and_then(|slug| ROUTED_SECTIONS.iter().find(|section| **section == slug))
        {
            Some(section) => Route::Home {
                section: Some(*section),
            },
            None => Route::NotFound,
        },
    }
}

impl Route {
    /// External URL for redirect routes.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Route::MeetRedirect => Some(MEETING_URL),
            _ => None,
        }
    }

    /// Head metadata for this route. Redirects publish none.
    ///
    /// Landing pages take their title and description from the catalog.
    pub fn metadata(
        &self,
        pathname: &str,
        language: Language,
        translator: &Translator,
    ) -> Option<SeoMetadata> {
        let request = match self {
            Route::Home { section } => {
                if let Some(section) = section {
                    if !SECTION_SLUGS.contains(section) {
                        warn!("Section '{}' has no indexable URL, using home metadata", section);
                    }
                }
                SeoRequest::new(pathname, SeoPage::Home, language)
            }
            Route::NotFound => SeoRequest::new(pathname, SeoPage::NotFound, language),
            Route::CustomSoftware => SeoRequest::landing(pathname, language).with_copy(
                translator.resolve_scalar("customSoftware.seo.title", None),
                translator.resolve_scalar("customSoftware.seo.description", None),
            ),
            Route::MeetRedirect => return None,
        };
        Some(get_seo_metadata(&request))
    }
}

/// Language root the navbar links back to: `/es`, `/en`, or `/`.
pub fn language_base_path(pathname: &str) -> String {
    match path_language(pathname) {
        Some(language) => language.path_prefix(),
        None => "/".to_string(),
    }
}

/// In-page anchor for a section, kept under the current language root.
pub fn section_href(pathname: &str, section_id: &str) -> String {
    format!("{}#{}", language_base_path(pathname), section_id)
}
