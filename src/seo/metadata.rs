//! Per-request head metadata.

use super::copy::page_copy;
use super::paths::{
    normalize_path, path_language, to_english_path, to_spanish_path, trim_trailing_slash,
};
use super::schema::{breadcrumb_schema, organization_schema, service_list_schema, website_schema};
use super::{OG_IMAGE, SITE_URL};
use crate::i18n::Language;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

const ROBOTS_INDEX: &str = "index,follow,max-image-preview:large";
const ROBOTS_NOINDEX: &str = "noindex,nofollow";

/// Pages with entries in the SEO copy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeoPage {
    Home,
    NotFound,
}

impl SeoPage {
    pub fn robots(self) -> &'static str {
        match self {
            SeoPage::Home => ROBOTS_INDEX,
            SeoPage::NotFound => ROBOTS_NOINDEX,
        }
    }
}

/// `website` for the home page, `article` for everything else.
fn og_type(page: Option<SeoPage>) -> &'static str {
    match page {
        Some(SeoPage::Home) => "website",
        _ => "article",
    }
}

/// Explicit title and description for pages outside the copy table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOverride {
    pub title: String,
    pub description: String,
}

/// Input to `get_seo_metadata`.
#[derive(Debug, Clone)]
pub struct SeoRequest<'a> {
    pub pathname: &'a str,
    /// Copy-table page; `None` for landing pages, which must carry a copy override
    pub page: Option<SeoPage>,
    /// Active UI language; only used when the path has no language prefix
    pub language: Language,
    pub copy_override: Option<CopyOverride>,
}

impl<'a> SeoRequest<'a> {
    pub fn new(pathname: &'a str, page: SeoPage, language: Language) -> Self {
        Self {
            pathname,
            page: Some(page),
            language,
            copy_override: None,
        }
    }

    /// Request for a page outside the copy table. Pair it with `with_copy`;
    /// without an override it renders the home copy.
    pub fn landing(pathname: &'a str, language: Language) -> Self {
        Self {
            pathname,
            page: None,
            language,
            copy_override: None,
        }
    }

    /// Use literal copy instead of the copy table. `page` still decides
    /// `og_type`.
    pub fn with_copy(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.copy_override = Some(CopyOverride {
            title: title.into(),
            description: description.into(),
        });
        self
    }
}

/// One `<link rel="alternate">` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub href: String,
    #[serde(rename = "hrefLang")]
    pub href_lang: String,
}

/// Everything the head-injection layer emits for a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub lang: Language,
    pub robots: &'static str,
    pub og_image: &'static str,
    /// `website` for the home page, `article` otherwise
    pub og_type: &'static str,
    /// `en`, `es`, then `x-default` pointing at the English URL
    pub alternates: Vec<Alternate>,
    /// Open Graph locale, e.g. `es_ES`
    pub locale: &'static str,
    pub structured_data: Vec<Value>,
}

/// Build head metadata for a request.
///
/// Table-driven pages are normalized onto the allow-list first, so unknown
/// paths fall back to the root metadata of their language. Requests with a
/// copy override keep their path as given, minus a trailing slash, and carry
/// no structured data.
pub fn get_seo_metadata(request: &SeoRequest<'_>) -> SeoMetadata {
    if let Some(copy) = &request.copy_override {
        return override_metadata(request, copy);
    }

    let normalized = normalize_path(request.pathname);
    if normalized != request.pathname {
        debug!("Normalized SEO path '{}' to '{}'", request.pathname, normalized);
    }
    let language = path_language(&normalized).unwrap_or(request.language);
    let page = request.page.unwrap_or(SeoPage::Home);
    let copy = page_copy(page, language);

    let mut structured_data = vec![organization_schema(), website_schema(language)];
    if page == SeoPage::Home {
        structured_data.push(service_list_schema());
        structured_data.push(breadcrumb_schema(language));
    }

    SeoMetadata {
        title: copy.title.to_string(),
        description: copy.description.to_string(),
        canonical: absolute_url(&normalized),
        lang: language,
        robots: page.robots(),
        og_image: OG_IMAGE,
        og_type: og_type(Some(page)),
        alternates: alternates_for(&normalized),
        locale: language.og_locale(),
        structured_data,
    }
}

fn override_metadata(request: &SeoRequest<'_>, copy: &CopyOverride) -> SeoMetadata {
    let pathname = trim_trailing_slash(request.pathname);
    let language = path_language(pathname).unwrap_or(request.language);

    SeoMetadata {
        title: copy.title.clone(),
        description: copy.description.clone(),
        canonical: absolute_url(pathname),
        lang: language,
        robots: ROBOTS_INDEX,
        og_image: OG_IMAGE,
        og_type: og_type(request.page),
        alternates: alternates_for(pathname),
        locale: language.og_locale(),
        structured_data: Vec::new(),
    }
}

fn alternates_for(pathname: &str) -> Vec<Alternate> {
    let english_href = absolute_url(&to_english_path(pathname));
    let spanish_href = absolute_url(&to_spanish_path(pathname));

    vec![
        Alternate {
            href: english_href.clone(),
            href_lang: Language::ENGLISH.code().to_string(),
        },
        Alternate {
            href: spanish_href,
            href_lang: Language::SPANISH.code().to_string(),
        },
        Alternate {
            href: english_href,
            href_lang: "x-default".to_string(),
        },
    ]
}

fn absolute_url(pathname: &str) -> String {
    if pathname.is_empty() {
        format!("{}/", SITE_URL)
    } else {
        format!("{}{}", SITE_URL, pathname)
    }
}
