//! SEO metadata: canonical and hreflang URLs, robots, locale and JSON-LD.
//!
//! Everything here is a pure function of the request path and language.
//! Unknown paths never fail; they collapse to the nearest language root.

mod copy;
mod metadata;
mod paths;
mod schema;

pub use copy::{page_copy, PageCopy};
pub use metadata::{get_seo_metadata, Alternate, CopyOverride, SeoMetadata, SeoPage, SeoRequest};
pub use paths::{
    is_valid_path, normalize_path, path_language, to_english_path, to_spanish_path,
    trim_trailing_slash, valid_paths, SECTION_SLUGS,
};
pub use schema::{PrioritizedService, PRIORITIZED_SERVICES};

pub const SITE_URL: &str = "https://elarisdigitalsolutions.com";

pub const SITE_NAME: &str = "Elaris Digital Solutions";

/// Social preview image.
pub const OG_IMAGE: &str = "https://elarisdigitalsolutions.com/assets/Elaris-Logo.webp";
