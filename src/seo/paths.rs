//! Allow-listed site paths and language prefix swaps.

use crate::i18n::Language;

/// Home page sections that have their own indexable URL.
pub const SECTION_SLUGS: [&str; 6] = [
    "servicios",
    "estandares",
    "portafolio",
    "productos",
    "clientes",
    "contacto",
];

const LANGUAGE_PREFIXES: [&str; 2] = ["/en", "/es"];

/// Whether `pathname` is one of the indexable paths: `/`, `/<slug>`,
/// `/en`, `/en/<slug>`, `/es`, `/es/<slug>`.
pub fn is_valid_path(pathname: &str) -> bool {
    if pathname == "/" || LANGUAGE_PREFIXES.contains(&pathname) {
        return true;
    }
    let rest = LANGUAGE_PREFIXES
        .iter()
        .find_map(|prefix| pathname.strip_prefix(prefix))
        .filter(|rest| rest.starts_with('/'))
        .unwrap_or(pathname);

    rest.strip_prefix('/')
        .map(|slug| SECTION_SLUGS.contains(&slug))
        .unwrap_or(false)
}

/// Drop a single trailing slash. `/` itself is kept.
pub fn trim_trailing_slash(pathname: &str) -> &str {
    match pathname.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => pathname,
    }
}

/// Map any incoming path onto the allow-list.
///
/// A single trailing slash is ignored. Unknown paths collapse to the root of
/// the language named by their first segment, or `/`.
pub fn normalize_path(pathname: &str) -> String {
    let trimmed = trim_trailing_slash(pathname);
    if is_valid_path(trimmed) {
        return trimmed.to_string();
    }
    match path_language(trimmed) {
        Some(language) => language.path_prefix(),
        None => "/".to_string(),
    }
}

/// Language named by the path's first segment, if it is a language prefix.
pub fn path_language(pathname: &str) -> Option<Language> {
    if strip_language_prefix(pathname, Language::ENGLISH).is_some() {
        Some(Language::ENGLISH)
    } else if strip_language_prefix(pathname, Language::SPANISH).is_some() {
        Some(Language::SPANISH)
    } else {
        None
    }
}

/// English counterpart of a path: `/es/...` becomes `/en/...`.
///
/// English and unprefixed paths are returned unchanged; an empty path is `/`.
pub fn to_english_path(pathname: &str) -> String {
    if pathname.is_empty() {
        return "/".to_string();
    }
    swap_prefix(pathname, Language::SPANISH, Language::ENGLISH)
}

/// Spanish counterpart of a path: `/en/...` becomes `/es/...`.
///
/// Spanish and unprefixed paths are returned unchanged.
pub fn to_spanish_path(pathname: &str) -> String {
    swap_prefix(pathname, Language::ENGLISH, Language::SPANISH)
}

fn swap_prefix(pathname: &str, from: Language, to: Language) -> String {
    match strip_language_prefix(pathname, from) {
        Some(rest) => format!("{}{}", to.path_prefix(), rest),
        None => pathname.to_string(),
    }
}

/// Remainder after a `/<code>` segment: `""` for `/es`, `"/x"` for `/es/x`.
fn strip_language_prefix(pathname: &str, language: Language) -> Option<&str> {
    let rest = pathname.strip_prefix('/')?.strip_prefix(language.code())?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

/// Every allow-listed path, unprefixed first, then `/en`, then `/es`.
pub fn valid_paths() -> Vec<String> {
    let mut paths = Vec::with_capacity(3 * (SECTION_SLUGS.len() + 1));
    for prefix in ["", "/en", "/es"] {
        paths.push(if prefix.is_empty() {
            "/".to_string()
        } else {
            prefix.to_string()
        });
        paths.extend(SECTION_SLUGS.iter().map(|slug| format!("{}/{}", prefix, slug)));
    }
    paths
}
