//! Title and description copy for the pages that carry their own SEO copy.

use super::SeoPage;
use crate::i18n::Language;

/// Head copy for one page in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCopy {
    /// `<title>`, also used for `og:title` and `twitter:title`
    pub title: &'static str,

    /// Meta description, also used for the social preview cards
    pub description: &'static str,
}

// ==================== Home ====================

pub const HOME_SPANISH: PageCopy = PageCopy {
    title: "Automatización con IA y Desarrollo Web | Elaris Digital Solutions",
    description: "Elaris Digital Solutions combina IA, landing pages optimizadas para SEO, \
software a medida y e-commerce para equipos en LATAM, EE. UU. y Europa.",
};

pub const HOME_ENGLISH: PageCopy = PageCopy {
    title: "AI Automation & Web Development | Elaris Digital Solutions",
    description: "Elaris Digital Solutions blends AI integration, SEO-optimized landing pages, \
custom software, and e-commerce development for ambitious teams across LATAM, the U.S., and Europe.",
};

// ==================== Not Found ====================

pub const NOT_FOUND_SPANISH: PageCopy = PageCopy {
    title: "Página no encontrada | Elaris Digital Solutions",
    description: "La página que buscas no existe. Descubre nuestros servicios de \
automatización con IA y desarrollo web.",
};

pub const NOT_FOUND_ENGLISH: PageCopy = PageCopy {
    title: "Page Not Found | Elaris Digital Solutions",
    description: "The page you are looking for is unavailable. Explore our AI automation \
and web development services instead.",
};

/// Copy table lookup. Every page has copy in every language.
pub fn page_copy(page: SeoPage, language: Language) -> &'static PageCopy {
    let english = language == Language::ENGLISH;
    match (page, english) {
        (SeoPage::Home, true) => &HOME_ENGLISH,
        (SeoPage::Home, false) => &HOME_SPANISH,
        (SeoPage::NotFound, true) => &NOT_FOUND_ENGLISH,
        (SeoPage::NotFound, false) => &NOT_FOUND_SPANISH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_carry_brand() {
        for copy in [&HOME_SPANISH, &HOME_ENGLISH, &NOT_FOUND_SPANISH, &NOT_FOUND_ENGLISH] {
            assert!(copy.title.ends_with("| Elaris Digital Solutions"));
            assert!(!copy.description.is_empty());
        }
    }

    #[test]
    fn test_page_copy_selects_language() {
        assert_eq!(page_copy(SeoPage::Home, Language::SPANISH), &HOME_SPANISH);
        assert_eq!(page_copy(SeoPage::Home, Language::ENGLISH), &HOME_ENGLISH);
        assert_eq!(
            page_copy(SeoPage::NotFound, Language::SPANISH),
            &NOT_FOUND_SPANISH
        );
    }

    #[test]
    fn test_line_continuations_keep_single_spaces() {
        assert!(HOME_ENGLISH.description.contains("pages, custom software"));
        assert!(!HOME_SPANISH.description.contains("  "));
    }
}
