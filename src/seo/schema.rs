//! schema.org JSON-LD payloads.

use super::paths::SECTION_SLUGS;
use super::{OG_IMAGE, SITE_NAME, SITE_URL};
use crate::i18n::Language;
use serde_json::{json, Value};

const SCHEMA_CONTEXT: &str = "https://schema.org";

const SAME_AS: [&str; 4] = [
    "https://www.linkedin.com/company/elaris-digital-solutions/",
    "https://www.instagram.com/elarisdigitalsolutions",
    "https://github.com/Elaris-Digital-Solutions",
    "https://x.com/ElarisSolutions",
];

/// A service advertised in the home page ItemList.
#[derive(Debug, Clone, Copy)]
pub struct PrioritizedService {
    pub name: &'static str,
    pub description: &'static str,
    /// Section slug the service links to
    pub slug: &'static str,
}

pub const PRIORITIZED_SERVICES: [PrioritizedService; 5] = [
    PrioritizedService {
        name: "AI Integration for Business",
        description: "Automation pilots, copilots, and AI governance tailored to regulated industries.",
        slug: "servicios",
    },
    PrioritizedService {
        name: "Web Development Services",
        description: "SEO-optimized landing pages, content hubs, and high-performing e-commerce experiences.",
        slug: "servicios",
    },
    PrioritizedService {
        name: "Custom Software Development",
        description: "Workflow automation, API orchestration, and data platforms that scale with operations.",
        slug: "servicios",
    },
    PrioritizedService {
        name: "Business Data Analysis",
        description: "Dashboards, predictive insights, and KPI monitoring for product and revenue teams.",
        slug: "portafolio",
    },
    PrioritizedService {
        name: "Automation & AI Chatbots",
        description: "Conversational experiences, multilingual support desks, and back-office workflow automation.",
        slug: "clientes",
    },
];

const BREADCRUMBS_SPANISH: [&str; 7] = [
    "Inicio",
    "Servicios",
    "Estándares",
    "Portafolio",
    "Productos",
    "Clientes",
    "Contacto",
];

const BREADCRUMBS_ENGLISH: [&str; 7] = [
    "Home",
    "Services",
    "Our Standards",
    "Portfolio",
    "Products",
    "Clients",
    "Contact",
];

pub fn organization_schema() -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": SITE_NAME,
        "url": SITE_URL,
        "logo": OG_IMAGE,
        "sameAs": SAME_AS,
        "contactPoint": [
            {
                "@type": "ContactPoint",
                "email": "contact@elarisdigitalsolutions.com",
                "telephone": "+51-944-228-807",
                "contactType": "sales",
                "areaServed": "Worldwide",
                "availableLanguage": ["English", "Spanish"],
            }
        ],
    })
}

pub fn website_schema(language: Language) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": SITE_NAME,
        "url": SITE_URL,
        "inLanguage": language.locale_tag(),
        "potentialAction": {
            "@type": "ContactAction",
            "target": format!("{}/contacto", SITE_URL),
        },
    })
}

pub fn service_list_schema() -> Value {
    let items: Vec<Value> = PRIORITIZED_SERVICES
        .iter()
        .enumerate()
        .map(|(index, service)| {
            json!({
                "@type": "Service",
                "position": index + 1,
                "name": service.name,
                "description": service.description,
                "provider": {
                    "@type": "Organization",
                    "name": SITE_NAME,
                },
                "areaServed": "Worldwide",
                "url": format!("{}/{}", SITE_URL, service.slug),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ItemList",
        "name": format!("{} Services", SITE_NAME),
        "itemListElement": items,
    })
}

/// Language root followed by every section, all under the language prefix.
pub fn breadcrumb_schema(language: Language) -> Value {
    let names = if language == Language::ENGLISH {
        BREADCRUMBS_ENGLISH
    } else {
        BREADCRUMBS_SPANISH
    };
    let prefix = language.path_prefix();
    let paths = std::iter::once(prefix.clone())
        .chain(SECTION_SLUGS.iter().map(|slug| format!("{}/{}", prefix, slug)));

    let items: Vec<Value> = names
        .iter()
        .zip(paths)
        .enumerate()
        .map(|(index, (name, path))| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": format!("{}{}", SITE_URL, path),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_schema() {
        let schema = organization_schema();
        assert_eq!(schema["@type"], "Organization");
        assert_eq!(schema["url"], SITE_URL);
        assert_eq!(schema["logo"], OG_IMAGE);
        assert_eq!(schema["sameAs"].as_array().unwrap().len(), 4);
        assert_eq!(schema["contactPoint"][0]["contactType"], "sales");
    }

    #[test]
    fn test_website_schema_locale() {
        assert_eq!(website_schema(Language::SPANISH)["inLanguage"], "es-ES");
        assert_eq!(website_schema(Language::ENGLISH)["inLanguage"], "en-US");
        assert_eq!(
            website_schema(Language::SPANISH)["potentialAction"]["target"],
            "https://elarisdigitalsolutions.com/contacto"
        );
    }

    #[test]
    fn test_service_list_positions_start_at_one() {
        let schema = service_list_schema();
        let items = schema["itemListElement"].as_array().unwrap();

        assert_eq!(items.len(), 5);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[4]["position"], 5);
        assert_eq!(items[0]["name"], "AI Integration for Business");
        assert_eq!(
            items[3]["url"],
            "https://elarisdigitalsolutions.com/portafolio"
        );
    }

    #[test]
    fn test_breadcrumbs_spanish() {
        let schema = breadcrumb_schema(Language::SPANISH);
        let items = schema["itemListElement"].as_array().unwrap();

        assert_eq!(items.len(), 7);
        assert_eq!(items[0]["name"], "Inicio");
        assert_eq!(items[0]["item"], "https://elarisdigitalsolutions.com/es");
        assert_eq!(
            items[6]["item"],
            "https://elarisdigitalsolutions.com/es/contacto"
        );
    }

    #[test]
    fn test_breadcrumbs_english() {
        let schema = breadcrumb_schema(Language::ENGLISH);
        let items = schema["itemListElement"].as_array().unwrap();

        assert_eq!(items[2]["name"], "Our Standards");
        assert_eq!(
            items[2]["item"],
            "https://elarisdigitalsolutions.com/en/estandares"
        );
    }
}
