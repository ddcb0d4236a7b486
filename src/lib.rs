//! Translation lookup, routing and SEO metadata for the Elaris Digital
//! Solutions marketing site.

pub mod config;
pub mod i18n;
pub mod routes;
pub mod seo;
pub mod whatsapp;
