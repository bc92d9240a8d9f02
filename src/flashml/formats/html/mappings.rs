//! Rename tables from FlashML to HTML

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Output tag for FlashML tags with no entry in the table
pub const FALLBACK_TAG: &str = "div";

/// The FlashML tag rendered as a self-closing `<img />`
pub const MEDIA_TAG: &str = "imagen";

/// Attribute carrying the original FlashML tag name
pub const CLASS_ATTRIBUTE: &str = "class";

static TAG_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("velocista", "div"),
        ("titulo", "h1"),
        ("episodio", "section"),
        ("temporada", "article"),
        ("escena", "section"),
        ("personaje", "figure"),
        ("poder", "span"),
        ("dialogo", "p"),
        ("rapido", "em"),
        ("accion", "aside"),
        ("imagen", "img"),
        ("villanos", "ul"),
        ("villano", "li"),
        ("superspeed", "span"),
        ("phasing", "span"),
        ("cryokinesis", "span"),
        ("vibration", "span"),
        ("timetravel", "span"),
        ("speedforce", "span"),
        ("metahuman", "span"),
        ("lugar", "div"),
        ("equipo", "div"),
    ])
});

static ATTRIBUTE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("nombre", "data-nombre"),
        ("actor", "data-actor"),
        ("velocidad", "data-velocidad"),
        ("numero", "data-temporada"),
        ("src", "src"),
        ("alt", "alt"),
    ])
});

pub fn html_tag(tag_name: &str) -> &str {
    TAG_MAP.get(tag_name).copied().unwrap_or(FALLBACK_TAG)
}

/// Attribute names with no entry pass through unchanged
pub fn html_attribute(name: &str) -> &str {
    ATTRIBUTE_MAP.get(name).copied().unwrap_or(name)
}
