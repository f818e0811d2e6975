//! Localization collaborator and the client widget's language bundles.
//!
//! Column headings and the author tooltip pass through a [`Localizer`]
//! supplied by the embedding environment. The client widget ships its own
//! translation bundles for a fixed set of locales; [`widget_language_url`]
//! maps the active locale to the bundle the widget should load. English is
//! the widget's built-in default and has no bundle.

use std::collections::BTreeMap;

/// Translation provider supplied by the embedding environment.
///
/// The default implementation passes text through untranslated with an
/// `en_US` locale.
pub trait Localizer {
    /// The active locale, e.g. `fr_FR`.
    fn locale(&self) -> &str {
        "en_US"
    }

    /// Translates a source string. Unknown strings should be returned
    /// unchanged.
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Passthrough localizer: English, no translation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultLocale;

impl Localizer for DefaultLocale {}

/// Locales the client widget ships translation bundles for, with the bundle
/// file each maps to.
const LOCALE_FILES: &[(&str, &str)] = &[
    ("de_CH", "German.json"),
    ("de_DE", "German.json"),
    ("el", "Greek.json"),
    ("el_EL", "Greek.json"),
    ("es_ES", "Spanish.json"),
    ("fr_BE", "French.json"),
    ("fr_CA", "French.json"),
    ("fr_FR", "French.json"),
];

/// Returns the full locale-to-bundle-URL map for the client widget.
///
/// `base_url` is the directory the widget's translation bundles are served
/// from, with or without a trailing slash.
pub fn supported_locales(base_url: &str) -> BTreeMap<&'static str, String> {
    LOCALE_FILES
        .iter()
        .map(|(locale, file)| (*locale, join_url(base_url, file)))
        .collect()
}

/// Resolves the translation bundle URL for a locale, or `None` when the
/// widget should fall back to its built-in language.
pub fn widget_language_url(locale: &str, base_url: &str) -> Option<String> {
    LOCALE_FILES
        .iter()
        .find(|(supported, _)| *supported == locale)
        .map(|(_, file)| join_url(base_url, file))
}

fn join_url(base: &str, file: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{file}")
    } else {
        format!("{base}/{file}")
    }
}
