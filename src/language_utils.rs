//! Language utilities for language code membership tests
//!
//! This module ships the built-in reference catalog of known languages and
//! answers whether a code, or its base code before the first `-`, belongs
//! to that catalog or to the active configuration.

use std::collections::HashSet;

use isolang::Language;
use log::trace;
use once_cell::sync::Lazy;

use crate::app_config::Settings;

/// Built-in (code, name) language list shipped with the framework.
///
/// Used as the reference catalog and as the default active configuration.
pub const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("ar-dz", "Algerian Arabic"),
    ("ast", "Asturian"),
    ("az", "Azerbaijani"),
    ("bg", "Bulgarian"),
    ("be", "Belarusian"),
    ("bn", "Bengali"),
    ("br", "Breton"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("ckb", "Central Kurdish (Sorani)"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("dsb", "Lower Sorbian"),
    ("el", "Greek"),
    ("en", "English"),
    ("en-au", "Australian English"),
    ("en-gb", "British English"),
    ("eo", "Esperanto"),
    ("es", "Spanish"),
    ("es-ar", "Argentinian Spanish"),
    ("es-co", "Colombian Spanish"),
    ("es-mx", "Mexican Spanish"),
    ("es-ni", "Nicaraguan Spanish"),
    ("es-ve", "Venezuelan Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fy", "Frisian"),
    ("ga", "Irish"),
    ("gd", "Scottish Gaelic"),
    ("gl", "Galician"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hsb", "Upper Sorbian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("ia", "Interlingua"),
    ("id", "Indonesian"),
    ("ig", "Igbo"),
    ("io", "Ido"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kab", "Kabyle"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("ky", "Kyrgyz"),
    ("lb", "Luxembourgish"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("my", "Burmese"),
    ("nb", "Norwegian Bokmål"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("nn", "Norwegian Nynorsk"),
    ("os", "Ossetic"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("pt-br", "Brazilian Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sr-latn", "Serbian Latin"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("tg", "Tajik"),
    ("th", "Thai"),
    ("tk", "Turkmen"),
    ("tr", "Turkish"),
    ("tt", "Tatar"),
    ("udm", "Udmurt"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh-hans", "Simplified Chinese"),
    ("zh-hant", "Traditional Chinese"),
];

/// Base codes of the reference catalog
static CATALOG_BASE_CODES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    DEFAULT_LANGUAGES
        .iter()
        .map(|(code, _)| base_code(code))
        .collect()
});

/// Part of a language code before the first `-`
pub fn base_code(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

/// Base codes known to the built-in reference catalog
pub fn full_language_codes() -> &'static HashSet<&'static str> {
    &CATALOG_BASE_CODES
}

/// Whether the base of `code` matches the base of any code in `languages`
///
/// Matching is base-to-base: `pt` and `pt-br` both match a configured `pt-br`.
pub fn is_language_in_languages(code: &str, languages: &[(String, String)]) -> bool {
    let base = base_code(code);
    languages
        .iter()
        .any(|(configured, _)| base_code(configured) == base)
}

/// Whether `code` is known to the built-in reference catalog
pub fn is_language_in_reference_catalog(code: &str) -> bool {
    let found = CATALOG_BASE_CODES.contains(base_code(code));
    trace!("Reference catalog lookup for '{}': {}", code, found);
    found
}

/// Whether `code` is one of the languages in the active configuration
pub fn is_language_in_active_configuration(code: &str, settings: &Settings) -> bool {
    let found = is_language_in_languages(code, settings.active_languages());
    trace!("Active configuration lookup for '{}': {}", code, found);
    found
}

/// Normalize a language code for use in identifiers (`pt-br` -> `pt_br`)
pub fn normalize_language_code(code: &str) -> String {
    code.replace('-', "_")
}

/// English ISO 639-1 name of the base language of `code`, if it has one
pub fn iso_language_name(code: &str) -> Option<&'static str> {
    let base = base_code(code).trim().to_lowercase();
    Language::from_639_1(&base).map(|language| language.to_name())
}
