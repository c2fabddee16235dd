/*!
 * Tests for language utility functions
 */

use translated_models::Settings;
use translated_models::language_utils::{
    DEFAULT_LANGUAGES, base_code, full_language_codes, iso_language_name,
    is_language_in_active_configuration, is_language_in_languages,
    is_language_in_reference_catalog, normalize_language_code,
};

fn three_language_settings() -> Settings {
    Settings::with_languages([("en", "English"), ("pl", "Polish"), ("fr", "French")])
}

/// Test reference catalog lookups
#[test]
fn test_is_language_in_reference_catalog_withValidCode_shouldReturnTrue() {
    assert!(is_language_in_reference_catalog("en-us"));
    assert!(is_language_in_reference_catalog("pt-br"));
    assert!(is_language_in_reference_catalog("ast"));
}

#[test]
fn test_is_language_in_reference_catalog_withInvalidCode_shouldReturnFalse() {
    assert!(!is_language_in_reference_catalog("xy"));
    assert!(!is_language_in_reference_catalog(""));
    assert!(!is_language_in_reference_catalog("De"));
}

/// Test active configuration lookups
#[test]
fn test_is_language_in_active_configuration_withValidCode_shouldReturnTrue() {
    assert!(is_language_in_active_configuration("en-us", &three_language_settings()));
    assert!(is_language_in_active_configuration("fr", &three_language_settings()));
}

#[test]
fn test_is_language_in_active_configuration_withInvalidCode_shouldReturnFalse() {
    assert!(!is_language_in_active_configuration("de", &three_language_settings()));
}

#[test]
fn test_is_language_in_languages_withRegionalConfiguration_shouldMatchBaseCode() {
    let languages = vec![("en-gb".to_string(), "British English".to_string())];
    assert!(is_language_in_languages("en", &languages));
    assert!(is_language_in_languages("en-au", &languages));
    assert!(!is_language_in_languages("pl", &languages));
}

/// Test the shape of the built-in catalog
#[test]
fn test_full_language_codes_shouldContainBaseCodesOnly() {
    let codes = full_language_codes();
    assert!(codes.contains("en"));
    assert!(codes.contains("zh"));
    assert!(codes.iter().all(|code| !code.contains('-')));
    assert!(codes.len() < DEFAULT_LANGUAGES.len());
}

#[test]
fn test_base_code_withoutDash_shouldReturnCodeAsIs() {
    assert_eq!(base_code("udm"), "udm");
    assert_eq!(base_code("zh-hant"), "zh");
}

#[test]
fn test_normalize_language_code_shouldReplaceEveryDash() {
    assert_eq!(normalize_language_code("sr-latn-rs"), "sr_latn_rs");
}

/// Test retrieval of ISO language names
#[test]
fn test_iso_language_name_withValidCodes_shouldReturnCorrectName() {
    assert_eq!(iso_language_name("pl"), Some("Polish"));
    assert_eq!(iso_language_name("fr-ca"), Some("French"));
    assert_eq!(iso_language_name("ast"), None);
}
