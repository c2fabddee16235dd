/*!
 * Tests for settings functionality
 */

use translated_models::app_config::{default_languages, default_translatable_field_types};
use translated_models::{ConfigError, FieldType, LogLevel, Settings};

use crate::common::{create_temp_dir, create_test_file};

/// Test default settings values
#[test]
fn test_default_settings_withNoParameters_shouldHaveCorrectDefaults() {
    let settings = Settings::default();

    assert_eq!(settings.languages, default_languages());
    assert_eq!(
        settings.translatable_field_types,
        default_translatable_field_types()
    );
    assert_eq!(settings.log_level, LogLevel::Info);
    assert!(!settings.check_original_language);
}

/// Test saving and loading settings through a file
#[test]
fn test_settings_saveAndLoad_shouldPreserveValues() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = Settings::with_languages([("en", "English"), ("de", "German")]);
    settings.translatable_field_types = vec![FieldType::TextField, FieldType::from("MarkdownField")];
    settings.check_original_language = true;
    settings.save(&path).unwrap();

    let loaded = Settings::from_file(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(
        loaded.translatable_field_types[1],
        FieldType::Other("MarkdownField".to_string())
    );
}

#[test]
fn test_from_file_withMissingFile_shouldReturnReadError() {
    let dir = create_temp_dir().unwrap();
    let err = Settings::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_from_file_withInvalidJson_shouldReturnParseError() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(dir.path(), "settings.json", "{ languages: ").unwrap();
    let err = Settings::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_save_withMissingDirectory_shouldReturnWriteError() {
    let dir = create_temp_dir().unwrap();
    let err = Settings::default()
        .save(dir.path().join("missing").join("settings.json"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Write { .. }));
}

#[test]
fn test_from_json_str_withTranslatableTypes_shouldParseClassNames() {
    let settings = Settings::from_json_str(
        r#"{"translatable_field_types": ["CharField", "URLField"], "settings_module": "tests.settings"}"#,
    )
    .unwrap();
    assert_eq!(
        settings.translatable_field_types(),
        &[FieldType::CharField, FieldType::UrlField]
    );
    assert_eq!(settings.settings_module, "tests.settings");
    assert!(settings.is_default_languages());
}
