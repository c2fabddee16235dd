/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;

use translated_models::{ConfigError, ModelError};

#[test]
fn test_modelError_unknownParent_shouldDisplayCorrectly() {
    let error = ModelError::UnknownParent {
        model: "catalog.Movie".to_string(),
        parent: "catalog.Media".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("catalog.Movie"));
    assert!(display.contains("extends unknown model 'catalog.Media'"));
}

#[test]
fn test_modelError_duplicateModel_shouldDisplayCorrectly() {
    let error = ModelError::DuplicateModel {
        label: "catalog.Movie".to_string(),
    };
    assert_eq!(
        format!("{}", error),
        "model 'catalog.Movie' is declared more than once"
    );
}

#[test]
fn test_configError_parse_shouldIncludePath() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = ConfigError::Parse {
        path: PathBuf::from("conf/settings.json"),
        source,
    };
    assert!(format!("{}", error).starts_with("failed to parse 'conf/settings.json'"));
}

#[test]
fn test_configError_intoAnyhow_shouldKeepDowncast() {
    let error: anyhow::Error = ConfigError::Write {
        path: PathBuf::from("settings.json"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    }
    .into();
    assert!(error.downcast_ref::<ConfigError>().is_some());
}

#[test]
fn test_configError_serialize_shouldNameSettingsAndPath() {
    let source = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
    let error = ConfigError::Serialize {
        path: PathBuf::from("settings.json"),
        source,
    };
    assert!(format!("{}", error).starts_with("failed to serialize settings for 'settings.json'"));
}
