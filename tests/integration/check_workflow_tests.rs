/*!
 * End-to-end checks over settings and model declaration files
 */

use translated_models::model_loader::load_models;
use translated_models::{CheckContext, CheckId, CheckRegistry, Settings};

use crate::common::{create_temp_dir, create_test_file, init_logging};

const SETTINGS: &str = r#"{
    "settings_module": "tests.settings",
    "languages": [["en", "English"], ["pl", "Polish"]],
    "check_original_language": true
}"#;

const MODELS: &str = r#"{
    "models": [
        {
            "label": "catalog.Media",
            "fields": [
                {"name": "title", "type": "TextField"},
                {"name": "genre", "type": "CharField"}
            ],
            "original_language": "en"
        },
        {
            "label": "catalog.Movie",
            "extends": "catalog.Media",
            "fields": [{"name": "premiere_date", "type": "DateTimeField"}],
            "translated_fields": ["title", "premiere_date"],
            "languages": ["en", "de"],
            "original_language": "pl"
        },
        {
            "label": "catalog.Book",
            "extends": "catalog.Media",
            "translated_fields": 0,
            "languages": ["en-us"],
            "original_language": "xy"
        }
    ]
}"#;

#[test]
fn test_check_workflow_withFiles_shouldReportEveryModel() {
    init_logging();
    let dir = create_temp_dir().unwrap();
    let settings_path = create_test_file(dir.path(), "settings.json", SETTINGS).unwrap();
    let models_path = create_test_file(dir.path(), "models.json", MODELS).unwrap();

    let settings = Settings::from_file(&settings_path).unwrap();
    let models = load_models(&models_path).unwrap();
    let context = CheckContext::new(&settings, &models);

    let messages = CheckRegistry::with_defaults().run_checks(&context, None);
    let found: Vec<(Option<&str>, CheckId)> = messages
        .iter()
        .map(|m| (m.obj.as_deref(), m.id))
        .collect();

    assert_eq!(
        found,
        vec![
            (Some("catalog.Movie"), CheckId::E004),
            (Some("catalog.Movie"), CheckId::E007),
            (Some("catalog.Book"), CheckId::E002),
            (Some("catalog.Book"), CheckId::E010),
        ]
    );
    assert!(messages[1].msg.contains("tests.settings module"));
}

#[test]
fn test_check_workflow_withResolvedDefaults_shouldDeriveFromFiles() {
    let dir = create_temp_dir().unwrap();
    let settings_path = create_test_file(dir.path(), "settings.json", SETTINGS).unwrap();
    let models_path = create_test_file(dir.path(), "models.json", MODELS).unwrap();

    let settings = Settings::from_file(&settings_path).unwrap();
    let models = load_models(&models_path).unwrap();

    let media = &models[0];
    assert_eq!(media.get_translated_fields(&settings), vec!["title", "genre"]);
    assert_eq!(media.get_languages(&settings), vec!["en", "pl"]);
    assert!(media.check(&settings).is_empty());
}

#[test]
fn test_load_models_withMissingFile_shouldReportPath() {
    let dir = create_temp_dir().unwrap();
    let err = load_models(dir.path().join("models.json")).unwrap_err();
    assert!(format!("{}", err).contains("models.json"));
}
