/*!
 * Tests for the check registry and the startup settings check
 */

use translated_models::checks::{check_models, check_settings};
use translated_models::{
    CheckContext, CheckId, CheckMessage, CheckRegistry, Declared, Settings, Tag,
    TranslationOptions,
};

use crate::common::{movie, movie_with, test_settings};

#[test]
fn test_check_settings_fails_with_E001() {
    let settings = Settings::default();
    let messages = check_settings(&CheckContext::new(&settings, &[]));
    assert!(messages.iter().any(|m| m.id == CheckId::E001));
}

#[test]
fn test_check_settings_withCustomLanguages_shouldPass() {
    let settings = test_settings();
    assert!(check_settings(&CheckContext::new(&settings, &[])).is_empty());
}

#[test]
fn test_check_models_shouldConcatenateInModelOrder() {
    let settings = test_settings();
    let models = vec![
        movie_with(TranslationOptions {
            languages: Declared::set(vec!["xy"]),
            ..TranslationOptions::default()
        }),
        movie(),
        movie_with(TranslationOptions {
            translated_fields: Declared::set(vec!["actors"]),
            ..TranslationOptions::default()
        }),
    ];

    let ids: Vec<CheckId> = check_models(&CheckContext::new(&settings, &models))
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec![CheckId::E006, CheckId::E003]);
}

#[test]
fn test_registry_withDefaults_shouldRunSettingsAndModelChecks() {
    let settings = Settings::default();
    let models = vec![movie_with(TranslationOptions {
        translated_fields: Declared::set(0),
        ..TranslationOptions::default()
    })];
    let context = CheckContext::new(&settings, &models);
    let registry = CheckRegistry::with_defaults();

    let all: Vec<CheckId> = registry.run_checks(&context, None).iter().map(|m| m.id).collect();
    assert_eq!(all, vec![CheckId::E001, CheckId::E002]);

    let translation_only = registry.run_checks(&context, Some(&[Tag::Translation]));
    assert_eq!(translation_only.len(), 1);
    assert_eq!(translation_only[0].id, CheckId::E001);
}

#[test]
fn test_registry_withCustomCheck_shouldRunAfterDefaults() {
    let mut registry = CheckRegistry::with_defaults();
    registry.register(Tag::Models, |context: &CheckContext<'_>| {
        context
            .models
            .iter()
            .filter(|model| model.definition.fields.is_empty())
            .map(|model| CheckMessage::error(CheckId::E003, "model has no fields", model.label()))
            .collect()
    });
    assert_eq!(registry.len(), 3);

    let settings = test_settings();
    let models = vec![movie()];
    assert!(registry.run_checks(&CheckContext::new(&settings, &models), None).is_empty());
}

#[test]
fn test_registry_runTwice_shouldBeIdempotent() {
    let settings = Settings::default();
    let context = CheckContext::new(&settings, &[]);
    let registry = CheckRegistry::with_defaults();
    assert_eq!(registry.run_checks(&context, None), registry.run_checks(&context, None));
}
