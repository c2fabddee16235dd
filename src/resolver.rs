/*!
 * Metadata resolution for translated models.
 *
 * Turns unset translation attributes into concrete values derived from the
 * model's fields and the active settings. Declared values are returned as
 * given: checking them is the job of the validation module.
 */

use log::debug;

use crate::app_config::Settings;
use crate::field_utils::is_field_translatable;
use crate::language_utils::normalize_language_code;
use crate::model::{Declared, ModelIntrospection, TranslationOptions};

/// Names of the model's translated fields.
///
/// When unset, every translatable field of the model is used, in declaration
/// order. Otherwise the declared names are returned verbatim.
pub fn get_translated_fields<M>(
    model: &M,
    options: &TranslationOptions,
    settings: &Settings,
) -> Vec<String>
where
    M: ModelIntrospection + ?Sized,
{
    match &options.translated_fields {
        Declared::Unset => {
            let derived: Vec<String> = model
                .fields()
                .iter()
                .filter(|field| is_field_translatable(field, settings))
                .map(|field| field.name.clone())
                .collect();
            debug!(
                "Derived {} translated field(s) for {}",
                derived.len(),
                model.label()
            );
            derived
        }
        Declared::Value(value) => value.text_elements(),
    }
}

/// Translation language codes, with `-` replaced by `_`.
///
/// When unset, the codes of the active configuration are used.
pub fn get_languages(options: &TranslationOptions, settings: &Settings) -> Vec<String> {
    match &options.languages {
        Declared::Unset => settings
            .active_language_codes()
            .into_iter()
            .map(normalize_language_code)
            .collect(),
        Declared::Value(value) => value
            .text_elements()
            .iter()
            .map(|code| normalize_language_code(code))
            .collect(),
    }
}
