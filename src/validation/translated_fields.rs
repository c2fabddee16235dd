/*!
 * Validation of the `translated_fields` attribute.
 */

use log::debug;

use crate::app_config::Settings;
use crate::checks::{CheckId, CheckMessage};
use crate::field_utils::{is_field_translatable, translatable_types_text};
use crate::model::{Declared, ModelIntrospection, TranslationOptions};

/// Check the declared `translated_fields`.
///
/// Runs, stopping after the first level that reports anything:
/// 1. the value must be a non-empty list of strings (E002)
/// 2. every name must be a field of the model (E003, one per missing name)
/// 3. every named field must be translatable (E004, one per field)
///
/// An unset value is derived by the resolver and not checked.
pub fn check_translated_fields<M>(
    model: &M,
    options: &TranslationOptions,
    settings: &Settings,
) -> Vec<CheckMessage>
where
    M: ModelIntrospection + ?Sized,
{
    let Declared::Value(value) = &options.translated_fields else {
        return Vec::new();
    };
    let obj = model.label();

    let Some(names) = value.as_string_collection() else {
        return vec![CheckMessage::error(
            CheckId::E002,
            "'translated_fields' must be unset or a non-empty collection (list, tuple, or set) \
             of strings.",
            obj,
        )];
    };

    let mut errors = Vec::new();
    let mut fields = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        match model.field_by_name(name) {
            Ok(field) => fields.push((index, field)),
            Err(err) => {
                debug!("{}", err);
                errors.push(CheckMessage::error(
                    CheckId::E003,
                    format!(
                        "translated_fields[{}] = '{}' doesn't represent a name of any model's field.",
                        index, name
                    ),
                    obj,
                ));
            }
        }
    }
    if !errors.is_empty() {
        return errors;
    }

    fields
        .into_iter()
        .filter(|(_, field)| !is_field_translatable(field, settings))
        .map(|(index, field)| {
            CheckMessage::error(
                CheckId::E004,
                format!(
                    "translated_fields[{}] = '{}' doesn't represent a name of translatable field. \
                     Currently, only fields of the following type(s) are supported: {}.",
                    index,
                    field.name,
                    translatable_types_text(settings)
                ),
                obj,
            )
        })
        .collect()
}
