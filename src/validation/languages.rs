/*!
 * Validation of the `languages` attribute.
 */

use crate::app_config::Settings;
use crate::checks::{CheckId, CheckMessage};
use crate::language_utils::{is_language_in_active_configuration, is_language_in_reference_catalog};
use crate::model::{Declared, ModelIntrospection, TranslationOptions};

/// Check the declared `languages`.
///
/// Runs, stopping after the first level that reports anything:
/// 1. the value must be a non-empty list of strings (E005)
/// 2. every code must be in the reference catalog (E006, one per code)
/// 3. every code must be in the active configuration (E007, one per code)
///
/// An unset value is derived by the resolver and not checked.
pub fn check_languages<M>(
    model: &M,
    options: &TranslationOptions,
    settings: &Settings,
) -> Vec<CheckMessage>
where
    M: ModelIntrospection + ?Sized,
{
    let Declared::Value(value) = &options.languages else {
        return Vec::new();
    };
    let obj = model.label();

    let Some(codes) = value.as_string_collection() else {
        return vec![CheckMessage::error(
            CheckId::E005,
            "'languages' must be unset or a non-empty collection (list, tuple, or set) of \
             strings.",
            obj,
        )];
    };

    let errors: Vec<CheckMessage> = codes
        .iter()
        .enumerate()
        .filter(|(_, code)| !is_language_in_reference_catalog(code))
        .map(|(index, code)| {
            CheckMessage::error(
                CheckId::E006,
                format!(
                    "languages[{}] = '{}' isn't a valid code for any of the languages known \
                     to the framework.",
                    index, code
                ),
                obj,
            )
        })
        .collect();
    if !errors.is_empty() {
        return errors;
    }

    codes
        .iter()
        .enumerate()
        .filter(|(_, code)| !is_language_in_active_configuration(code, settings))
        .map(|(index, code)| {
            CheckMessage::error(
                CheckId::E007,
                format!(
                    "languages[{}] = '{}' doesn't represent a code for any of the languages \
                     defined in the LANGUAGES setting in {} module.",
                    index, code, settings.settings_module
                ),
                obj,
            )
        })
        .collect()
}
