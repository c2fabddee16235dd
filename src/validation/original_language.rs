/*!
 * Validation of the `original_language` attribute.
 */

use crate::app_config::Settings;
use crate::checks::{CheckId, CheckMessage};
use crate::language_utils::{is_language_in_active_configuration, is_language_in_reference_catalog};
use crate::model::{ModelIntrospection, TranslationOptions};

/// Check the declared `original_language`.
///
/// The attribute is mandatory and reports at most one message:
/// missing (E008), not a string (E009), unknown to the reference catalog
/// (E010), or absent from the active configuration (E011).
pub fn check_original_language<M>(
    model: &M,
    options: &TranslationOptions,
    settings: &Settings,
) -> Vec<CheckMessage>
where
    M: ModelIntrospection + ?Sized,
{
    let obj = model.label();

    let Some(value) = &options.original_language else {
        return vec![CheckMessage::error(
            CheckId::E008,
            format!(
                "'original_language' mustn't be unset. Use one of the language codes defined \
                 in the LANGUAGES setting in {} module: {}.",
                settings.settings_module,
                settings.active_language_codes().join(", ")
            ),
            obj,
        )];
    };

    let Some(code) = value.as_text() else {
        return vec![CheckMessage::error(
            CheckId::E009,
            "'original_language' must be a string.",
            obj,
        )];
    };

    if !is_language_in_reference_catalog(code) {
        return vec![CheckMessage::error(
            CheckId::E010,
            format!(
                "original_language = '{}' isn't a valid code for any of the languages known to \
                 the framework.",
                code
            ),
            obj,
        )];
    }

    if !is_language_in_active_configuration(code, settings) {
        return vec![CheckMessage::error(
            CheckId::E011,
            format!(
                "original_language = '{}' doesn't represent a code for any of the languages \
                 defined in the LANGUAGES setting in {} module.",
                code, settings.settings_module
            ),
            obj,
        )];
    }

    Vec::new()
}
