/*!
 * Validation service that orchestrates all attribute stages.
 *
 * This module provides the single entry point running every stage on a
 * model and collecting their messages in a fixed order.
 */

use log::debug;

use crate::app_config::Settings;
use crate::checks::CheckMessage;
use crate::model::{ModelIntrospection, TranslationOptions};

use super::languages::check_languages;
use super::original_language::check_original_language;
use super::translated_fields::check_translated_fields;

/// Run a full model check.
///
/// Stages run in order: `translated_fields`, `languages`, then
/// `original_language` when `settings.check_original_language` is enabled.
/// Returns an empty list when the declaration is valid.
pub fn check<M>(model: &M, options: &TranslationOptions, settings: &Settings) -> Vec<CheckMessage>
where
    M: ModelIntrospection + ?Sized,
{
    let mut errors = check_translated_fields(model, options, settings);
    errors.extend(check_languages(model, options, settings));
    if settings.check_original_language {
        errors.extend(check_original_language(model, options, settings));
    }

    debug!("Model check for {} produced {} message(s)", model.label(), errors.len());
    errors
}
