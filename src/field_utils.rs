/*!
 * Field translatability helpers.
 */

use crate::app_config::Settings;
use crate::model::FieldDescriptor;

/// Whether `field` can be declared as a translated field.
///
/// A field qualifies when its type is, or derives from, one of the types in
/// `settings.translatable_field_types`. The list is read on every call.
pub fn is_field_translatable(field: &FieldDescriptor, settings: &Settings) -> bool {
    settings
        .translatable_field_types()
        .iter()
        .any(|translatable| field.field_type.is_kind_of(translatable))
}

/// Join items as an English list: `a`, `a and b`, `a, b and c`
pub fn text_list(items: &[String], last_word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} {} {}", head.join(", "), last_word, last),
    }
}

/// Qualified names of the configured translatable types, joined for messages
pub fn translatable_types_text(settings: &Settings) -> String {
    let names: Vec<String> = settings
        .translatable_field_types()
        .iter()
        .map(|field_type| field_type.qualified_name())
        .collect();
    text_list(&names, "and")
}
