/*!
 * Validation of translated model declarations.
 *
 * Each declared translation attribute goes through its own ordered stage:
 * - `translated_fields`: type, field existence, field translatability
 * - `languages`: type, reference catalog, active configuration
 * - `original_language`: presence, type, reference catalog, active configuration
 * - `service`: runs the stages in order and concatenates their messages
 *
 * A stage stops at the first level that fails so one root cause doesn't
 * produce a cascade of derived messages. A failing stage never prevents the
 * other stages from running.
 */

pub mod languages;
pub mod original_language;
pub mod service;
pub mod translated_fields;

// Re-export main entry points
pub use languages::check_languages;
pub use original_language::check_original_language;
pub use service::check;
pub use translated_fields::check_translated_fields;
