/*!
 * # translated-models
 *
 * Validation and metadata derivation for translatable ORM models.
 *
 * A model declares which of its fields hold translatable text
 * (`translated_fields`), which languages translations exist in
 * (`languages`) and, optionally, the language of its original content
 * (`original_language`). This crate derives sensible defaults for the
 * attributes a developer leaves unset and checks the declared ones early,
 * reporting every problem as a structured `CheckMessage`.
 *
 * ## Architecture
 *
 * - `app_config`: `Settings`, the host configuration read by every check
 * - `language_utils`: built-in language catalog and membership tests
 * - `field_utils`: field translatability test
 * - `model`: field types, model introspection and declared attributes
 * - `model_loader`: model declarations loaded from JSON files
 * - `resolver`: derivation of unset attributes
 * - `validation`: ordered, short-circuiting checks per attribute
 * - `checks`: check messages, the check registry and the startup check
 * - `errors`: custom error types
 *
 * ## Example
 *
 * ```
 * use translated_models::{
 *     CheckId, Declared, FieldDescriptor, FieldType, ModelDefinition, Settings,
 *     TranslatedModel, TranslationOptions,
 * };
 *
 * let settings = Settings::with_languages([("en", "English"), ("pl", "Polish")]);
 * let movie = TranslatedModel::new(
 *     ModelDefinition::new(
 *         "catalog.Movie",
 *         vec![
 *             FieldDescriptor::new("title", FieldType::TextField),
 *             FieldDescriptor::new("premiere_date", FieldType::DateTimeField),
 *         ],
 *     ),
 *     TranslationOptions::default(),
 * );
 * assert_eq!(movie.get_translated_fields(&settings), vec!["title"]);
 * assert_eq!(movie.get_languages(&settings), vec!["en", "pl"]);
 *
 * let invalid = TranslatedModel::new(
 *     movie.definition.clone(),
 *     TranslationOptions {
 *         translated_fields: Declared::set(vec!["premiere_date"]),
 *         ..TranslationOptions::default()
 *     },
 * );
 * let messages = invalid.check(&settings);
 * assert_eq!(messages[0].id, CheckId::E004);
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod checks;
pub mod errors;
pub mod field_utils;
pub mod language_utils;
pub mod model;
pub mod model_loader;
pub mod resolver;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::{LogLevel, Settings};
pub use checks::{CheckContext, CheckId, CheckMessage, CheckRegistry, Level, Tag};
pub use errors::{ConfigError, ModelError};
pub use field_utils::is_field_translatable;
pub use language_utils::{
    is_language_in_active_configuration, is_language_in_reference_catalog,
    normalize_language_code,
};
pub use model::{
    AttributeValue, Declared, FieldDescriptor, FieldType, ModelDefinition, ModelIntrospection,
    TranslatedModel, TranslationOptions,
};
pub use resolver::{get_languages, get_translated_fields};
pub use validation::check;
