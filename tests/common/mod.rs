/*!
 * Common test utilities for the translated-models test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;
use translated_models::{
    FieldDescriptor, FieldType, ModelDefinition, Settings, TranslatedModel, TranslationOptions,
};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Route library logs to the test output
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Settings with English and Polish configured
pub fn test_settings() -> Settings {
    Settings::with_languages([("en", "English"), ("pl", "Polish")])
}

/// The `Movie` model: two translatable fields and a date
pub fn movie_definition() -> ModelDefinition {
    ModelDefinition::new(
        "tests.Movie",
        vec![
            FieldDescriptor::new("title", FieldType::TextField),
            FieldDescriptor::new("genre", FieldType::CharField),
            FieldDescriptor::new("premiere_date", FieldType::DateTimeField),
        ],
    )
}

/// `Movie` with every translation attribute unset
pub fn movie() -> TranslatedModel {
    TranslatedModel::new(movie_definition(), TranslationOptions::default())
}

/// `Movie` with the given translation attributes
pub fn movie_with(options: TranslationOptions) -> TranslatedModel {
    TranslatedModel::new(movie_definition(), options)
}
