use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::language_utils::DEFAULT_LANGUAGES;
use crate::model::FieldType;

/// Application settings module
/// This module holds the host configuration the validation layer reads:
/// the active language list and the translatable field types.
/// Every accessor reads the current value; nothing is cached.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Name of the host settings module, quoted in check messages
    #[serde(default = "default_settings_module")]
    pub settings_module: String,

    /// Active (code, name) language pairs
    #[serde(default = "default_languages")]
    pub languages: Vec<(String, String)>,

    /// Field types eligible to hold translated content
    #[serde(default = "default_translatable_field_types")]
    pub translatable_field_types: Vec<FieldType>,

    /// Whether models must declare and pass the `original_language` checks
    #[serde(default)]
    pub check_original_language: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_settings_module() -> String {
    "settings".to_string()
}

/// The built-in language list, untouched
pub fn default_languages() -> Vec<(String, String)> {
    DEFAULT_LANGUAGES
        .iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect()
}

/// Textual field kinds used when the host sets no translatable types
pub fn default_translatable_field_types() -> Vec<FieldType> {
    vec![FieldType::CharField, FieldType::TextField]
}

impl Settings {
    /// Settings with the given active languages and defaults elsewhere
    pub fn with_languages<I, C, N>(languages: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        Self {
            languages: languages
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Parse settings from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Load settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Loaded settings from {}: {} language(s), {} translatable type(s)",
            path.display(),
            settings.languages.len(),
            settings.translatable_field_types.len()
        );
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Active (code, name) language pairs
    pub fn active_languages(&self) -> &[(String, String)] {
        &self.languages
    }

    /// Codes of the active languages, in configured order
    pub fn active_language_codes(&self) -> Vec<&str> {
        self.languages.iter().map(|(code, _)| code.as_str()).collect()
    }

    /// Field types currently considered translatable
    pub fn translatable_field_types(&self) -> &[FieldType] {
        &self.translatable_field_types
    }

    /// Whether the active language list is still the built-in default
    pub fn is_default_languages(&self) -> bool {
        self.languages.len() == DEFAULT_LANGUAGES.len()
            && self
                .languages
                .iter()
                .zip(DEFAULT_LANGUAGES.iter())
                .all(|((code, name), (default_code, default_name))| {
                    code == default_code && name == default_name
                })
    }
}

/// Default implementation for Settings
impl Default for Settings {
    fn default() -> Self {
        Settings {
            settings_module: default_settings_module(),
            languages: default_languages(),
            translatable_field_types: default_translatable_field_types(),
            check_original_language: false,
            log_level: LogLevel::default(),
        }
    }
}
