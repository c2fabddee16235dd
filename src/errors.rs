/*!
 * Error types for the translated-models crate.
 *
 * Validation problems are never raised as errors: they are reported as
 * `CheckMessage` records. The types here cover the few genuine failures,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while inspecting or loading model definitions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The model has no field with the requested name
    #[error("{model} has no field named '{name}'")]
    FieldDoesNotExist {
        /// Label of the model that was searched
        model: String,
        /// Requested field name
        name: String,
    },

    /// A model extends a parent that was not declared before it
    #[error("{model} extends unknown model '{parent}'")]
    UnknownParent {
        model: String,
        parent: String,
    },

    /// Two models share the same label
    #[error("model '{label}' is declared more than once")]
    DuplicateModel { label: String },
}

/// Errors raised while reading or writing configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid document
    #[error("failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The settings could not be serialized
    #[error("failed to serialize settings for '{path}': {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file could not be written
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
