/*!
 * Loading of model declarations from JSON files.
 *
 * A declaration file lists models in order:
 *
 * ```json
 * {
 *   "models": [
 *     {
 *       "label": "catalog.Movie",
 *       "extends": "catalog.Media",
 *       "fields": [{"name": "title", "type": "TextField"}],
 *       "translated_fields": ["title"],
 *       "languages": ["en", "pl"],
 *       "original_language": "en"
 *     }
 *   ]
 * }
 * ```
 *
 * `extends` copies the fields of a model declared earlier in the same file.
 */

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

use crate::errors::ModelError;
use crate::model::{
    AttributeValue, Declared, FieldDescriptor, ModelDefinition, TranslatedModel,
    TranslationOptions,
};

/// Top-level layout of a declaration file
#[derive(Debug, Deserialize)]
pub struct ModelsFile {
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

/// One model as written in a declaration file
#[derive(Debug, Deserialize)]
pub struct ModelEntry {
    pub label: String,

    /// Label of an earlier model whose fields are inherited
    #[serde(default)]
    pub extends: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    #[serde(default)]
    pub translated_fields: Declared,

    #[serde(default)]
    pub languages: Declared,

    #[serde(default)]
    pub original_language: Option<AttributeValue>,
}

/// Resolve inheritance and build models in declaration order
pub fn build_models(entries: Vec<ModelEntry>) -> Result<Vec<TranslatedModel>, ModelError> {
    let mut definitions: HashMap<String, ModelDefinition> = HashMap::new();
    let mut models = Vec::with_capacity(entries.len());

    for entry in entries {
        if definitions.contains_key(&entry.label) {
            return Err(ModelError::DuplicateModel { label: entry.label });
        }

        let definition = match &entry.extends {
            Some(parent_label) => {
                let parent = definitions.get(parent_label).ok_or_else(|| {
                    ModelError::UnknownParent {
                        model: entry.label.clone(),
                        parent: parent_label.clone(),
                    }
                })?;
                ModelDefinition::inheriting(parent, entry.label.clone(), entry.fields)
            }
            None => ModelDefinition::new(entry.label.clone(), entry.fields),
        };
        debug!(
            "Declared model {} with {} field(s)",
            definition.label,
            definition.fields.len()
        );

        definitions.insert(entry.label, definition.clone());
        models.push(TranslatedModel::new(
            definition,
            TranslationOptions {
                translated_fields: entry.translated_fields,
                languages: entry.languages,
                original_language: entry.original_language,
            },
        ));
    }

    Ok(models)
}

/// Parse a declaration document
pub fn parse_models(content: &str) -> Result<Vec<TranslatedModel>> {
    let file: ModelsFile =
        serde_json::from_str(content).context("Failed to parse model declarations")?;
    Ok(build_models(file.models)?)
}

/// Load a declaration file
pub fn load_models(path: impl AsRef<Path>) -> Result<Vec<TranslatedModel>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read model declarations: {}", path.display()))?;
    parse_models(&content)
        .with_context(|| format!("Invalid model declarations in {}", path.display()))
}
