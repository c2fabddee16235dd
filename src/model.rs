/*!
 * Model metadata consumed by the resolver and the validation engine.
 *
 * This module describes a host model the way the validation layer sees it:
 * - `FieldType` / `FieldDescriptor`: the declared fields and their kinds
 * - `ModelIntrospection`: the capability to enumerate and look up fields
 * - `Declared` / `AttributeValue`: the raw, unvalidated translation attributes
 * - `TranslatedModel`: a model definition paired with its translation options
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app_config::Settings;
use crate::checks::CheckMessage;
use crate::errors::ModelError;

/// Kind of a model field, named after the host ORM field class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    AutoField,
    BigAutoField,
    BooleanField,
    CharField,
    DateField,
    DateTimeField,
    DecimalField,
    EmailField,
    FloatField,
    ForeignKey,
    IntegerField,
    JsonField,
    SlugField,
    TextField,
    UrlField,
    UuidField,
    /// Any field class the host defines that is not listed above
    Other(String),
}

impl FieldType {
    /// Class name of the field type
    pub fn class_name(&self) -> &str {
        match self {
            Self::AutoField => "AutoField",
            Self::BigAutoField => "BigAutoField",
            Self::BooleanField => "BooleanField",
            Self::CharField => "CharField",
            Self::DateField => "DateField",
            Self::DateTimeField => "DateTimeField",
            Self::DecimalField => "DecimalField",
            Self::EmailField => "EmailField",
            Self::FloatField => "FloatField",
            Self::ForeignKey => "ForeignKey",
            Self::IntegerField => "IntegerField",
            Self::JsonField => "JSONField",
            Self::SlugField => "SlugField",
            Self::TextField => "TextField",
            Self::UrlField => "URLField",
            Self::UuidField => "UUIDField",
            Self::Other(name) => name,
        }
    }

    /// Fully qualified name used in messages
    pub fn qualified_name(&self) -> String {
        match self {
            Self::Other(name) => name.clone(),
            known => format!("models.{}", known.class_name()),
        }
    }

    /// The field class this one derives from, if any
    pub fn parent(&self) -> Option<FieldType> {
        match self {
            Self::EmailField | Self::SlugField | Self::UrlField => Some(Self::CharField),
            Self::BigAutoField => Some(Self::AutoField),
            _ => None,
        }
    }

    /// Whether this type is `other` or derives from it
    pub fn is_kind_of(&self, other: &FieldType) -> bool {
        let mut current = Some(self.clone());
        while let Some(field_type) = current {
            if &field_type == other {
                return true;
            }
            current = field_type.parent();
        }
        false
    }
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "AutoField" => Self::AutoField,
            "BigAutoField" => Self::BigAutoField,
            "BooleanField" => Self::BooleanField,
            "CharField" => Self::CharField,
            "DateField" => Self::DateField,
            "DateTimeField" => Self::DateTimeField,
            "DecimalField" => Self::DecimalField,
            "EmailField" => Self::EmailField,
            "FloatField" => Self::FloatField,
            "ForeignKey" => Self::ForeignKey,
            "IntegerField" => Self::IntegerField,
            "JSONField" => Self::JsonField,
            "SlugField" => Self::SlugField,
            "TextField" => Self::TextField,
            "URLField" => Self::UrlField,
            "UUIDField" => Self::UuidField,
            _ => Self::Other(name),
        }
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.class_name().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

/// A single field declared on a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared on the model
    pub name: String,

    /// Field kind
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Read access to the fields a model declares.
///
/// This is the only view of the persistence layer the validation engine needs.
pub trait ModelIntrospection {
    /// Label identifying the model in messages (e.g. `app.Model`)
    fn label(&self) -> &str;

    /// All fields of the model, inherited ones included, in declaration order
    fn fields(&self) -> &[FieldDescriptor];

    /// Look up a field by name
    fn field_by_name(&self, name: &str) -> Result<&FieldDescriptor, ModelError> {
        self.fields()
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| ModelError::FieldDoesNotExist {
                model: self.label().to_string(),
                name: name.to_string(),
            })
    }
}

/// In-memory model definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub label: String,
    pub fields: Vec<FieldDescriptor>,
}

impl ModelDefinition {
    pub fn new(label: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            label: label.into(),
            fields,
        }
    }

    /// Define a model inheriting all fields of `parent`.
    ///
    /// Parent fields come first; a field redeclared by the child replaces the
    /// inherited one at the parent's position.
    pub fn inheriting(
        parent: &ModelDefinition,
        label: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        let mut merged = parent.fields.clone();
        for field in fields {
            match merged.iter_mut().find(|f| f.name == field.name) {
                Some(existing) => *existing = field,
                None => merged.push(field),
            }
        }
        Self::new(label, merged)
    }
}

impl ModelIntrospection for ModelDefinition {
    fn label(&self) -> &str {
        &self.label
    }

    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

/// Raw value of a translation attribute, as the developer wrote it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<AttributeValue>),
    /// `null` inside a list
    Null,
    /// Mappings and anything else no other variant accepts
    Other(serde_json::Value),
}

impl AttributeValue {
    /// A list of text values
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(|s| Self::Text(s.into())).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Elements as strings if this is a non-empty list made only of text
    pub fn as_string_collection(&self) -> Option<Vec<&str>> {
        let Self::List(items) = self else {
            return None;
        };
        if items.is_empty() {
            return None;
        }
        items.iter().map(AttributeValue::as_text).collect()
    }

    /// Text elements taken verbatim, without any type check.
    ///
    /// A list yields its text elements, a lone text yields itself, anything
    /// else yields nothing.
    pub fn text_elements(&self) -> Vec<String> {
        match self {
            Self::List(items) => items
                .iter()
                .filter_map(AttributeValue::as_text)
                .map(str::to_string)
                .collect(),
            Self::Text(text) => vec![text.clone()],
            _ => Vec::new(),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(values: Vec<&str>) -> Self {
        Self::strings(values)
    }
}

/// A collection attribute that may be left for the resolver to derive
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<AttributeValue>", into = "Option<AttributeValue>")]
pub enum Declared {
    /// Not provided; the value is derived from the model and settings
    #[default]
    Unset,
    /// Explicitly provided; validated by `check()`
    Value(AttributeValue),
}

impl Declared {
    /// An explicitly declared value
    pub fn set(value: impl Into<AttributeValue>) -> Self {
        Self::Value(value.into())
    }

    pub fn value(&self) -> Option<&AttributeValue> {
        match self {
            Self::Unset => None,
            Self::Value(value) => Some(value),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<Option<AttributeValue>> for Declared {
    fn from(value: Option<AttributeValue>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Unset,
        }
    }
}

impl From<Declared> for Option<AttributeValue> {
    fn from(declared: Declared) -> Self {
        match declared {
            Declared::Unset => None,
            Declared::Value(value) => Some(value),
        }
    }
}

/// Translation attributes declared on a model
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TranslationOptions {
    /// Names of the fields holding translatable content
    #[serde(default)]
    pub translated_fields: Declared,

    /// Codes of the languages translations exist in
    #[serde(default)]
    pub languages: Declared,

    /// Code of the language the original content is written in.
    ///
    /// Mandatory when the original-language check is enabled: `None` is
    /// reported, never derived.
    #[serde(default)]
    pub original_language: Option<AttributeValue>,
}

/// A model definition together with its translation attributes
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedModel {
    pub definition: ModelDefinition,
    pub options: TranslationOptions,
}

impl TranslatedModel {
    pub fn new(definition: ModelDefinition, options: TranslationOptions) -> Self {
        Self {
            definition,
            options,
        }
    }

    pub fn label(&self) -> &str {
        &self.definition.label
    }

    /// Names of the translated fields, derived when unset
    pub fn get_translated_fields(&self, settings: &Settings) -> Vec<String> {
        crate::resolver::get_translated_fields(&self.definition, &self.options, settings)
    }

    /// Normalized translation language codes, derived when unset
    pub fn get_languages(&self, settings: &Settings) -> Vec<String> {
        crate::resolver::get_languages(&self.options, settings)
    }

    /// Run every validation stage for this model
    pub fn check(&self, settings: &Settings) -> Vec<CheckMessage> {
        crate::validation::check(&self.definition, &self.options, settings)
    }
}
