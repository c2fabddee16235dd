/*!
 * Check message records.
 */

use std::fmt;

use serde::{Serialize, Serializer};

/// Namespace prefixed to every check identifier
pub const CHECK_ID_NAMESPACE: &str = "translated_models";

/// Stable identifier of a check failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckId {
    /// Active language list equals the built-in default
    E001,
    /// `translated_fields` is not a non-empty string collection
    E002,
    /// `translated_fields` names a field the model doesn't have
    E003,
    /// `translated_fields` names a non-translatable field
    E004,
    /// `languages` is not a non-empty string collection
    E005,
    /// `languages` holds a code unknown to the reference catalog
    E006,
    /// `languages` holds a code missing from the active configuration
    E007,
    /// `original_language` is missing
    E008,
    /// `original_language` is not a string
    E009,
    /// `original_language` is unknown to the reference catalog
    E010,
    /// `original_language` is missing from the active configuration
    E011,
}

impl CheckId {
    /// Identifier without the namespace (e.g. `E002`)
    pub fn code(&self) -> &'static str {
        match self {
            Self::E001 => "E001",
            Self::E002 => "E002",
            Self::E003 => "E003",
            Self::E004 => "E004",
            Self::E005 => "E005",
            Self::E006 => "E006",
            Self::E007 => "E007",
            Self::E008 => "E008",
            Self::E009 => "E009",
            Self::E010 => "E010",
            Self::E011 => "E011",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", CHECK_ID_NAMESPACE, self.code())
    }
}

impl Serialize for CheckId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Severity of a check message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
}

/// One failed check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckMessage {
    pub level: Level,
    pub id: CheckId,
    pub msg: String,
    /// Label of the model the message concerns, if any
    pub obj: Option<String>,
}

impl CheckMessage {
    /// An error about a model
    pub fn error(id: CheckId, msg: impl Into<String>, obj: &str) -> Self {
        Self {
            level: Level::Error,
            id,
            msg: msg.into(),
            obj: Some(obj.to_string()),
        }
    }

    /// An error not tied to any model
    pub fn global_error(id: CheckId, msg: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            id,
            msg: msg.into(),
            obj: None,
        }
    }

    pub fn is_serious(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let obj = self.obj.as_deref().unwrap_or("?");
        write!(f, "{}: ({}) {}", obj, self.id, self.msg)
    }
}
