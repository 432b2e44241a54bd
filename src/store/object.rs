use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::source::ObjectRecord;

/// A recorded argument or return value.
///
/// In capture dumps values are plain JSON scalars, an object with `typeName`
/// and `identityHash` for values recorded by identity only, or
/// `{"notRecorded": true}` for a value the recorder skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CapturedValue", into = "CapturedValue")]
pub enum RecordedObject {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Object { type_name: String, identity_hash: u32 },
    NotRecorded,
}

/// Capture dump form of a [`RecordedObject`].
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CapturedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Object {
        #[serde(rename = "typeName")]
        type_name: String,
        #[serde(rename = "identityHash")]
        identity_hash: u32,
    },
    Marker {
        #[serde(rename = "notRecorded")]
        not_recorded: bool,
    },
}

impl TryFrom<CapturedValue> for RecordedObject {
    type Error = String;

    fn try_from(value: CapturedValue) -> Result<Self, Self::Error> {
        Ok(match value {
            CapturedValue::Null => RecordedObject::Null,
            CapturedValue::Bool(b) => RecordedObject::Bool(b),
            CapturedValue::Int(n) => RecordedObject::Int(n),
            CapturedValue::Float(x) => RecordedObject::Float(x),
            CapturedValue::Str(s) => RecordedObject::Str(s),
            CapturedValue::Object {
                type_name,
                identity_hash,
            } => RecordedObject::Object {
                type_name,
                identity_hash,
            },
            CapturedValue::Marker { not_recorded: true } => RecordedObject::NotRecorded,
            CapturedValue::Marker { not_recorded: false } => {
                return Err("\"notRecorded\" must be true when present".to_string());
            }
        })
    }
}

impl From<RecordedObject> for CapturedValue {
    fn from(value: RecordedObject) -> Self {
        match value {
            RecordedObject::Null => CapturedValue::Null,
            RecordedObject::Bool(b) => CapturedValue::Bool(b),
            RecordedObject::Int(n) => CapturedValue::Int(n),
            RecordedObject::Float(x) => CapturedValue::Float(x),
            RecordedObject::Str(s) => CapturedValue::Str(s),
            RecordedObject::Object {
                type_name,
                identity_hash,
            } => CapturedValue::Object {
                type_name,
                identity_hash,
            },
            RecordedObject::NotRecorded => CapturedValue::Marker { not_recorded: true },
        }
    }
}

impl fmt::Display for RecordedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordedObject::Null => write!(f, "null"),
            RecordedObject::Bool(b) => write!(f, "{}", b),
            RecordedObject::Int(n) => write!(f, "{}", n),
            RecordedObject::Float(x) => write!(f, "{}", x),
            RecordedObject::Str(s) => write!(f, "{}", s),
            RecordedObject::Object {
                type_name,
                identity_hash,
            } => write!(f, "{}@{:x}", type_name, identity_hash),
            RecordedObject::NotRecorded => write!(f, "<not recorded>"),
        }
    }
}

impl ObjectRecord for RecordedObject {
    fn render(&self) -> Result<String, SourceError> {
        Ok(self.to_string())
    }
}
