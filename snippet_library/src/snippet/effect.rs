//! Effect payload attached to examinable snippets.

use serde::Serialize;
use serde_json::Value;

/// Effect run when the player examines a snippet.
///
/// The library stores the payload untouched; interpreting it belongs to the
/// dialogue system.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExamineEffect(Value);

impl ExamineEffect {
    /// Wrap a raw effect definition.
    ///
    /// Effects are written as a string, an object or a list of those.
    pub fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::String(_) | Value::Object(_) | Value::Array(_) => Ok(Self(value)),
            other => Err(format!(
                "expected a string, object or array, found {}",
                json_kind(&other)
            )),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
