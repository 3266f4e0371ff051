//! Snippet records and their content-data schema.

use game_text::Translation;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::effect::json_kind;
use super::{ExamineEffect, SnippetId};
use crate::error::{EntryLocation, Result, SnippetError};

/// One snippet record.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetEntry {
    pub text: Translation,

    /// Entries without an id can only be reached through random selection.
    pub id: Option<SnippetId>,

    /// Display name, only kept for entries with an id.
    pub name: Option<Translation>,

    pub effect_on_examine: Option<ExamineEffect>,
}

impl SnippetEntry {
    /// Create an anonymous entry with the given text.
    pub fn new(text: Translation) -> Self {
        Self {
            text,
            id: None,
            name: None,
            effect_on_examine: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<SnippetId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: Translation) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_effect(mut self, effect: ExamineEffect) -> Self {
        self.effect_on_examine = Some(effect);
        self
    }

    /// Read an entry object.
    ///
    /// `text` is required. `id`, `name` and `effect_on_examine` are optional.
    pub fn from_json(value: &Value, location: &EntryLocation) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            SnippetError::malformed(
                location,
                "text",
                format!("expected a snippet object, found {}", json_kind(value)),
            )
        })?;

        let text = read_member::<Translation>(object, "text", location)?.ok_or_else(|| {
            SnippetError::malformed(location, "text", "missing required member")
        })?;
        let id = read_member::<SnippetId>(object, "id", location)?;
        let name = read_member::<Translation>(object, "name", location)?;
        let effect_on_examine = object
            .get("effect_on_examine")
            .map(|raw| {
                ExamineEffect::from_value(raw.clone())
                    .map_err(|reason| SnippetError::malformed(location, "effect_on_examine", reason))
            })
            .transpose()?;

        Ok(Self {
            text,
            id,
            name,
            effect_on_examine,
        })
    }
}

impl From<Translation> for SnippetEntry {
    fn from(text: Translation) -> Self {
        Self::new(text)
    }
}

/// One element of a category's `text` array.
#[derive(Debug, Clone, PartialEq)]
pub enum SnippetSource {
    /// A bare string: text with no id.
    Anonymous(Translation),
    /// A full record.
    Entry(SnippetEntry),
}

impl SnippetSource {
    pub fn from_json(value: &Value, location: &EntryLocation) -> Result<Self> {
        match value {
            Value::String(_) => deserialize_value::<Translation>(value)
                .map(SnippetSource::Anonymous)
                .map_err(|reason| SnippetError::malformed(location, "text", reason)),
            Value::Object(_) => SnippetEntry::from_json(value, location).map(SnippetSource::Entry),
            other => Err(SnippetError::malformed(
                location,
                "text",
                format!("expected a string or an object, found {}", json_kind(other)),
            )),
        }
    }
}

impl From<SnippetEntry> for SnippetSource {
    fn from(entry: SnippetEntry) -> Self {
        SnippetSource::Entry(entry)
    }
}

fn deserialize_value<T: DeserializeOwned>(value: &Value) -> std::result::Result<T, String> {
    T::deserialize(value).map_err(|err| err.to_string())
}

fn read_member<T: DeserializeOwned>(
    object: &Map<String, Value>,
    field: &'static str,
    location: &EntryLocation,
) -> Result<Option<T>> {
    object
        .get(field)
        .map(|value| {
            deserialize_value::<T>(value)
                .map_err(|reason| SnippetError::malformed(location, field, reason))
        })
        .transpose()
}
