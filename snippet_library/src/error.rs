//! Error types for snippet loading.

use std::fmt;

use crate::snippet::SnippetId;

/// Where in the content data a failing entry lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLocation {
    pub category: String,
    /// Position in the category's `text` array, if the entry came from one.
    pub index: Option<usize>,
}

impl EntryLocation {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            index: None,
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

impl fmt::Display for EntryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.category.is_empty() {
            return write!(f, "snippet definition");
        }
        match self.index {
            Some(index) => write!(f, "category `{}`, entry {}", self.category, index),
            None => write!(f, "category `{}`", self.category),
        }
    }
}

/// Errors raised while loading snippets or configuration.
///
/// Lookups never fail; they report absence through `Option` or the null id.
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    #[error("malformed snippet in {location}: field `{field}`: {reason}")]
    MalformedEntry {
        location: EntryLocation,
        field: &'static str,
        reason: String,
    },
    #[error("null snippet id specified in {location}")]
    InvalidId { location: EntryLocation },
    #[error("duplicate snippet id `{id}` in {location}")]
    DuplicateId {
        location: EntryLocation,
        id: SnippetId,
    },
    #[error("invalid snippet configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl SnippetError {
    pub(crate) fn malformed(
        location: &EntryLocation,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        SnippetError::MalformedEntry {
            location: location.clone(),
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SnippetError>;
