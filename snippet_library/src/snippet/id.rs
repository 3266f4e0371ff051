//! Snippet identifiers.

use game_text::Translation;
use serde::{Deserialize, Serialize};

use crate::library::SnippetLibrary;

/// Stable identifier of a snippet.
///
/// The empty string is the null id, meaning "no snippet".
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(String);

impl SnippetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The null id.
    pub fn null() -> Self {
        Self(String::new())
    }

    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text of the snippet, or the empty text if the library does not know it.
    pub fn resolve<'a>(&self, library: &'a SnippetLibrary) -> &'a Translation {
        library.get_ref_by_id(self)
    }

    /// Whether the library holds a snippet with this id.
    pub fn is_valid(&self, library: &SnippetLibrary) -> bool {
        library.has_id(self)
    }
}

impl From<&str> for SnippetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for SnippetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
