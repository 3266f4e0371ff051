//! Configuration for the snippet library.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Diagnostic switches for a [`SnippetLibrary`](crate::SnippetLibrary).
///
/// Configuration never changes query results, only what gets reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetConfig {
    /// Warn when snippets are loaded after the hash migration index was built.
    pub warn_on_late_load: bool,

    /// Warn when a random id is requested from a category that also holds
    /// snippets without ids.
    pub warn_on_mixed_category: bool,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            warn_on_late_load: true,
            warn_on_mixed_category: true,
        }
    }
}

impl SnippetConfig {
    /// Parse configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Configuration with every diagnostic turned off.
    pub fn quiet() -> Self {
        Self {
            warn_on_late_load: false,
            warn_on_mixed_category: false,
        }
    }
}
