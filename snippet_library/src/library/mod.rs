//! Snippet Library - the registry of categorized text snippets.
//!
//! Snippets are grouped by category. Inside a category, snippets with an id
//! are kept apart from anonymous ones:
//! - **Identified** snippets can be listed, looked up and saved by id
//! - **Anonymous** snippets only take part in random selection
//!
//! The library is filled during content loading and queried afterwards.

mod expansion;
mod migration;
mod selection;

use game_text::Translation;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

use self::migration::HashMigration;
use crate::config::SnippetConfig;
use crate::error::{EntryLocation, Result, SnippetError};
use crate::snippet::{ExamineEffect, SnippetEntry, SnippetId, SnippetSource};

static EMPTY_TRANSLATION: Translation = Translation::empty();

/// Snippets belonging to one category, in load order.
#[derive(Debug, Clone, Default)]
pub struct CategorySnippets {
    ids: Vec<SnippetId>,
    anonymous: Vec<Translation>,
}

impl CategorySnippets {
    /// Ids of identified snippets.
    pub fn ids(&self) -> &[SnippetId] {
        &self.ids
    }

    /// Texts of snippets without an id.
    pub fn anonymous(&self) -> &[Translation] {
        &self.anonymous
    }

    /// Total number of snippets, identified and anonymous.
    pub fn len(&self) -> usize {
        self.ids.len() + self.anonymous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The snippet registry.
///
/// Every id stored in a category is also a key of the id index.
#[derive(Debug, Clone, Default)]
pub struct SnippetLibrary {
    config: SnippetConfig,

    /// Category name -> snippets in that category.
    snippets_by_category: HashMap<String, CategorySnippets>,

    /// Id -> snippet text.
    snippets_by_id: HashMap<SnippetId, Translation>,

    /// Id -> examine effect, only for snippets that declare one.
    effect_by_id: HashMap<SnippetId, ExamineEffect>,

    /// Id -> display name. Present for every id, empty if none was given.
    name_by_id: HashMap<SnippetId, Translation>,

    /// Legacy hash -> id, built on first migration and dropped on every load.
    hash_migration: HashMigration,
}

impl SnippetLibrary {
    /// Create an empty library with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty library with the given configuration.
    pub fn with_config(config: SnippetConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SnippetConfig {
        &self.config
    }

    /// Load a snippet definition object.
    ///
    /// The definition names a `category`. If its `text` is an array, every
    /// element is loaded into that category. Otherwise the definition itself
    /// is a single snippet record.
    pub fn load_definition(&mut self, definition: &Value) -> Result<()> {
        let category = definition_category(definition);
        self.invalidate_migration("load_definition", category.as_deref().unwrap_or(""));
        let category = category?;

        match definition.get("text") {
            Some(entries @ Value::Array(_)) => self.load_entries(category, entries),
            _ => self.load_entries(category, definition),
        }
    }

    /// Load snippets into a category from a single record or an array.
    ///
    /// Array elements are bare strings (anonymous snippets) or records.
    /// Entries before a failing element stay loaded.
    pub fn load(&mut self, category: &str, entries: &Value) -> Result<()> {
        self.invalidate_migration("load", category);
        self.load_entries(category, entries)
    }

    fn load_entries(&mut self, category: &str, entries: &Value) -> Result<()> {
        match entries {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let location = EntryLocation::new(category).at(index);
                    let source = SnippetSource::from_json(item, &location)?;
                    self.insert_source(category, source, &location)?;
                }
                debug!(category, count = items.len(), "loaded snippets");
                Ok(())
            }
            Value::Object(_) => {
                let location = EntryLocation::new(category);
                let entry = SnippetEntry::from_json(entries, &location)?;
                self.insert_entry(category, entry, &location)
            }
            _ => Err(SnippetError::malformed(
                &EntryLocation::new(category),
                "text",
                "expected a snippet object or an array of snippets",
            )),
        }
    }

    /// Add already parsed snippets to a category.
    pub fn add_entries<I, S>(&mut self, category: &str, sources: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<SnippetSource>,
    {
        self.invalidate_migration("add_entries", category);

        for (index, source) in sources.into_iter().enumerate() {
            let location = EntryLocation::new(category).at(index);
            self.insert_source(category, source.into(), &location)?;
        }
        Ok(())
    }

    /// Add a single snippet record to a category.
    ///
    /// Fails if the record's id is null or already registered.
    pub fn add_entry(&mut self, category: &str, entry: SnippetEntry) -> Result<()> {
        self.invalidate_migration("add_entry", category);
        self.insert_entry(category, entry, &EntryLocation::new(category))
    }

    /// Remove every snippet.
    pub fn clear(&mut self) {
        self.hash_migration.invalidate();
        self.snippets_by_category.clear();
        self.snippets_by_id.clear();
        self.effect_by_id.clear();
        self.name_by_id.clear();
    }

    /// Drop the hash migration index ahead of a load.
    fn invalidate_migration(&mut self, operation: &'static str, category: &str) {
        if self.hash_migration.invalidate() && self.config.warn_on_late_load {
            warn!(
                operation,
                category,
                "snippets loaded after the hash migration index was built"
            );
        }
    }

    fn insert_source(
        &mut self,
        category: &str,
        source: SnippetSource,
        location: &EntryLocation,
    ) -> Result<()> {
        match source {
            SnippetSource::Anonymous(text) => {
                self.category_mut(category).anonymous.push(text);
                Ok(())
            }
            SnippetSource::Entry(entry) => self.insert_entry(category, entry, location),
        }
    }

    fn insert_entry(
        &mut self,
        category: &str,
        entry: SnippetEntry,
        location: &EntryLocation,
    ) -> Result<()> {
        let SnippetEntry {
            text,
            id,
            name,
            effect_on_examine,
        } = entry;

        let Some(id) = id else {
            self.category_mut(category).anonymous.push(text);
            return Ok(());
        };
        if id.is_null() {
            return Err(SnippetError::InvalidId {
                location: location.clone(),
            });
        }
        if self.snippets_by_id.contains_key(&id) {
            return Err(SnippetError::DuplicateId {
                location: location.clone(),
                id,
            });
        }

        self.category_mut(category).ids.push(id.clone());
        self.snippets_by_id.insert(id.clone(), text);
        if let Some(effect) = effect_on_examine {
            self.effect_by_id.insert(id.clone(), effect);
        }
        self.name_by_id.insert(id, name.unwrap_or_default());
        Ok(())
    }

    fn category_mut(&mut self, category: &str) -> &mut CategorySnippets {
        self.snippets_by_category
            .entry(category.to_owned())
            .or_default()
    }

    /// Check if a category exists.
    pub fn has_category(&self, category: &str) -> bool {
        self.snippets_by_category.contains_key(category)
    }

    /// Get the snippets of a category.
    pub fn category(&self, category: &str) -> Option<&CategorySnippets> {
        self.snippets_by_category.get(category)
    }

    /// Get the number of categories.
    pub fn category_count(&self) -> usize {
        self.snippets_by_category.len()
    }

    /// Get the number of identified snippets.
    pub fn snippet_count(&self) -> usize {
        self.snippets_by_id.len()
    }

    /// Get snippet text by id.
    pub fn get_by_id(&self, id: &SnippetId) -> Option<&Translation> {
        self.snippets_by_id.get(id)
    }

    /// Get snippet text by id, or the empty text if the id is unknown.
    pub fn get_ref_by_id(&self, id: &SnippetId) -> &Translation {
        self.snippets_by_id.get(id).unwrap_or(&EMPTY_TRANSLATION)
    }

    pub fn get_effect_by_id(&self, id: &SnippetId) -> Option<&ExamineEffect> {
        self.effect_by_id.get(id)
    }

    pub fn get_name_by_id(&self, id: &SnippetId) -> Option<&Translation> {
        self.name_by_id.get(id)
    }

    pub fn has_id(&self, id: &SnippetId) -> bool {
        self.snippets_by_id.contains_key(id)
    }

    /// List the identified snippets of a category as `(id, text)` pairs.
    ///
    /// With `add_null_id`, a `(null id, "")` choice comes first when the
    /// category has any identified snippet. Anonymous snippets are never
    /// listed.
    pub fn list_by_category(&self, category: &str, add_null_id: bool) -> Vec<(SnippetId, String)> {
        let Some(snippets) = self.snippets_by_category.get(category) else {
            return Vec::new();
        };

        let mut listing = Vec::with_capacity(snippets.ids.len() + 1);
        if add_null_id && !snippets.ids.is_empty() {
            listing.push((SnippetId::null(), String::new()));
        }
        listing.extend(
            snippets
                .ids
                .iter()
                .map(|id| (id.clone(), self.get_ref_by_id(id).translated())),
        );
        listing
    }

    /// Whether the legacy hash index is currently built.
    pub fn is_migration_built(&self) -> bool {
        self.hash_migration.is_built()
    }

    /// Map a legacy text hash to the id of the snippet with that text.
    ///
    /// The index is built on first use after any load. Unknown hashes map to
    /// the null id.
    pub fn migrate_hash_to_id(&mut self, old_hash: i32) -> SnippetId {
        self.hash_migration
            .get_or_build(&self.snippets_by_id)
            .get(&old_hash)
            .cloned()
            .unwrap_or_default()
    }
}

/// The `category` member of a definition object.
fn definition_category(definition: &Value) -> Result<&str> {
    let location = EntryLocation::new("");
    definition
        .get("category")
        .ok_or_else(|| SnippetError::malformed(&location, "category", "missing required member"))?
        .as_str()
        .ok_or_else(|| SnippetError::malformed(&location, "category", "expected a string"))
}
