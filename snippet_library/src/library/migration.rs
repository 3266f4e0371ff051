//! Reverse index from legacy text hashes to snippet ids.

use game_text::Translation;
use std::collections::HashMap;
use tracing::debug;

use crate::snippet::SnippetId;

/// Lazily built `legacy hash -> id` map.
///
/// `None` means not built. Loading snippets drops the index and the next
/// migration rebuilds it from the current id index.
#[derive(Debug, Clone, Default)]
pub(crate) struct HashMigration {
    index: Option<HashMap<i32, SnippetId>>,
}

impl HashMigration {
    pub fn is_built(&self) -> bool {
        self.index.is_some()
    }

    /// Drop the index. Returns whether it had been built.
    pub fn invalidate(&mut self) -> bool {
        self.index.take().is_some()
    }

    pub fn get_or_build(
        &mut self,
        snippets_by_id: &HashMap<SnippetId, Translation>,
    ) -> &HashMap<i32, SnippetId> {
        self.index.get_or_insert_with(|| build_index(snippets_by_id))
    }
}

/// When two texts share a hash, the lexicographically smallest id wins.
fn build_index(snippets_by_id: &HashMap<SnippetId, Translation>) -> HashMap<i32, SnippetId> {
    let mut entries: Vec<_> = snippets_by_id.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut index = HashMap::with_capacity(entries.len());
    for (id, text) in entries {
        if let Some(hash) = text.legacy_hash() {
            index.entry(hash).or_insert_with(|| id.clone());
        }
    }

    debug!(entries = index.len(), "built snippet hash migration index");
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::SnippetLibrary;
    use crate::snippet::SnippetEntry;
    use game_text::djb2_hash;

    fn hash_of(text: &str) -> i32 {
        djb2_hash(text.as_bytes())
    }

    #[test]
    fn test_index_skips_texts_without_hash() {
        let mut snippets = HashMap::new();
        snippets.insert(SnippetId::new("plain"), Translation::new("plain text"));
        snippets.insert(
            SnippetId::new("ctxt"),
            Translation::new("context text").with_context("menu"),
        );

        let index = build_index(&snippets);
        assert_eq!(index.len(), 1);
        assert_eq!(index[&hash_of("plain text")], SnippetId::new("plain"));
    }

    #[test]
    fn test_collisions_resolve_to_smallest_id() {
        let mut snippets = HashMap::new();
        snippets.insert(SnippetId::new("b_copy"), Translation::new("same"));
        snippets.insert(SnippetId::new("a_copy"), Translation::new("same"));

        let index = build_index(&snippets);
        assert_eq!(index[&hash_of("same")], SnippetId::new("a_copy"));
    }

    #[test]
    fn test_invalidate_reports_state() {
        let mut migration = HashMigration::default();
        assert!(!migration.invalidate());

        migration.get_or_build(&HashMap::new());
        assert!(migration.is_built());
        assert!(migration.invalidate());
        assert!(!migration.is_built());
    }

    #[test]
    fn test_migrate_known_and_unknown_hash() {
        let mut library = SnippetLibrary::new();
        library
            .add_entry(
                "notes",
                SnippetEntry::new(Translation::new("Meet me at the mill.")).with_id("note_mill"),
            )
            .unwrap();

        assert_eq!(
            library.migrate_hash_to_id(hash_of("Meet me at the mill.")),
            SnippetId::new("note_mill")
        );
        assert!(library.migrate_hash_to_id(hash_of("never loaded")).is_null());
    }

    #[test]
    fn test_loading_rebuilds_index() {
        let mut library = SnippetLibrary::new();
        library
            .add_entry(
                "notes",
                SnippetEntry::new(Translation::new("First note.")).with_id("note_1"),
            )
            .unwrap();

        assert!(library.migrate_hash_to_id(hash_of("Second note.")).is_null());
        assert!(library.is_migration_built());

        library
            .add_entry(
                "notes",
                SnippetEntry::new(Translation::new("Second note.")).with_id("note_2"),
            )
            .unwrap();
        assert!(!library.is_migration_built());

        assert_eq!(
            library.migrate_hash_to_id(hash_of("Second note.")),
            SnippetId::new("note_2")
        );
        assert_eq!(
            library.migrate_hash_to_id(hash_of("First note.")),
            SnippetId::new("note_1")
        );
    }

    #[test]
    fn test_anonymous_snippets_are_not_migrated() {
        let mut library = SnippetLibrary::new();
        library
            .add_entry("notes", SnippetEntry::new(Translation::new("No id here.")))
            .unwrap();

        assert!(library.migrate_hash_to_id(hash_of("No id here.")).is_null());
    }
}
