//! Random selection of snippets.

use game_text::Translation;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use tracing::warn;

use super::SnippetLibrary;
use crate::snippet::SnippetId;

impl SnippetLibrary {
    /// Pick a random identified snippet from a category.
    ///
    /// Returns the null id if the category is unknown or has no identified
    /// snippets.
    pub fn random_id_from_category(&self, category: &str) -> SnippetId {
        let Some(snippets) = self.snippets_by_category.get(category) else {
            return SnippetId::null();
        };
        if !snippets.anonymous.is_empty() && self.config.warn_on_mixed_category {
            warn!(
                category,
                "ids are required, but not specified for some snippets in category"
            );
        }
        snippets
            .ids
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }

    /// Pick a random snippet text from a category with a fresh seed.
    pub fn random_from_category(&self, category: &str) -> Option<&Translation> {
        self.random_from_category_seeded(category, rand::random())
    }

    /// Pick a snippet text from a category, determined entirely by `seed`.
    ///
    /// Identified and anonymous snippets are equally likely. Indices below the
    /// number of ids select identified snippets, the rest select anonymous ones.
    pub fn random_from_category_seeded(&self, category: &str, seed: u64) -> Option<&Translation> {
        let snippets = self.snippets_by_category.get(category)?;
        if snippets.is_empty() {
            return None;
        }

        // Pcg64Mcg output is value-stable; sampling a u64 keeps the index
        // independent of pointer width.
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let index = rng.gen_range(0..snippets.len() as u64) as usize;

        match snippets.ids.get(index) {
            Some(id) => self.get_by_id(id),
            None => snippets.anonymous.get(index - snippets.ids.len()),
        }
    }
}
