//! Tag expansion: replacing `<category>` markers with random snippets.

use super::SnippetLibrary;

impl SnippetLibrary {
    /// Replace every `<category>` tag in `input` with a random snippet from
    /// that category.
    ///
    /// The tag, brackets included, is the category name. Replacement text is
    /// expanded in turn, so categories can reference each other. Tags naming
    /// an unknown or empty category are kept verbatim. Text after an
    /// unterminated `<` is left as is.
    ///
    /// Categories that reference each other in a cycle recurse without
    /// bound; content must not define such cycles.
    pub fn expand(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut rest = input;

        while let Some((begin, end)) = find_tag(rest) {
            let tag = &rest[begin..=end];
            match self.random_from_category(tag) {
                Some(replacement) => {
                    output.push_str(&rest[..begin]);
                    output.push_str(&self.expand(&replacement.translated()));
                }
                None => output.push_str(&rest[..=end]),
            }
            rest = &rest[end + 1..];
        }

        output.push_str(rest);
        output
    }
}

/// Byte offsets of the first `<` and the next `>` after it.
fn find_tag(text: &str) -> Option<(usize, usize)> {
    let begin = text.find('<')?;
    let end = begin + 1 + text[begin + 1..].find('>')?;
    Some((begin, end))
}
