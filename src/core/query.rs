//! Query representation
//!
//! A query is an immutable sequence of characters plus the configured
//! consecutive-match toggle character. Matching state lives entirely in the
//! cursor values handed down the walk, never in the query itself.

use crate::core::config::Config;

/// The fuzzy search pattern, normalized once at construction.
#[derive(Debug, Clone)]
pub struct Query {
    chars: Vec<char>,
    conseq_char: char,
    fold_case: bool,
}

impl Query {
    /// Build a query from raw text. When `fold_case` is set the text is
    /// lowercased here, once; candidate names are folded per comparison.
    pub fn new(text: &str, conseq_char: char, fold_case: bool) -> Self {
        let chars = if fold_case {
            text.chars().map(|c| c.to_ascii_lowercase()).collect()
        } else {
            text.chars().collect()
        };
        Self {
            chars,
            conseq_char,
            fold_case,
        }
    }

    /// Build a query from the run configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.query, config.conseq_char, config.case_insensitive)
    }

    /// Number of characters in the query.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True for the empty query, which matches every entry.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The query character at `cursor`, or `None` at or past the end.
    pub fn char_at(&self, cursor: usize) -> Option<char> {
        self.chars.get(cursor).copied()
    }

    /// The consecutive-match toggle character.
    pub fn conseq_char(&self) -> char {
        self.conseq_char
    }

    /// Whether candidate names must be case-folded before comparison.
    pub fn fold_case(&self) -> bool {
        self.fold_case
    }

    /// True when `cursor` has consumed the whole query.
    pub fn is_complete(&self, cursor: usize) -> bool {
        cursor == self.chars.len()
    }

    /// True when a segment boundary ('/') remains at or after `cursor`,
    /// i.e. the next path component must fully satisfy the pending segment.
    pub fn segment_pending(&self, cursor: usize) -> bool {
        self.chars
            .get(cursor..)
            .is_some_and(|rest| rest.contains(&'/'))
    }
}
