//! Word pool: the working set of one constellation build

use super::types::{Word, WordOrigin};
use indexmap::IndexMap;

/// The pool of words participating in a build, keyed by word with the
/// origin of each entry
///
/// Iteration order is insertion order (seeds first, then expansions) and is
/// the fixed pool ordering later stages rely on for deterministic output.
/// Every seed word stays a member for the whole build, connected or not.
#[derive(Debug, Default)]
pub struct WordPool {
    entries: IndexMap<Word, WordOrigin>,
}

impl WordPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a seed word; seeds always win over an earlier expanded entry
    pub fn insert_seed(&mut self, word: Word) {
        self.entries.insert(word, WordOrigin::Seed);
    }

    /// Insert an expanded word unless already pooled; returns true when the
    /// word is new to the pool
    pub fn insert_expanded(&mut self, word: Word) -> bool {
        if self.entries.contains_key(&word) {
            return false;
        }
        self.entries.insert(word, WordOrigin::Expanded);
        true
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.entries.contains_key(word)
    }

    pub fn contains_str(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn origin(&self, word: &Word) -> Option<WordOrigin> {
        self.entries.get(word).copied()
    }

    pub fn is_seed(&self, word: &Word) -> bool {
        self.origin(word) == Some(WordOrigin::Seed)
    }

    /// Pool words in the fixed pool ordering
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Word, WordOrigin)> {
        self.entries.iter().map(|(w, o)| (w, *o))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
