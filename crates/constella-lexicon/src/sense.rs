//! Sense types for the lexical database

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a sense in the lexical dataset (e.g. "cow.n.01")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct SenseId(String);

impl SenseId {
    pub fn new(id: impl Into<String>) -> Self {
        SenseId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SenseId {
    fn from(s: String) -> Self {
        SenseId(s)
    }
}

impl From<&str> for SenseId {
    fn from(s: &str) -> Self {
        SenseId(s.to_string())
    }
}

/// One meaning of a word
///
/// A sense carries:
/// - Its lemmas (surface forms), head lemma first
/// - A dotted lexical category (e.g. "noun.animal", "verb.motion")
/// - A lowercase definition string
/// - Relations to other senses, referenced by [`SenseId`]
///
/// Relation targets are allowed to point outside the loaded dataset;
/// resolution through [`crate::Lexicon::sense`] is always optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sense {
    /// Dataset key for this sense
    pub id: SenseId,

    /// Surface forms, head lemma first; multi-word lemmas use underscores
    pub lemmas: Vec<String>,

    /// Dotted lexical category
    pub category: String,

    /// Definition text, lowercase
    pub definition: String,

    /// Senses this one is a kind of
    #[serde(default)]
    pub hypernyms: Vec<SenseId>,

    /// Senses that are kinds of this one
    #[serde(default)]
    pub hyponyms: Vec<SenseId>,

    /// Senses naming parts of this one
    #[serde(default)]
    pub part_meronyms: Vec<SenseId>,

    /// Senses this one is a part of
    #[serde(default)]
    pub part_holonyms: Vec<SenseId>,
}

impl Sense {
    /// Coarse category: second segment of the dotted category when present,
    /// the whole string otherwise ("noun.animal" -> "animal")
    pub fn coarse_category(&self) -> &str {
        match self.category.split_once('.') {
            Some((_, rest)) => rest,
            None => &self.category,
        }
    }

    /// Head lemma, if the sense has any lemmas
    pub fn head_lemma(&self) -> Option<&str> {
        self.lemmas.first().map(|s| s.as_str())
    }
}

impl PartialEq for Sense {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Sense {}

impl std::hash::Hash for Sense {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
