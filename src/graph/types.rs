//! Core type definitions for the constellation graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized word: trimmed, lowercase, language-neutral at this layer
///
/// Words identify nodes, so construction goes through [`Word::normalize`]
/// everywhere caller input is involved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Wrap an already-normalized token
    pub fn new(word: impl Into<String>) -> Self {
        Word(word.into())
    }

    /// Normalize raw caller input: trim and lowercase
    pub fn normalize(raw: &str) -> Self {
        Word(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::borrow::Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Word {
    fn from(s: String) -> Self {
        Word(s)
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Word(s.to_string())
    }
}

/// How a word entered the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordOrigin {
    /// Supplied directly by the caller
    Seed,
    /// Discovered via lexical expansion
    Expanded,
}

/// Kind of relationship a link represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Directed expansion-parent -> child link
    Seed,
    /// Undirected semantic connection
    Related,
}
