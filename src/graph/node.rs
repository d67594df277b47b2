//! Node implementation for the constellation graph

use super::types::Word;
use serde::{Deserialize, Serialize};

/// A node in the constellation
///
/// The word itself is the identity; categories are the coarse lexical
/// classes the word belongs to, capped at three for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// The word this node represents
    pub id: Word,

    /// Coarse category labels, at most [`Node::MAX_CATEGORIES`]
    pub categories: Vec<String>,
}

impl Node {
    /// Display cap on categories per node
    pub const MAX_CATEGORIES: usize = 3;

    /// Create a node, dropping categories equal to the word itself and
    /// truncating to the display cap
    pub fn new(id: Word, categories: Vec<String>) -> Self {
        let mut categories: Vec<String> = categories
            .into_iter()
            .filter(|c| !c.is_empty() && c != id.as_str())
            .collect();
        categories.truncate(Self::MAX_CATEGORIES);
        Node { id, categories }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}
