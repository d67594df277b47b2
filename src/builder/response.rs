//! Response shape of one constellation build

use crate::graph::{Link, Node, Word};
use indexmap::IndexMap;
use serde::Serialize;

/// The finished constellation handed back to the caller
///
/// Everything is plain data, ready for JSON serialization toward the
/// mind-map front end. `suggestions` maps every pool word to up to three
/// further expansion candidates that are not part of the graph.
#[derive(Debug, Clone, Serialize)]
pub struct Constellation {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    /// The normalized seed words, in request order
    pub words: Vec<Word>,
    pub careers: Vec<String>,
    pub economy: Vec<String>,
    pub trends: Vec<String>,
    pub suggestions: IndexMap<Word, Vec<String>>,
}

impl Constellation {
    /// Node lookup by word, mostly for tests and handlers
    pub fn node(&self, word: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id.as_str() == word)
    }

    /// Degree of a word over the final link set
    pub fn degree(&self, word: &str) -> usize {
        let word = Word::new(word);
        self.links.iter().filter(|l| l.touches(&word)).count()
    }
}
