//! Constellation graph data model
//!
//! This module implements the node/link model the engine produces:
//! - Normalized words as node identities
//! - A word pool tracking how each word entered the graph (seed vs expanded)
//! - Directed seed links and undirected related links with set semantics
//!
//! Everything here is a per-request value; nothing outlives one build.

pub mod link;
pub mod node;
pub mod pool;
pub mod types;

// Re-export main types
pub use link::Link;
pub use node::Node;
pub use pool::WordPool;
pub use types::{Relation, Word, WordOrigin};
