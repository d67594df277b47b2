//! Constella: semantic constellation engine
//!
//! Turns a short list of seed words into a labeled graph ("constellation")
//! of related concepts plus three derived tag sets (career fields, economic
//! sectors, trending topics) for a mind-mapping front end.
//!
//! # Architecture
//!
//! The core is a staged, deterministic pipeline over an injected in-memory
//! lexical database ([`constella_lexicon::Lexicon`]):
//!
//! - [`semantics::ExpansionEngine`] grows the word pool from each seed
//! - [`semantics::CategoryEngine`] labels words with categories and domains
//! - [`semantics::ConnectionEngine`] infers pairwise links via an ordered
//!   rule cascade
//! - [`tags::TagEngine`] derives career/sector/trend tags from keyword
//!   tables
//! - [`builder::ConstellationBuilder`] orchestrates the stages and
//!   assembles the response
//!
//! Translation and knowledge-graph lookups are optional collaborators; the
//! engine runs identically without them. The HTTP layer in [`http`] is a
//! thin wrapper over [`builder::ConstellationBuilder::build`].
//!
//! ## Example Usage
//!
//! ```rust
//! use constella::builder::ConstellationBuilder;
//! use constella::tags::TagTables;
//! use constella_lexicon::Lexicon;
//! use std::sync::Arc;
//!
//! let lexicon = Arc::new(Lexicon::bundled().unwrap());
//! let tables = Arc::new(TagTables::bundled().unwrap());
//! let builder = ConstellationBuilder::new(lexicon, tables);
//!
//! let constellation = builder
//!     .build(&["cow".to_string(), "milk".to_string()])
//!     .unwrap();
//!
//! // every seed word is a node, connected or not
//! assert!(constellation.node("cow").is_some());
//! assert!(constellation.node("milk").is_some());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod graph;
pub mod http;
pub mod knowledge;
pub mod semantics;
pub mod tags;
pub mod translate;

// Re-export main types for convenience
pub use builder::{BuildError, BuildResult, Constellation, ConstellationBuilder};
pub use graph::{Link, Node, Relation, Word, WordOrigin, WordPool};
pub use knowledge::{ConceptNetClient, KnowledgeResult, KnowledgeSource, StaticKnowledge};
pub use semantics::{CategoryEngine, ConnectionEngine, ExpansionEngine};
pub use tags::{TagEngine, TagTables};
pub use translate::{Passthrough, Translator};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
