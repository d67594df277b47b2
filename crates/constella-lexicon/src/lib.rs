//! In-memory WordNet-style lexical database
//!
//! Provides the lexical lookup layer for the Constella engine: every word
//! maps to a ranked list of senses, and every sense carries its lemmas,
//! definition, lexical category and hypernym/hyponym/meronym/holonym
//! relations.
//!
//! The store is immutable after construction and safe to share across
//! threads. A curated dataset ships with the crate and is loaded with
//! [`Lexicon::bundled`]; tests and callers with their own data use
//! [`LexiconBuilder`].
//!
//! ## Example Usage
//!
//! ```rust
//! use constella_lexicon::Lexicon;
//!
//! let lexicon = Lexicon::bundled().unwrap();
//!
//! // Ranked senses, most common first
//! let senses = lexicon.senses_of("cow");
//! assert!(!senses.is_empty());
//!
//! let sense = lexicon.sense(&senses[0]).unwrap();
//! assert_eq!(sense.coarse_category(), "animal");
//!
//! // Unknown words resolve to an empty slice, never an error
//! assert!(lexicon.senses_of("xyzzyplugh").is_empty());
//! ```

pub mod sense;
pub mod store;

pub use sense::{Sense, SenseId};
pub use store::{Lexicon, LexiconBuilder, LexiconError, LexiconResult};
