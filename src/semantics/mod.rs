//! Semantic engines over the lexical database
//!
//! Three engines, each a pure function of its inputs and the injected
//! lexicon:
//! - [`ExpansionEngine`]: bounded related-word discovery per word
//! - [`CategoryEngine`]: coarse category and domain labeling
//! - [`ConnectionEngine`]: pairwise link inference over an ordered rule list

pub mod category;
pub mod connect;
pub mod expansion;
pub mod text;

pub use category::CategoryEngine;
pub use connect::ConnectionEngine;
pub use expansion::ExpansionEngine;
pub use text::Tokenizer;
