//! Tag generation: career, economic-sector and trend tags
//!
//! Tags are derived by matching mined domains and per-word context strings
//! against immutable keyword tables loaded once at startup.

pub mod engine;
pub mod tables;

pub use engine::TagEngine;
pub use tables::{KeywordTable, TagTableError, TagTables};
