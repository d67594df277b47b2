//! Immutable keyword/indicator tables
//!
//! Four tables drive tag generation: job fields (domain -> job titles),
//! economic sectors and trend topics (name -> indicator keywords), and
//! domain keywords (domain -> indicator keywords, used by domain mining).
//! All are JSON assets embedded in the binary, parsed once at startup and
//! read-only from then on, so concurrent requests share them freely.

use indexmap::IndexMap;
use rust_embed::RustEmbed;
use thiserror::Error;

#[derive(RustEmbed)]
#[folder = "src/tags/data/"]
struct Assets;

/// Name -> ordered keyword (or job title) list, preserving file order
pub type KeywordTable = IndexMap<String, Vec<String>>;

/// Errors that can occur while loading tag tables
#[derive(Error, Debug)]
pub enum TagTableError {
    #[error("embedded table {0} is missing from the build")]
    MissingAsset(String),

    #[error("table {name} is not valid JSON: {source}")]
    Parse {
        name: String,
        source: serde_json::Error,
    },
}

pub type TagTableResult<T> = Result<T, TagTableError>;

/// The loaded tag tables
#[derive(Debug, Clone)]
pub struct TagTables {
    /// Semantic domain -> job titles for that field
    pub job_fields: KeywordTable,
    /// Economic sector -> indicator keywords
    pub sectors: KeywordTable,
    /// Trend topic -> indicator keywords
    pub trends: KeywordTable,
    /// Semantic domain -> indicator keywords for definition mining
    pub domain_keywords: KeywordTable,
}

impl TagTables {
    /// Load the tables bundled with the crate
    pub fn bundled() -> TagTableResult<Self> {
        Ok(TagTables {
            job_fields: load_table("job_fields.json")?,
            sectors: load_table("economic_sectors.json")?,
            trends: load_table("trend_topics.json")?,
            domain_keywords: load_table("domain_keywords.json")?,
        })
    }
}

fn load_table(name: &str) -> TagTableResult<KeywordTable> {
    let file = Assets::get(name).ok_or_else(|| TagTableError::MissingAsset(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|source| TagTableError::Parse {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_tables_load() {
        let tables = TagTables::bundled().unwrap();
        assert!(tables.job_fields.contains_key("animal"));
        assert!(tables.job_fields.contains_key("music"));
        assert!(tables.sectors.contains_key("Agriculture & Food"));
        assert!(tables.trends.contains_key("Artificial Intelligence & ML"));
        assert!(tables.domain_keywords.contains_key("animal"));
    }

    #[test]
    fn test_tables_preserve_file_order() {
        let tables = TagTables::bundled().unwrap();
        let first = tables.job_fields.keys().next().unwrap();
        assert_eq!(first, "animal");
    }

    #[test]
    fn test_job_fields_are_nonempty() {
        let tables = TagTables::bundled().unwrap();
        for (field, titles) in &tables.job_fields {
            assert!(!titles.is_empty(), "field {field} has no job titles");
        }
    }
}
