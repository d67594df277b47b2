//! Optional knowledge-graph collaborator
//!
//! A ConceptNet-style lookup that can enrich seed-node categories. The
//! engine tolerates its total absence, and every failure mode (network
//! error, non-success status, malformed body, timeout) fails open to the
//! empty result; nothing here ever reaches the caller as an error.

use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Hard bound on a single lookup
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Edges examined per lookup response
const MAX_EDGES: usize = 10;

/// Relations worth keeping; everything else is noise for a mind map
const RELATION_ALLOWLIST: &[&str] = &["IsA", "PartOf", "UsedFor", "CapableOf", "RelatedTo"];

/// Result of one knowledge-graph lookup
#[derive(Debug, Clone, Default)]
pub struct KnowledgeResult {
    pub categories: Vec<String>,
    pub relations: Vec<KnowledgeRelation>,
}

/// One relation edge returned by the knowledge graph
#[derive(Debug, Clone)]
pub struct KnowledgeRelation {
    pub source: String,
    pub target: String,
    pub relation: String,
}

/// A knowledge-graph lookup source
pub trait KnowledgeSource: Send + Sync {
    /// Look up a word; must fail open to `KnowledgeResult::default()`
    fn lookup(&self, word: &str) -> KnowledgeResult;
}

/// In-memory source for tests and fixtures
#[derive(Debug, Clone, Default)]
pub struct StaticKnowledge {
    entries: HashMap<String, KnowledgeResult>,
}

impl StaticKnowledge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, word: impl Into<String>, result: KnowledgeResult) -> Self {
        self.entries.insert(word.into(), result);
        self
    }
}

impl KnowledgeSource for StaticKnowledge {
    fn lookup(&self, word: &str) -> KnowledgeResult {
        self.entries.get(word).cloned().unwrap_or_default()
    }
}

/// HTTP client for a ConceptNet-compatible API
#[derive(Debug, Clone)]
pub struct ConceptNetClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct EdgeList {
    #[serde(default)]
    edges: Vec<EdgeBody>,
}

#[derive(Deserialize)]
struct EdgeBody {
    rel: LabelBody,
    end: LabelBody,
}

#[derive(Deserialize)]
struct LabelBody {
    label: String,
}

impl ConceptNetClient {
    /// Build a client against a ConceptNet-compatible base URL
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        Ok(ConceptNetClient {
            client: reqwest::blocking::Client::builder()
                .timeout(LOOKUP_TIMEOUT)
                .build()?,
            base_url: base_url.into(),
        })
    }

    fn fetch(&self, word: &str) -> reqwest::Result<KnowledgeResult> {
        let url = format!("{}/c/en/{}", self.base_url.trim_end_matches('/'), word);
        let body: EdgeList = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;

        let source = clean_label(word);
        let mut result = KnowledgeResult::default();
        for edge in body.edges.into_iter().take(MAX_EDGES) {
            if !RELATION_ALLOWLIST.contains(&edge.rel.label.as_str()) {
                continue;
            }
            let target = clean_label(&edge.end.label);
            if target == source || !target.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            if !result.categories.contains(&target) {
                result.categories.push(target.clone());
            }
            result.relations.push(KnowledgeRelation {
                source: source.clone(),
                target,
                relation: edge.rel.label,
            });
        }
        Ok(result)
    }
}

impl KnowledgeSource for ConceptNetClient {
    fn lookup(&self, word: &str) -> KnowledgeResult {
        match self.fetch(word) {
            Ok(result) => {
                debug!(word, edges = result.relations.len(), "knowledge lookup");
                result
            }
            Err(error) => {
                warn!(word, %error, "knowledge lookup failed, continuing without it");
                KnowledgeResult::default()
            }
        }
    }
}

/// Normalize a concept label: lowercase, trimmed, leading article removed
fn clean_label(label: &str) -> String {
    let label = label.trim().to_lowercase();
    for article in ["a ", "an ", "the "] {
        if let Some(rest) = label.strip_prefix(article) {
            return rest.to_string();
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_label_strips_articles() {
        assert_eq!(clean_label("A Mammal"), "mammal");
        assert_eq!(clean_label("the farm"), "farm");
        assert_eq!(clean_label("  an animal "), "animal");
        assert_eq!(clean_label("milk"), "milk");
    }

    #[test]
    fn test_static_knowledge_defaults_to_empty() {
        let source = StaticKnowledge::new();
        let result = source.lookup("cow");
        assert!(result.categories.is_empty());
        assert!(result.relations.is_empty());
    }

    #[test]
    fn test_static_knowledge_returns_entry() {
        let source = StaticKnowledge::new().with_entry(
            "cow",
            KnowledgeResult {
                categories: vec!["mammal".to_string()],
                relations: vec![],
            },
        );
        assert_eq!(source.lookup("cow").categories, vec!["mammal"]);
    }
}
