//! Tag generation engine

use super::tables::TagTables;
use crate::graph::Word;
use crate::semantics::CategoryEngine;
use constella_lexicon::Lexicon;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Caps on each returned tag list
const MAX_CAREER_TAGS: usize = 15;
const MAX_SECTOR_TAGS: usize = 8;
const MAX_TREND_TAGS: usize = 6;

/// Job titles sampled per matched field
const TITLES_PER_FIELD: usize = 3;

/// Hypernym levels and lemmas folded into a word's context string
const CONTEXT_HYPERNYM_DEPTH: usize = 3;
const CONTEXT_LEMMAS: usize = 4;

/// Fallback trends so the front end never renders an empty list
const TREND_FALLBACK: &[&str] = &["Artificial Intelligence & ML", "Digital Transformation"];

/// Maps mined domains and per-word contexts to career, sector and trend
/// tags
///
/// Career sampling is the one place pseudo-randomness enters the engine.
/// The RNG is seeded from a hash of the sorted, deduplicated seed words,
/// so identical requests produce byte-identical tags no matter how often
/// or in which seed order they run.
#[derive(Debug, Clone)]
pub struct TagEngine {
    lexicon: Arc<Lexicon>,
    categories: CategoryEngine,
    tables: Arc<TagTables>,
}

impl TagEngine {
    pub fn new(lexicon: Arc<Lexicon>, tables: Arc<TagTables>) -> Self {
        TagEngine {
            categories: CategoryEngine::new(Arc::clone(&lexicon)),
            lexicon,
            tables,
        }
    }

    /// Career tags for a finished constellation
    ///
    /// Domains are mined from every surviving node word and every category
    /// collected during assembly, matched against job-field keys, and up to
    /// [`TITLES_PER_FIELD`] titles are sampled per matched field.
    pub fn career_tags(
        &self,
        node_words: &[Word],
        collected_categories: &[String],
        seeds: &[Word],
    ) -> Vec<String> {
        let mut domains: Vec<String> = Vec::new();
        for word in node_words {
            for domain in self
                .categories
                .domains_of(word.as_str(), &self.tables.domain_keywords)
            {
                push_unique(&mut domains, domain);
            }
        }
        for category in collected_categories {
            for domain in self
                .categories
                .domains_of(category, &self.tables.domain_keywords)
            {
                push_unique(&mut domains, domain);
            }
        }

        // Walk fields in table order, not domain-discovery order: the RNG
        // consumption sequence must not depend on seed ordering
        let mut matched_fields: Vec<&str> = Vec::new();
        for field in self.tables.job_fields.keys() {
            if domains.iter().any(|domain| self.field_matches(domain, field)) {
                matched_fields.push(field.as_str());
            }
        }

        let mut rng = StdRng::seed_from_u64(request_seed(seeds));
        let mut titles: Vec<String> = Vec::new();
        for field in matched_fields {
            if let Some(jobs) = self.tables.job_fields.get(field) {
                let count = TITLES_PER_FIELD.min(jobs.len());
                for title in jobs.choose_multiple(&mut rng, count) {
                    push_unique(&mut titles, title.clone());
                }
            }
        }

        titles.sort_unstable();
        titles.truncate(MAX_CAREER_TAGS);
        titles
    }

    /// Economic-sector tags for the seed words
    pub fn sector_tags(&self, seeds: &[Word]) -> Vec<String> {
        let mut sectors = self.match_context_table(seeds, &self.tables.sectors, false);
        sectors.sort_unstable();
        sectors.truncate(MAX_SECTOR_TAGS);
        sectors
    }

    /// Trend tags for the seed words, with a fixed fallback when nothing
    /// matches
    pub fn trend_tags(&self, seeds: &[Word]) -> Vec<String> {
        let mut trends = self.match_context_table(seeds, &self.tables.trends, true);
        if trends.is_empty() {
            trends = TREND_FALLBACK.iter().map(|t| t.to_string()).collect();
        }
        trends.sort_unstable();
        trends.truncate(MAX_TREND_TAGS);
        trends
    }

    /// Match every seed word's context string against one indicator table
    fn match_context_table(
        &self,
        seeds: &[Word],
        table: &super::tables::KeywordTable,
        include_lemmas: bool,
    ) -> Vec<String> {
        let mut matched: Vec<String> = Vec::new();
        for word in seeds {
            let Some(context) = self.context_of(word.as_str(), include_lemmas) else {
                continue;
            };
            for (name, indicators) in table {
                if indicators.iter().any(|kw| context.contains(kw.as_str())) {
                    push_unique(&mut matched, name.clone());
                }
            }
        }
        matched
    }

    /// Context string for a word: the word, its most common sense's
    /// definition, the head lemmas along the hypernym walk, and optionally
    /// the sense's own lemmas
    fn context_of(&self, word: &str, include_lemmas: bool) -> Option<String> {
        let first = self.lexicon.first_sense(word)?;

        let mut context = String::with_capacity(64 + first.definition.len());
        context.push_str(word);
        context.push(' ');
        context.push_str(&first.definition);

        let mut current = first;
        for _ in 0..CONTEXT_HYPERNYM_DEPTH {
            let Some(parent) = current
                .hypernyms
                .first()
                .and_then(|id| self.lexicon.sense(id))
            else {
                break;
            };
            if let Some(lemma) = parent.head_lemma() {
                context.push(' ');
                context.push_str(&lemma.replace('_', " "));
            }
            current = parent;
        }

        if include_lemmas {
            for lemma in first.lemmas.iter().take(CONTEXT_LEMMAS) {
                context.push(' ');
                context.push_str(&lemma.replace('_', " "));
            }
        }

        Some(context)
    }

    /// A domain matches a job field by exact name, substring in either
    /// direction, or a shared immediate hypernym between their senses
    fn field_matches(&self, domain: &str, field: &str) -> bool {
        if domain == field || domain.contains(field) || field.contains(domain) {
            return true;
        }
        let (Some(domain_sense), Some(field_sense)) =
            (self.lexicon.first_sense(domain), self.lexicon.first_sense(field))
        else {
            return false;
        };
        domain_sense
            .hypernyms
            .iter()
            .any(|h| field_sense.hypernyms.contains(h))
    }
}

/// Stable request seed: SHA-256 over the sorted, deduplicated seed words
fn request_seed(seeds: &[Word]) -> u64 {
    let mut sorted: Vec<&str> = seeds.iter().map(Word::as_str).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut hasher = Sha256::new();
    for word in sorted {
        hasher.update(word.as_bytes());
        hasher.update([0x1f]);
    }
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

fn push_unique(list: &mut Vec<String>, value: impl Into<String>) {
    let value = value.into();
    if !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constella_lexicon::{LexiconBuilder, Sense, SenseId};

    fn sense(id: &str, lemma: &str, category: &str, definition: &str) -> Sense {
        Sense {
            id: SenseId::new(id),
            lemmas: vec![lemma.to_string()],
            category: category.to_string(),
            definition: definition.to_string(),
            hypernyms: vec![],
            hyponyms: vec![],
            part_meronyms: vec![],
            part_holonyms: vec![],
        }
    }

    fn farm_engine() -> TagEngine {
        let mut cow = sense("cow.n.01", "cow", "noun.animal", "cattle kept for its milk");
        cow.hypernyms = vec![SenseId::new("cattle.n.01")];
        let mut cattle = sense("cattle.n.01", "cattle", "noun.animal", "bovine livestock");
        cattle.hypernyms = vec![SenseId::new("livestock.n.01")];
        let livestock = sense("livestock.n.01", "livestock", "noun.animal", "farm animals");
        let milk = sense("milk.n.01", "milk", "noun.food", "a white nutritious drink");

        let lexicon = Arc::new(
            LexiconBuilder::new()
                .sense(cow)
                .sense(cattle)
                .sense(livestock)
                .sense(milk)
                .build(),
        );
        TagEngine::new(lexicon, Arc::new(TagTables::bundled().unwrap()))
    }

    fn words(names: &[&str]) -> Vec<Word> {
        names.iter().map(|n| Word::new(*n)).collect()
    }

    #[test]
    fn test_career_tags_deterministic_and_capped() {
        let engine = farm_engine();
        let seeds = words(&["cow", "milk"]);
        let nodes = words(&["cow", "milk", "cattle"]);

        let first = engine.career_tags(&nodes, &[], &seeds);
        let second = engine.career_tags(&nodes, &[], &seeds);
        assert_eq!(first, second);
        assert!(first.len() <= 15);
        assert!(!first.is_empty());

        let mut sorted = first.clone();
        sorted.sort_unstable();
        assert_eq!(first, sorted);
    }

    #[test]
    fn test_career_seed_ignores_input_order_and_duplicates() {
        let engine = farm_engine();
        let nodes = words(&["cow", "milk"]);

        let forward = engine.career_tags(&nodes, &[], &words(&["cow", "milk"]));
        let backward = engine.career_tags(&nodes, &[], &words(&["milk", "cow"]));
        let repeated = engine.career_tags(&nodes, &[], &words(&["milk", "cow", "cow"]));
        assert_eq!(forward, backward);
        assert_eq!(forward, repeated);
    }

    #[test]
    fn test_sector_tags_from_context() {
        let engine = farm_engine();
        let sectors = engine.sector_tags(&words(&["cow"]));
        // hypernym walk surfaces "livestock", an Agriculture & Food indicator
        assert!(sectors.contains(&"Agriculture & Food".to_string()));
        assert!(sectors.len() <= 8);
    }

    #[test]
    fn test_trend_tags_fall_back_when_empty() {
        let engine = farm_engine();
        let trends = engine.trend_tags(&words(&["cow"]));
        assert_eq!(
            trends,
            vec![
                "Artificial Intelligence & ML".to_string(),
                "Digital Transformation".to_string()
            ]
        );
    }

    #[test]
    fn test_trend_tags_unknown_word_uses_fallback() {
        let engine = farm_engine();
        let trends = engine.trend_tags(&words(&["xyzzyplugh"]));
        assert_eq!(trends.len(), 2);
    }

    #[test]
    fn test_request_seed_is_order_insensitive() {
        let a = request_seed(&words(&["bank", "river"]));
        let b = request_seed(&words(&["river", "bank"]));
        let c = request_seed(&words(&["river", "bank", "bank"]));
        assert_eq!(a, b);
        assert_eq!(a, c);

        let other = request_seed(&words(&["bank", "rivers"]));
        assert_ne!(a, other);
    }

    #[test]
    fn test_request_seed_separator_prevents_collisions() {
        let joined = request_seed(&words(&["ab", "c"]));
        let split = request_seed(&words(&["a", "bc"]));
        assert_ne!(joined, split);
    }
}
