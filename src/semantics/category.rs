//! Categorization: coarse category and domain labeling

use crate::tags::tables::KeywordTable;
use constella_lexicon::Lexicon;
use std::sync::Arc;

/// Hypernym levels walked when mining domains
const DOMAIN_HYPERNYM_DEPTH: usize = 3;

/// Labels words with coarse lexical categories and broader topical domains
///
/// Categories come straight from sense lexical-category strings
/// ("noun.animal" -> "animal"). Domains additionally mine the hypernym
/// chain and the definition text against the domain keyword table, so a
/// word like "milk" can surface both "food" and "animal".
#[derive(Debug, Clone)]
pub struct CategoryEngine {
    lexicon: Arc<Lexicon>,
}

impl CategoryEngine {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        CategoryEngine { lexicon }
    }

    /// Coarse categories across all senses, deduplicated preserving the
    /// sense ranking order; empty for unknown words
    pub fn categories_of(&self, word: &str) -> Vec<String> {
        let mut categories = Vec::new();
        for sense in self.lexicon.senses(word) {
            push_unique(&mut categories, sense.coarse_category());
        }
        categories
    }

    /// Coarse category of the most common sense only
    pub fn coarse_category(&self, word: &str) -> Option<String> {
        self.lexicon
            .first_sense(word)
            .map(|sense| sense.coarse_category().to_string())
    }

    /// Topical domains of a word, mined from the most common sense
    ///
    /// Collects the coarse category, the categories along up to
    /// [`DOMAIN_HYPERNYM_DEPTH`] hypernym levels (first hypernym per
    /// level), and every domain whose indicator keywords hit the
    /// definition text. Empty for unknown words.
    pub fn domains_of(&self, word: &str, domain_keywords: &KeywordTable) -> Vec<String> {
        let Some(first) = self.lexicon.first_sense(word) else {
            return Vec::new();
        };

        let mut domains = Vec::new();
        push_unique(&mut domains, first.coarse_category());

        let mut current = first;
        for _ in 0..DOMAIN_HYPERNYM_DEPTH {
            let Some(parent) = current
                .hypernyms
                .first()
                .and_then(|id| self.lexicon.sense(id))
            else {
                break;
            };
            push_unique(&mut domains, parent.coarse_category());
            current = parent;
        }

        for (domain, keywords) in domain_keywords {
            if keywords.iter().any(|kw| first.definition.contains(kw)) {
                push_unique(&mut domains, domain);
            }
        }

        domains
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}
