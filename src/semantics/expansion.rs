//! Word expansion: bounded related-word discovery

use super::text::Tokenizer;
use constella_lexicon::{Lexicon, Sense, SenseId};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Senses considered per word (the most common meanings)
const SENSES_PER_WORD: usize = 2;
/// Synonym lemmas taken from each sense
const SYNONYMS_PER_SENSE: usize = 4;
/// Hypernyms considered per sense, and lemmas taken from each
const HYPERNYMS_PER_SENSE: usize = 3;
const HYPERNYM_LEMMAS: usize = 2;
/// Hyponyms considered per sense, and lemmas taken from each
const HYPONYMS_PER_SENSE: usize = 3;
const HYPONYM_LEMMAS: usize = 2;
/// Part-meronyms and part-holonyms considered per sense, one lemma each
const PART_RELATIONS_PER_SENSE: usize = 3;
const PART_RELATION_LEMMAS: usize = 1;
/// Bridge words mined from each sense's definition
const BRIDGES_PER_SENSE: usize = 4;
/// Minimum length a bridge token must exceed
const BRIDGE_MIN_LEN: usize = 3;
/// Minimum length of any expansion entry
const ENTRY_MIN_LEN: usize = 3;

/// Produces a bounded, alphabetically sorted set of words related to an
/// input word
///
/// The output is a pure function of (word, lexicon, max_expansions): all
/// candidate collection goes through a hash set, but the result is sorted
/// before truncation so set iteration order never shows.
#[derive(Debug, Clone)]
pub struct ExpansionEngine {
    lexicon: Arc<Lexicon>,
    tokenizer: Tokenizer,
}

impl ExpansionEngine {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        ExpansionEngine {
            lexicon,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Expand a word into at most `max_expansions` related words
    ///
    /// Never contains the word itself or entries shorter than
    /// [`ENTRY_MIN_LEN`] characters; empty when the word is unknown.
    pub fn expand(&self, word: &str, max_expansions: usize) -> Vec<String> {
        let mut candidates: FxHashSet<String> = FxHashSet::default();

        for sense_id in self.lexicon.senses_of(word).iter().take(SENSES_PER_WORD) {
            let Some(sense) = self.lexicon.sense(sense_id) else {
                continue;
            };

            // Synonyms from the sense's own lemmas
            for lemma in sense.lemmas.iter().take(SYNONYMS_PER_SENSE) {
                self.add_candidate(lemma, word, &mut candidates);
            }

            // Taxonomic neighbors: generalizations, specializations, parts
            self.collect_relation(&sense.hypernyms, HYPERNYMS_PER_SENSE, HYPERNYM_LEMMAS, word, &mut candidates);
            self.collect_relation(&sense.hyponyms, HYPONYMS_PER_SENSE, HYPONYM_LEMMAS, word, &mut candidates);
            self.collect_relation(&sense.part_meronyms, PART_RELATIONS_PER_SENSE, PART_RELATION_LEMMAS, word, &mut candidates);
            self.collect_relation(&sense.part_holonyms, PART_RELATIONS_PER_SENSE, PART_RELATION_LEMMAS, word, &mut candidates);

            self.collect_bridges(sense, word, &mut candidates);
        }

        let mut expanded: Vec<String> = candidates.into_iter().collect();
        expanded.sort_unstable();
        expanded.truncate(max_expansions);
        expanded
    }

    /// Mine a sense's definition for bridge words: tokens that are not stop
    /// words, are long enough, and resolve in the lexicon themselves
    fn collect_bridges(&self, sense: &Sense, origin: &str, candidates: &mut FxHashSet<String>) {
        let mut added = 0;
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for token in self.tokenizer.tokens(&sense.definition) {
            if added == BRIDGES_PER_SENSE {
                break;
            }
            if Tokenizer::is_stop_word(token)
                || token.len() <= BRIDGE_MIN_LEN
                || token == origin
                || !seen.insert(token)
                || !self.lexicon.contains(token)
            {
                continue;
            }
            candidates.insert(token.to_string());
            added += 1;
        }
    }

    fn collect_relation(
        &self,
        related: &[SenseId],
        max_senses: usize,
        max_lemmas: usize,
        origin: &str,
        candidates: &mut FxHashSet<String>,
    ) {
        for id in related.iter().take(max_senses) {
            if let Some(sense) = self.lexicon.sense(id) {
                for lemma in sense.lemmas.iter().take(max_lemmas) {
                    self.add_candidate(lemma, origin, candidates);
                }
            }
        }
    }

    /// Normalize a lemma (underscores to spaces, lowercase) and keep it
    /// unless it is the origin word or too short
    fn add_candidate(&self, lemma: &str, origin: &str, candidates: &mut FxHashSet<String>) {
        let name = lemma.replace('_', " ").to_lowercase();
        if name != origin && name.len() >= ENTRY_MIN_LEN {
            candidates.insert(name);
        }
    }
}
