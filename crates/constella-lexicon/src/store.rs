//! Immutable lexical store and dataset loading

use super::sense::{Sense, SenseId};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(RustEmbed)]
#[folder = "data/"]
struct Dataset;

const BUNDLED_FILE: &str = "lexicon.json";

/// Errors that can occur while loading a lexical dataset
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("bundled dataset {0} is missing from the build")]
    MissingDataset(String),

    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("word {word} references unknown sense {sense}")]
    DanglingWordSense { word: String, sense: SenseId },
}

pub type LexiconResult<T> = Result<T, LexiconError>;

/// On-disk shape of a dataset
#[derive(Deserialize)]
struct RawDataset {
    /// Sense key -> sense body (the body's `id` field is filled from the key)
    senses: HashMap<String, RawSense>,
    /// Word -> ranked sense keys, most common first
    words: HashMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct RawSense {
    lemmas: Vec<String>,
    category: String,
    definition: String,
    #[serde(default)]
    hypernyms: Vec<String>,
    #[serde(default)]
    hyponyms: Vec<String>,
    #[serde(default)]
    part_meronyms: Vec<String>,
    #[serde(default)]
    part_holonyms: Vec<String>,
}

/// Immutable in-memory lexical database
///
/// Lookup structure:
/// - words: word -> ranked Vec<SenseId> (most common sense first)
/// - senses: SenseId -> Sense
///
/// Relation targets that are not present in `senses` are tolerated: they
/// still participate in identity comparisons (shared-hypernym checks) but
/// resolve to nothing.
#[derive(Debug, Clone)]
pub struct Lexicon {
    senses: HashMap<SenseId, Sense>,
    words: HashMap<String, Vec<SenseId>>,
}

impl Lexicon {
    /// Load the dataset bundled with the crate
    pub fn bundled() -> LexiconResult<Self> {
        let file = Dataset::get(BUNDLED_FILE)
            .ok_or_else(|| LexiconError::MissingDataset(BUNDLED_FILE.to_string()))?;
        Self::from_json(&file.data)
    }

    /// Parse a dataset from raw JSON bytes
    pub fn from_json(bytes: &[u8]) -> LexiconResult<Self> {
        let raw: RawDataset = serde_json::from_slice(bytes)?;

        let mut senses = HashMap::with_capacity(raw.senses.len());
        for (key, body) in raw.senses {
            let id = SenseId::new(key);
            senses.insert(
                id.clone(),
                Sense {
                    id,
                    lemmas: body.lemmas,
                    category: body.category,
                    definition: body.definition,
                    hypernyms: body.hypernyms.into_iter().map(SenseId::new).collect(),
                    hyponyms: body.hyponyms.into_iter().map(SenseId::new).collect(),
                    part_meronyms: body.part_meronyms.into_iter().map(SenseId::new).collect(),
                    part_holonyms: body.part_holonyms.into_iter().map(SenseId::new).collect(),
                },
            );
        }

        let mut words = HashMap::with_capacity(raw.words.len());
        for (word, ids) in raw.words {
            let ids: Vec<SenseId> = ids.into_iter().map(SenseId::new).collect();
            // Word entries must point at real senses; relation targets may not.
            for id in &ids {
                if !senses.contains_key(id) {
                    return Err(LexiconError::DanglingWordSense {
                        word: word.clone(),
                        sense: id.clone(),
                    });
                }
            }
            words.insert(word, ids);
        }

        Ok(Lexicon { senses, words })
    }

    /// Ranked sense ids for a word, most common first; empty for unknown words
    pub fn senses_of(&self, word: &str) -> &[SenseId] {
        self.words.get(word).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Resolved senses for a word in rank order
    pub fn senses(&self, word: &str) -> impl Iterator<Item = &Sense> {
        self.senses_of(word).iter().filter_map(|id| self.sense(id))
    }

    /// Most common sense of a word
    pub fn first_sense(&self, word: &str) -> Option<&Sense> {
        self.senses_of(word).first().and_then(|id| self.sense(id))
    }

    /// Resolve a sense id; None for out-of-dataset relation targets
    pub fn sense(&self, id: &SenseId) -> Option<&Sense> {
        self.senses.get(id)
    }

    /// Whether the lexicon has any sense for this word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sense_count(&self) -> usize {
        self.senses.len()
    }
}

/// Programmatic construction, used by tests and fixtures
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    senses: HashMap<SenseId, Sense>,
    words: HashMap<String, Vec<SenseId>>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sense and index it under each of its lemmas
    ///
    /// Multi-word lemmas are indexed with underscores replaced by spaces,
    /// matching how the engine normalizes expanded words. Sense ranking per
    /// word follows insertion order.
    pub fn sense(mut self, sense: Sense) -> Self {
        for lemma in &sense.lemmas {
            self.words
                .entry(lemma.replace('_', " "))
                .or_default()
                .push(sense.id.clone());
        }
        self.senses.insert(sense.id.clone(), sense);
        self
    }

    pub fn build(self) -> Lexicon {
        Lexicon {
            senses: self.senses,
            words: self.words,
        }
    }
}
