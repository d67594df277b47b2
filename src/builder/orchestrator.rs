//! The constellation build pipeline

use super::response::Constellation;
use crate::graph::{Link, Node, Word, WordOrigin, WordPool};
use crate::knowledge::KnowledgeSource;
use crate::semantics::{CategoryEngine, ConnectionEngine, ExpansionEngine};
use crate::tags::{TagEngine, TagTables};
use crate::translate::Translator;
use constella_lexicon::Lexicon;
use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Expansions per seed word when growing the pool
const SEED_EXPANSIONS: usize = 6;
/// Expansions per pool word when computing suggestions
const SUGGESTION_EXPANSIONS: usize = 10;
/// Suggestions kept per pool word
const SUGGESTIONS_PER_WORD: usize = 3;

/// Errors a build can surface to the caller
///
/// Everything else (unknown words, collaborator failures) is absorbed
/// inside the pipeline.
#[derive(Error, Debug, PartialEq)]
pub enum BuildError {
    #[error("no words provided")]
    EmptyInput,
}

pub type BuildResult<T> = Result<T, BuildError>;

/// Builds constellations from seed words
///
/// Holds the injected lexicon and tag tables plus the four engines; all of
/// it is read-only per build, so one builder serves concurrent requests.
#[derive(Clone)]
pub struct ConstellationBuilder {
    lexicon: Arc<Lexicon>,
    expansion: ExpansionEngine,
    categories: CategoryEngine,
    connections: ConnectionEngine,
    tags: TagEngine,
    translator: Option<Arc<dyn Translator>>,
    knowledge: Option<Arc<dyn KnowledgeSource>>,
}

impl ConstellationBuilder {
    pub fn new(lexicon: Arc<Lexicon>, tables: Arc<TagTables>) -> Self {
        ConstellationBuilder {
            expansion: ExpansionEngine::new(Arc::clone(&lexicon)),
            categories: CategoryEngine::new(Arc::clone(&lexicon)),
            connections: ConnectionEngine::new(Arc::clone(&lexicon)),
            tags: TagEngine::new(Arc::clone(&lexicon), tables),
            lexicon,
            translator: None,
            knowledge: None,
        }
    }

    /// Attach a translation collaborator for non-English seed words
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Attach a knowledge-graph collaborator enriching seed-node categories
    pub fn with_knowledge(mut self, knowledge: Arc<dyn KnowledgeSource>) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    /// Build a constellation from the caller's word list
    ///
    /// A pure function of the inputs plus the injected lexicon and tables:
    /// identical requests produce byte-identical responses.
    pub fn build(&self, input_words: &[String]) -> BuildResult<Constellation> {
        // Stage 1: seed intake
        let seeds: Vec<Word> = input_words
            .iter()
            .map(|w| Word::normalize(w))
            .filter(|w| !w.is_empty())
            .collect();
        if seeds.is_empty() {
            return Err(BuildError::EmptyInput);
        }

        let resolved_seeds: Vec<Word> = seeds.iter().map(|w| self.resolve_seed(w)).collect();
        let mut pool = WordPool::new();
        for word in &resolved_seeds {
            pool.insert_seed(word.clone());
        }

        // Stage 2: expansion, one bounded pass per seed; merge in seed
        // order so pool ordering stays deterministic
        let expansions: Vec<Vec<String>> = resolved_seeds
            .par_iter()
            .map(|w| self.expansion.expand(w.as_str(), SEED_EXPANSIONS))
            .collect();

        let mut links: Vec<Link> = Vec::new();
        for (seed, expanded) in resolved_seeds.iter().zip(&expansions) {
            for name in expanded {
                let word = Word::new(name.clone());
                if pool.insert_expanded(word.clone()) {
                    links.push(Link::seed(seed.clone(), word));
                }
            }
        }

        // Stage 3: suggestion pass over the whole pool; suggestions never
        // join the graph
        let pool_words: Vec<Word> = pool.words().cloned().collect();
        let raw_suggestions: Vec<Vec<String>> = pool_words
            .par_iter()
            .map(|w| self.expansion.expand(w.as_str(), SUGGESTION_EXPANSIONS))
            .collect();

        let mut suggestions: IndexMap<Word, Vec<String>> = IndexMap::new();
        for (word, candidates) in pool_words.iter().zip(raw_suggestions) {
            let kept: Vec<String> = candidates
                .into_iter()
                .filter(|c| !pool.contains_str(c))
                .take(SUGGESTIONS_PER_WORD)
                .collect();
            suggestions.insert(word.clone(), kept);
        }

        // Stage 4: node creation with category collection
        let categories_per_word: Vec<Vec<String>> = pool_words
            .par_iter()
            .map(|w| self.categories.categories_of(w.as_str()))
            .collect();

        let mut all_categories: Vec<String> = Vec::new();
        let mut nodes: Vec<Node> = Vec::new();
        for (word, categories) in pool_words.iter().zip(categories_per_word) {
            let mut categories: Vec<String> = categories
                .into_iter()
                .filter(|c| c != word.as_str())
                .collect();
            for category in &categories {
                if !all_categories.contains(category) {
                    all_categories.push(category.clone());
                }
            }
            if pool.is_seed(word) {
                if let Some(knowledge) = &self.knowledge {
                    categories.extend(knowledge.lookup(word.as_str()).categories);
                }
            }
            nodes.push(Node::new(word.clone(), categories));
        }

        // Stage 5: pairwise inference over the fixed pool ordering
        let pairs: Vec<(usize, usize)> = (0..pool_words.len())
            .flat_map(|i| (i + 1..pool_words.len()).map(move |j| (i, j)))
            .collect();
        let related: Vec<Link> = pairs
            .par_iter()
            .filter_map(|&(i, j)| {
                let (a, b) = (&pool_words[i], &pool_words[j]);
                self.connections
                    .connected(a.as_str(), b.as_str())
                    .then(|| Link::related(a.clone(), b.clone()))
            })
            .collect();
        links.extend(related);

        // Stage 6: dedup over canonical keys; sorting first makes the
        // parallel merge order irrelevant
        links.retain(|l| !l.is_self_loop());
        links.sort_unstable_by(|x, y| x.canonical_key().cmp(&y.canonical_key()));
        links.dedup_by(|x, y| x.canonical_key() == y.canonical_key());

        // Stage 7: isolation pruning; seeds stay, disconnected expansions go
        let mut degree: FxHashMap<&Word, usize> = FxHashMap::default();
        for link in &links {
            *degree.entry(&link.source).or_default() += 1;
            *degree.entry(&link.target).or_default() += 1;
        }
        let keep: FxHashSet<Word> = pool
            .iter()
            .filter(|(word, origin)| {
                *origin == WordOrigin::Seed || degree.get(word).copied().unwrap_or(0) > 0
            })
            .map(|(word, _)| word.clone())
            .collect();
        let dropped = pool.len() - keep.len();
        if dropped > 0 {
            debug!(dropped, "pruned isolated expansion words");
        }
        drop(degree);
        nodes.retain(|n| keep.contains(&n.id));
        links.retain(|l| keep.contains(&l.source) && keep.contains(&l.target));

        // Stage 8: tag derivation over the survivors
        let node_words: Vec<Word> = nodes.iter().map(|n| n.id.clone()).collect();
        let careers = self.tags.career_tags(&node_words, &all_categories, &seeds);
        let economy = self.tags.sector_tags(&seeds);
        let trends = self.tags.trend_tags(&seeds);

        info!(
            nodes = nodes.len(),
            links = links.len(),
            seeds = seeds.len(),
            "constellation built"
        );

        // Stage 9: response assembly
        Ok(Constellation {
            nodes,
            links,
            words: seeds,
            careers,
            economy,
            trends,
            suggestions,
        })
    }

    /// Resolve one seed word: known words pass straight through, unknown
    /// ones get one translation attempt when a translator is configured
    fn resolve_seed(&self, word: &Word) -> Word {
        if self.lexicon.contains(word.as_str()) {
            return word.clone();
        }
        if let Some(translator) = &self.translator {
            match translator.to_english(word.as_str()) {
                Some(translated) => {
                    let normalized = Word::normalize(&translated);
                    if !normalized.is_empty() {
                        debug!(from = word.as_str(), to = normalized.as_str(), "seed translated");
                        return normalized;
                    }
                }
                None => {
                    debug!(word = word.as_str(), "translation unavailable, passing through");
                }
            }
        }
        word.clone()
    }
}
