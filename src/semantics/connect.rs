//! Connection inference: an ordered rule cascade over word pairs
//!
//! The rule ordering is part of the contract: cheap surface checks run
//! before hypernym-set comparisons, and evaluation short-circuits on the
//! first rule that fires. Each rule is an independent predicate so it can
//! be tested on its own.

use super::text::Tokenizer;
use constella_lexicon::{Lexicon, Sense, SenseId};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::trace;

/// Categories too generic to justify a same-category connection
const BROAD_CATEGORIES: &[&str] = &["artifact", "object", "whole", "part", "group"];

/// Surface markers for the hand-authored dairy bridge (rule 1). Animals
/// produce milk; the lexical hierarchy alone does not surface that.
const DAIRY_MARKERS: &[&str] = &["milk", "dairy"];

/// Keywords that bridge two words when present on both sides (rule 5)
const BRIDGE_KEYWORDS: &[&str] = &["dairy", "farm", "livestock", "milk", "drink", "animal"];

/// Categories allowed to cross-connect through definition mentions (rule 6)
const CROSS_CONNECT_CATEGORIES: &[&str] = &[
    "animal",
    "plant",
    "food",
    "substance",
    "material",
    "living thing",
    "body",
];

/// Everything a rule may look at for one word pair
struct RuleCtx<'a> {
    lexicon: &'a Lexicon,
    a: &'a str,
    b: &'a str,
    sense_a: &'a Sense,
    sense_b: &'a Sense,
    cat_a: &'a str,
    cat_b: &'a str,
    def_tokens_a: FxHashSet<String>,
    def_tokens_b: FxHashSet<String>,
}

/// The cascade, in evaluation order
const RULES: &[(&str, fn(&RuleCtx) -> bool)] = &[
    ("dairy-bridge", rule_dairy_bridge),
    ("surface-substring", rule_surface_substring),
    ("same-category", rule_same_category),
    ("definition-containment", rule_definition_containment),
    ("shared-bridge-keyword", rule_shared_bridge_keyword),
    ("cross-category-bridge", rule_cross_category_bridge),
    ("shared-hypernym", rule_shared_hypernym),
    ("shared-grandparent", rule_shared_grandparent),
];

/// Decides whether two words should be linked, using only their most
/// common senses
#[derive(Debug, Clone)]
pub struct ConnectionEngine {
    lexicon: Arc<Lexicon>,
    tokenizer: Tokenizer,
}

impl ConnectionEngine {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        ConnectionEngine {
            lexicon,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Whether the two words connect under any rule
    pub fn connected(&self, a: &str, b: &str) -> bool {
        self.connected_by(a, b).is_some()
    }

    /// The name of the first rule that connects the pair, if any
    ///
    /// Returns None when either word is unknown to the lexicon.
    pub fn connected_by(&self, a: &str, b: &str) -> Option<&'static str> {
        let sense_a = self.lexicon.first_sense(a)?;
        let sense_b = self.lexicon.first_sense(b)?;

        let ctx = RuleCtx {
            lexicon: &self.lexicon,
            a,
            b,
            sense_a,
            sense_b,
            cat_a: sense_a.coarse_category(),
            cat_b: sense_b.coarse_category(),
            def_tokens_a: self.tokenizer.token_set(&sense_a.definition),
            def_tokens_b: self.tokenizer.token_set(&sense_b.definition),
        };

        for (name, rule) in RULES {
            if rule(&ctx) {
                trace!(rule = *name, word_a = a, word_b = b, "connection inferred");
                return Some(name);
            }
        }
        None
    }
}

fn is_broad(category: &str) -> bool {
    BROAD_CATEGORIES.contains(&category)
}

/// Rule 1: an animal on one side, a dairy term on the other
fn rule_dairy_bridge(ctx: &RuleCtx) -> bool {
    let has_dairy_marker = |word: &str| DAIRY_MARKERS.iter().any(|m| word.contains(m));
    (ctx.cat_a == "animal" && has_dairy_marker(ctx.b))
        || (ctx.cat_b == "animal" && has_dairy_marker(ctx.a))
}

/// Rule 2: one surface form contains the other
fn rule_surface_substring(ctx: &RuleCtx) -> bool {
    ctx.a.contains(ctx.b) || ctx.b.contains(ctx.a)
}

/// Rule 3: same coarse category, excluding overly broad ones
fn rule_same_category(ctx: &RuleCtx) -> bool {
    ctx.cat_a == ctx.cat_b && !is_broad(ctx.cat_a)
}

/// Rule 4: one word appears verbatim in the other's definition
fn rule_definition_containment(ctx: &RuleCtx) -> bool {
    contains_form(&ctx.sense_a.definition, ctx.b) || contains_form(&ctx.sense_b.definition, ctx.a)
}

fn contains_form(definition: &str, word: &str) -> bool {
    definition.contains(word) || definition.contains(&word.replace(' ', "_"))
}

/// Rule 5: a bridge keyword present on both sides, in the definition
/// tokens or the surface form
fn rule_shared_bridge_keyword(ctx: &RuleCtx) -> bool {
    BRIDGE_KEYWORDS.iter().any(|kw| {
        (ctx.def_tokens_a.contains(*kw) || ctx.a.contains(kw))
            && (ctx.def_tokens_b.contains(*kw) || ctx.b.contains(kw))
    })
}

/// Rule 6: a category token from one side appears in the other side's
/// definition, with both categories inside the allowed cross-connect set
fn rule_cross_category_bridge(ctx: &RuleCtx) -> bool {
    let allowed = |cat: &str| CROSS_CONNECT_CATEGORIES.contains(&cat);
    if !allowed(ctx.cat_a) || !allowed(ctx.cat_b) {
        return false;
    }

    let from_a = candidate_category_tokens(ctx.lexicon, ctx.cat_a, ctx.sense_a);
    let from_b = candidate_category_tokens(ctx.lexicon, ctx.cat_b, ctx.sense_b);

    from_a
        .iter()
        .any(|token| ctx.sense_b.definition.contains(token.as_str()))
        || from_b
            .iter()
            .any(|token| ctx.sense_a.definition.contains(token.as_str()))
}

/// One side's category tokens: its coarse category plus the head lemmas of
/// its immediate hypernyms, broad categories excluded
fn candidate_category_tokens(lexicon: &Lexicon, category: &str, sense: &Sense) -> Vec<String> {
    let mut tokens = Vec::new();
    if !is_broad(category) {
        tokens.push(category.to_string());
    }
    for parent in sense.hypernyms.iter().filter_map(|id| lexicon.sense(id)) {
        if let Some(lemma) = parent.head_lemma() {
            let name = lemma.replace('_', " ");
            if !is_broad(&name) {
                tokens.push(name);
            }
        }
    }
    tokens
}

/// Rule 7: the senses share an immediate hypernym
fn rule_shared_hypernym(ctx: &RuleCtx) -> bool {
    ctx.sense_a
        .hypernyms
        .iter()
        .any(|h| ctx.sense_b.hypernyms.contains(h))
}

/// Rule 8: the senses share a second-level hypernym
fn rule_shared_grandparent(ctx: &RuleCtx) -> bool {
    let grand_a = grandparents(ctx.lexicon, ctx.sense_a);
    if grand_a.is_empty() {
        return false;
    }
    grandparents(ctx.lexicon, ctx.sense_b)
        .iter()
        .any(|id| grand_a.contains(id))
}

fn grandparents<'a>(lexicon: &'a Lexicon, sense: &'a Sense) -> FxHashSet<&'a SenseId> {
    sense
        .hypernyms
        .iter()
        .filter_map(|id| lexicon.sense(id))
        .flat_map(|parent| parent.hypernyms.iter())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use constella_lexicon::LexiconBuilder;

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

    fn engine(lexicon: Lexicon) -> ConnectionEngine {
        ConnectionEngine::new(Arc::new(lexicon))
    }

    #[test]
    fn test_unknown_word_never_connects() {
        let engine = engine(
            LexiconBuilder::new()
                .sense(sense("cow.n.01", "cow", "noun.animal", "female cattle"))
                .build(),
        );
        assert!(!engine.connected("cow", "xyzzyplugh"));
        assert!(!engine.connected("xyzzyplugh", "cow"));
    }

    #[test]
    fn test_rule_dairy_bridge() {
        let engine = engine(
            LexiconBuilder::new()
                .sense(sense("cow.n.01", "cow", "noun.animal", "bovine kept on farms"))
                .sense(sense("milk.n.01", "milk", "noun.food", "a white liquid"))
                .build(),
        );
        assert_eq!(engine.connected_by("cow", "milk"), Some("dairy-bridge"));
        assert_eq!(engine.connected_by("milk", "cow"), Some("dairy-bridge"));
    }

    #[test]
    fn test_rule_surface_substring() {
        let engine = engine(
            LexiconBuilder::new()
                .sense(sense("board.n.01", "board", "noun.artifact", "a flat piece of wood"))
                .sense(sense(
                    "keyboard.n.01",
                    "keyboard",
                    "noun.artifact",
                    "a bank of keys",
                ))
                .build(),
        );
        assert_eq!(
            engine.connected_by("board", "keyboard"),
            Some("surface-substring")
        );
    }

    #[test]
    fn test_rule_same_category_skips_broad() {
        let engine = engine(
            LexiconBuilder::new()
                .sense(sense("guitar.n.01", "guitar", "noun.instrument", "a plucked chordophone"))
                .sense(sense("piano.n.01", "piano", "noun.instrument", "a keyed chordophone"))
                .sense(sense("car.n.01", "car", "noun.artifact", "a motor conveyance"))
                .sense(sense("hammer.n.01", "hammer", "noun.artifact", "a striking tool"))
                .build(),
        );
        assert_eq!(engine.connected_by("guitar", "piano"), Some("same-category"));
        // both artifacts, but "artifact" is too broad to mean anything
        assert!(!engine.connected("car", "hammer"));
    }

    #[test]
    fn test_rule_definition_containment() {
        let engine = engine(
            LexiconBuilder::new()
                .sense(sense(
                    "cheese.n.01",
                    "cheese",
                    "noun.food",
                    "food made from the curd of milk",
                ))
                .sense(sense("curd.n.01", "curd", "noun.substance", "coagulated protein"))
                .build(),
        );
        assert_eq!(
            engine.connected_by("cheese", "curd"),
            Some("definition-containment")
        );
        assert_eq!(
            engine.connected_by("curd", "cheese"),
            Some("definition-containment")
        );
    }

    #[test]
    fn test_rule_definition_containment_underscore_form() {
        let engine = engine(
            LexiconBuilder::new()
                .sense(sense(
                    "milk.n.01",
                    "milk",
                    "noun.food",
                    "a drink classed as a dairy_product",
                ))
                .sense(sense(
                    "dairy_product.n.01",
                    "dairy_product",
                    "noun.substance",
                    "a product prepared from secretions",
                ))
                .build(),
        );
        assert_eq!(
            engine.connected_by("milk", "dairy product"),
            Some("definition-containment")
        );
    }

    #[test]
    fn test_rule_shared_bridge_keyword() {
        let engine = engine(
            LexiconBuilder::new()
                .sense(sense(
                    "barn.n.01",
                    "barn",
                    "noun.artifact",
                    "a building for keeping livestock",
                ))
                .sense(sense(
                    "pasture.n.01",
                    "pasture",
                    "noun.object",
                    "a field where livestock graze",
                ))
                .build(),
        );
        assert_eq!(
            engine.connected_by("barn", "pasture"),
            Some("shared-bridge-keyword")
        );
    }

    #[test]
    fn test_rule_cross_category_bridge() {
        let mut grass = sense("grass.n.01", "grass", "noun.plant", "a green fodder herb");
        grass.hypernyms = vec![SenseId::new("herb.n.01")];
        let mut hay = sense(
            "hay.n.01",
            "hay",
            "noun.food",
            "dried grass cut and stored as fodder",
        );
        hay.hypernyms = vec![SenseId::new("fodder.n.01")];

        let hay_engine = engine(
            LexiconBuilder::new()
                .sense(grass)
                .sense(hay)
                .sense(sense("herb.n.01", "herb", "noun.plant", "a seed plant"))
                .sense(sense("fodder.n.01", "fodder", "noun.food", "feed for livestock"))
                .build(),
        );
        // "plant" (grass's category) never appears in hay's definition, but
        // hay's definition contains grass itself -- containment fires first
        assert_eq!(
            hay_engine.connected_by("grass", "hay"),
            Some("definition-containment")
        );

        // isolate rule 6: category token "food" appears in the plant's definition
        let mut clover = sense(
            "clover.n.01",
            "clover",
            "noun.plant",
            "a low herb grown as food for grazing herds",
        );
        clover.hypernyms = vec![SenseId::new("herb.n.01")];
        let silage = sense(
            "silage.n.01",
            "silage",
            "noun.food",
            "fermented feed stored in a silo",
        );
        let clover_engine = engine(
            LexiconBuilder::new()
                .sense(clover)
                .sense(silage)
                .sense(sense("herb.n.01", "herb", "noun.plant", "a seed plant"))
                .build(),
        );
        assert_eq!(
            clover_engine.connected_by("clover", "silage"),
            Some("cross-category-bridge")
        );
        assert_eq!(
            clover_engine.connected_by("silage", "clover"),
            Some("cross-category-bridge")
        );
    }

    #[test]
    fn test_rule_shared_hypernym() {
        let mut violin = sense("violin.n.01", "violin", "noun.music", "a bowed chordophone");
        violin.hypernyms = vec![SenseId::new("chordophone.n.01")];
        let mut cello = sense("cello.n.01", "cello", "noun.craft", "a large bowed chordophone");
        cello.hypernyms = vec![SenseId::new("chordophone.n.01")];

        let engine = engine(LexiconBuilder::new().sense(violin).sense(cello).build());
        assert_eq!(engine.connected_by("violin", "cello"), Some("shared-hypernym"));
    }

    #[test]
    fn test_rule_shared_grandparent() {
        let mut oak = sense("oak.n.01", "oak", "noun.woody", "a hardwood bearer of acorns");
        oak.hypernyms = vec![SenseId::new("hardwood_tree.n.01")];
        let mut pine = sense("pine.n.01", "pine", "noun.conifer", "an evergreen bearer of cones");
        pine.hypernyms = vec![SenseId::new("conifer.n.01")];

        let mut hardwood = sense("hardwood_tree.n.01", "hardwood_tree", "noun.plant", "a broadleaf");
        hardwood.hypernyms = vec![SenseId::new("tree.n.01")];
        let mut conifer = sense("conifer.n.01", "conifer", "noun.plant", "a cone bearer");
        conifer.hypernyms = vec![SenseId::new("tree.n.01")];

        let engine = engine(
            LexiconBuilder::new()
                .sense(oak)
                .sense(pine)
                .sense(hardwood)
                .sense(conifer)
                .build(),
        );
        assert_eq!(engine.connected_by("oak", "pine"), Some("shared-grandparent"));
    }

    #[test]
    fn test_no_rule_fires() {
        let engine = engine(
            LexiconBuilder::new()
                .sense(sense("car.n.01", "car", "noun.artifact", "a motor conveyance"))
                .sense(sense("sonnet.n.01", "sonnet", "noun.communication", "a fourteen-line poem"))
                .build(),
        );
        assert!(!engine.connected("car", "sonnet"));
    }

    #[test]
    fn test_symmetry_of_lexical_rules() {
        let lexicon = LexiconBuilder::new()
            .sense(sense("guitar.n.01", "guitar", "noun.instrument", "a plucked chordophone"))
            .sense(sense("piano.n.01", "piano", "noun.instrument", "a keyed chordophone"))
            .sense(sense(
                "cheese.n.01",
                "cheese",
                "noun.food",
                "food made from the curd of milk",
            ))
            .sense(sense("curd.n.01", "curd", "noun.substance", "coagulated protein"))
            .build();
        let engine = engine(lexicon);

        for (a, b) in [("guitar", "piano"), ("cheese", "curd"), ("guitar", "curd")] {
            assert_eq!(engine.connected(a, b), engine.connected(b, a));
        }
    }
}
