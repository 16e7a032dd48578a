//! Semantic head overrides
//!
//! Structural rules make auxiliaries and copulas the heads of their clauses.
//! The overrides here look at the words under a verb-phrase-like node and,
//! when an auxiliary, a passive/progressive chain or a copula is present,
//! move the head to the lexical predicate or to the complement.
//!
//! Overrides are tried in order before the structural rules; the first one
//! returning a position wins.

use std::fmt::Debug;
use std::sync::Arc;

use crate::coordination::Coordination;
use crate::lexicon::{
    AUXILIARIES, BE_GET_VERBS, COPULA_VERBS, LexicalSet, LexicalTest, PARTICIPLE_TAGS,
    SPANISH_COPULAS, TagClass, UNAMBIGUOUS_AUX_TAGS, VERB_TAGS,
};
use crate::rules::{MatchMode, Rule, RuleTableError, TraversalMode};
use crate::traversal::{self, Daughter};
use crate::tree::{NodeId, Tree};

/// Everything an override may look at for one node
#[derive(Debug, Clone, Copy)]
pub struct OverrideContext<'a> {
    pub tree: &'a Tree,
    pub node: NodeId,
    pub parent: Option<NodeId>,
    /// Node label without head marker
    pub category: &'a str,
    pub daughters: &'a [Daughter<'a>],
    pub coordination: &'a Coordination,
}

impl<'a> OverrideContext<'a> {
    pub fn children(&self) -> &'a [NodeId] {
        &self.tree.nodes[self.node].children
    }

    /// Apply a rule without last resort; a match goes through coordination
    /// correction
    pub fn apply(&self, rule: &Rule) -> Option<usize> {
        traversal::find(rule, self.daughters).map(|head| self.coordination.correct(head, self.daughters))
    }

    /// Tag and word of a pre-terminal child
    fn tagged_word(&self, child: NodeId) -> Option<(&'a str, &'a str)> {
        let word = self.tree.word(child)?;
        Some((self.tree.nodes[child].category(), word))
    }
}

/// A strategy that may replace the structural head choice
pub trait HeadOverride: Debug + Send + Sync {
    /// Position of the head child, or `None` to defer
    fn attempt(&self, ctx: &OverrideContext) -> Option<usize>;
}

/// Language-specific data for the semantic overrides
#[derive(Debug, Clone)]
pub struct SemanticProfile {
    /// Categories the overrides apply to
    pub targets: Vec<String>,
    pub auxiliary: LexicalTest,
    pub passive_auxiliary: LexicalTest,
    pub copula: LexicalTest,
    /// Label prefix of verb phrases
    pub verb_phrase: String,
    pub participles: TagClass,
    pub conjunction_tag: String,
    /// Phrases that continue a coordinated participle chain
    pub conjunction_phrases: Vec<String>,
    /// Interrogative clause category
    pub interrogative: String,
    /// Clause category hosting WH questions
    pub wh_clause: String,
    pub wh_prefix: String,
    pub existential_tag: String,
    /// Children with this tag prefix are not searched for existentials
    pub verb_tag_prefix: String,
    pub temporal_marker: String,
    pub nominal_prefix: String,
    pub auxiliary_rule: Rule,
    pub copula_rule: Rule,
    pub interrogative_copula_rule: Rule,
}

impl SemanticProfile {
    /// Penn Treebank profile
    pub fn english() -> Result<Self, RuleTableError> {
        let mode = MatchMode::Exact;
        let verb_tags = || TagClass::set(VERB_TAGS);
        Ok(Self {
            targets: vec!["VP".into(), "SQ".into(), "SINV".into()],
            auxiliary: LexicalTest::new()
                .with_tags(TagClass::set(UNAMBIGUOUS_AUX_TAGS))
                .with_words(verb_tags(), LexicalSet::new(AUXILIARIES)),
            passive_auxiliary: LexicalTest::new().with_words(verb_tags(), LexicalSet::new(BE_GET_VERBS)),
            copula: LexicalTest::new().with_words(verb_tags(), LexicalSet::new(COPULA_VERBS)),
            verb_phrase: "VP".into(),
            participles: TagClass::set(PARTICIPLE_TAGS),
            conjunction_tag: "CC".into(),
            conjunction_phrases: vec!["CONJP".into(), "PRN".into()],
            interrogative: "SQ".into(),
            wh_clause: "SBARQ".into(),
            wh_prefix: "WH".into(),
            existential_tag: "EX".into(),
            verb_tag_prefix: "VB".into(),
            temporal_marker: "-TMP".into(),
            nominal_prefix: "NP".into(),
            auxiliary_rule: Rule::compile("VP", TraversalMode::Left, &["VP", "ADJP"], mode)?,
            copula_rule: Rule::compile(
                "VP",
                TraversalMode::Left,
                &["VP", "ADJP", "NP", "WHADJP", "WHNP"],
                mode,
            )?,
            interrogative_copula_rule: Rule::compile(
                "SQ",
                TraversalMode::Right,
                &["VP", "ADJP", "NP", "WHADJP", "WHNP"],
                mode,
            )?,
        })
    }

    /// AnCora profile
    pub fn ancora() -> Result<Self, RuleTableError> {
        let mode = MatchMode::Regex;
        Ok(Self {
            targets: vec!["GRUP.VERB".into()],
            auxiliary: LexicalTest::new().with_tags(TagClass::pattern("VA.*")?),
            passive_auxiliary: LexicalTest::new().with_tags(TagClass::pattern("VS.*")?),
            copula: LexicalTest::new()
                .with_tags(TagClass::pattern("VS.*")?)
                .with_words(TagClass::Any, LexicalSet::new(SPANISH_COPULAS)),
            verb_phrase: "GRUP.VERB".into(),
            participles: TagClass::pattern("V[MAS]P.*|V[MAS]G.*|V[MAS][ISMN][IS].*")?,
            conjunction_tag: "CC".into(),
            conjunction_phrases: vec!["CONJ".into()],
            interrogative: "SQ".into(),
            wh_clause: "SBARQ".into(),
            wh_prefix: "WH".into(),
            existential_tag: "EX".into(),
            verb_tag_prefix: "V".into(),
            temporal_marker: "-TMP".into(),
            nominal_prefix: "SN".into(),
            auxiliary_rule: Rule::compile(
                "GRUP.VERB",
                TraversalMode::Left,
                &["GRUP\\.VERB", "SA", "S\\.A", "GRUP\\.A"],
                mode,
            )?,
            copula_rule: Rule::compile(
                "GRUP.VERB",
                TraversalMode::Left,
                &["GRUP\\.VERB", "SA", "S\\.A", "GRUP\\.A", "SN", "GRUP\\.NOM"],
                mode,
            )?,
            interrogative_copula_rule: Rule::compile(
                "SQ",
                TraversalMode::Right,
                &["VP", "ADJP", "NP", "WHADJP", "WHNP"],
                mode,
            )?,
        })
    }

    /// The auxiliary and copula overrides, in that order
    pub fn overrides(self: Arc<Self>) -> Vec<Arc<dyn HeadOverride>> {
        vec![
            Arc::new(AuxiliaryOverride::new(self.clone())),
            Arc::new(CopulaOverride::new(self)),
        ]
    }

    pub fn is_target(&self, category: &str) -> bool {
        self.targets.iter().any(|t| t == category)
    }

    fn any_child(&self, ctx: &OverrideContext, test: &LexicalTest) -> bool {
        ctx.children().iter().any(|&child| {
            ctx.tagged_word(child)
                .is_some_and(|(tag, word)| test.matches(tag, word))
        })
    }

    /// Some child is an auxiliary verb
    pub fn has_auxiliary(&self, ctx: &OverrideContext) -> bool {
        self.any_child(ctx, &self.auxiliary)
    }

    /// Some child is a copula
    pub fn has_copula(&self, ctx: &OverrideContext) -> bool {
        self.any_child(ctx, &self.copula)
    }

    /// A passive auxiliary together with a verb phrase headed by a
    /// participle, possibly through coordination
    pub fn has_passive_chain(&self, ctx: &OverrideContext) -> bool {
        let tree = ctx.tree;
        let mut found_auxiliary = false;
        let mut found_participle_vp = false;

        for &child in ctx.children() {
            if let Some((tag, word)) = ctx.tagged_word(child) {
                if self.passive_auxiliary.matches(tag, word) {
                    found_auxiliary = true;
                }
            } else if tree.is_phrasal(child) && tree.nodes[child].category().starts_with(&self.verb_phrase) {
                if self.vp_has_participle_chain(tree, child) {
                    found_participle_vp = true;
                }
            }
            if found_auxiliary && found_participle_vp {
                return true;
            }
        }
        false
    }

    fn vp_has_participle_chain(&self, tree: &Tree, vp: NodeId) -> bool {
        let mut participle_in_vp = false;
        for &grandchild in &tree.nodes[vp].children {
            let category = tree.nodes[grandchild].category();
            if tree.is_preterminal(grandchild) {
                if self.participles.matches(category) {
                    return true;
                }
                if category == self.conjunction_tag && participle_in_vp {
                    return true;
                }
            } else if tree.is_phrasal(grandchild) {
                if category == self.verb_phrase {
                    participle_in_vp = self.vp_contains_participle(tree, grandchild);
                } else if participle_in_vp && self.conjunction_phrases.iter().any(|p| p == category) {
                    return true;
                }
            }
        }
        false
    }

    fn vp_contains_participle(&self, tree: &Tree, vp: NodeId) -> bool {
        tree.nodes[vp]
            .children
            .iter()
            .any(|&child| tree.is_preterminal(child) && self.participles.matches(tree.nodes[child].category()))
    }

    /// "There is a man": an existential subject makes the copula the head
    ///
    /// For a verb phrase, any sibling before the first verb phrase of the
    /// parent whose tags include the existential tag counts. For an
    /// interrogative clause, any non-verbal child counts.
    pub fn is_existential(&self, ctx: &OverrideContext) -> bool {
        let tree = ctx.tree;
        let has_existential =
            |id: NodeId| tree.preterminal_yield(id).contains(&self.existential_tag.as_str());

        if ctx.category == self.verb_phrase {
            let Some(parent) = ctx.parent else {
                return false;
            };
            for &sibling in &tree.nodes[parent].children {
                if tree.nodes[sibling].category() == self.verb_phrase {
                    break;
                }
                if has_existential(sibling) {
                    return true;
                }
            }
            false
        } else if ctx.category.starts_with(&self.interrogative) {
            ctx.children()
                .iter()
                .filter(|&&child| !tree.nodes[child].category().starts_with(&self.verb_tag_prefix))
                .any(|&child| has_existential(child))
        } else {
            false
        }
    }

    /// "Who is the president?": an interrogative clause under a WH clause
    /// with a WH sibling
    pub fn is_wh_question(&self, ctx: &OverrideContext) -> bool {
        if !ctx.category.starts_with(&self.interrogative) {
            return false;
        }
        let Some(parent) = ctx.parent else {
            return false;
        };
        let tree = ctx.tree;
        tree.nodes[parent].category() == self.wh_clause
            && tree.nodes[parent]
                .children
                .iter()
                .any(|&sibling| tree.nodes[sibling].category().starts_with(&self.wh_prefix))
    }
}

/// Prefer the lexical verb over auxiliaries
#[derive(Debug, Clone)]
pub struct AuxiliaryOverride {
    profile: Arc<SemanticProfile>,
}

impl AuxiliaryOverride {
    pub fn new(profile: Arc<SemanticProfile>) -> Self {
        Self { profile }
    }
}

impl HeadOverride for AuxiliaryOverride {
    fn attempt(&self, ctx: &OverrideContext) -> Option<usize> {
        let profile = &self.profile;
        if !profile.is_target(ctx.category) {
            return None;
        }
        if profile.has_auxiliary(ctx) || profile.has_passive_chain(ctx) {
            return ctx.apply(&profile.auxiliary_rule);
        }
        None
    }
}

/// Prefer the complement of a copula
#[derive(Debug, Clone)]
pub struct CopulaOverride {
    profile: Arc<SemanticProfile>,
}

impl CopulaOverride {
    pub fn new(profile: Arc<SemanticProfile>) -> Self {
        Self { profile }
    }
}

impl HeadOverride for CopulaOverride {
    fn attempt(&self, ctx: &OverrideContext) -> Option<usize> {
        let profile = &self.profile;
        if !profile.is_target(ctx.category) || !profile.has_copula(ctx) {
            return None;
        }
        if profile.is_existential(ctx) || profile.is_wh_question(ctx) {
            return None;
        }

        let interrogative = ctx.category == profile.interrogative;
        let rule = if interrogative {
            &profile.interrogative_copula_rule
        } else {
            &profile.copula_rule
        };
        let head = ctx.apply(rule)?;
        let category = ctx.daughters[head].category;

        // temporal NPs are never heads
        if category.contains(profile.temporal_marker.as_str()) {
            return None;
        }
        // in questions a nominal is predicative only after another nominal
        if interrogative && category.starts_with(&profile.nominal_prefix) {
            let earlier = ctx.daughters[..head]
                .iter()
                .any(|d| d.category.starts_with(&profile.nominal_prefix));
            if !earlier {
                return None;
            }
        }
        Some(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::penn::parse_tree;

    fn english() -> Arc<SemanticProfile> {
        Arc::new(SemanticProfile::english().unwrap())
    }

    /// Run `f` with a context for the first node labelled `category`
    fn with_context<T>(tree: &Tree, category: &str, f: impl FnOnce(&OverrideContext) -> T) -> T {
        let node = tree
            .nodes
            .iter()
            .find(|n| n.category() == category)
            .map(|n| n.id)
            .unwrap();
        let daughters = Daughter::of(tree, node);
        let coordination = Coordination::english_semantic();
        let ctx = OverrideContext {
            tree,
            node,
            parent: tree.nodes[node].parent,
            category: tree.nodes[node].category(),
            daughters: &daughters,
            coordination: &coordination,
        };
        f(&ctx)
    }

    #[test]
    fn test_auxiliary_override() {
        let tree = parse_tree("(S (NP (PRP He)) (VP (MD will) (VP (VB go))))").unwrap();
        let profile = english();
        let over = AuxiliaryOverride::new(profile.clone());

        with_context(&tree, "VP", |ctx| {
            assert!(profile.has_auxiliary(ctx));
            assert_eq!(over.attempt(ctx), Some(1));
        });
    }

    #[test]
    fn test_passive_chain() {
        let tree = parse_tree("(S (NP (PRP It)) (VP (VBD was) (VP (VBN eaten))))").unwrap();
        let profile = english();

        with_context(&tree, "VP", |ctx| {
            assert!(!profile.has_auxiliary(ctx));
            assert!(profile.has_passive_chain(ctx));
            assert_eq!(AuxiliaryOverride::new(profile.clone()).attempt(ctx), Some(1));
        });

        let tree = parse_tree(
            "(VP (VBD was) (VP (VP (VBN eaten)) (CC and) (VP (VBN digested))))",
        )
        .unwrap();
        with_context(&tree, "VP", |ctx| assert!(profile.has_passive_chain(ctx)));

        let tree = parse_tree("(VP (VBD was) (ADJP (JJ happy)))").unwrap();
        with_context(&tree, "VP", |ctx| assert!(!profile.has_passive_chain(ctx)));
    }

    #[test]
    fn test_copula_override() {
        let tree = parse_tree("(S (NP (NNP Bill)) (VP (VBZ is) (NP (DT a) (NN man))))").unwrap();
        let profile = english();

        with_context(&tree, "VP", |ctx| {
            assert!(profile.has_copula(ctx));
            assert!(!profile.is_existential(ctx));
            assert_eq!(CopulaOverride::new(profile.clone()).attempt(ctx), Some(1));
        });
    }

    #[test]
    fn test_existential_blocks_copula() {
        let tree = parse_tree("(S (NP (EX There)) (VP (VBZ is) (NP (DT a) (NN man))))").unwrap();
        let profile = english();

        with_context(&tree, "VP", |ctx| {
            assert!(profile.is_existential(ctx));
            assert_eq!(CopulaOverride::new(profile.clone()).attempt(ctx), None);
        });

        let tree = parse_tree("(SQ (VBZ Is) (NP (EX there)) (NP (DT a) (NN man)))").unwrap();
        with_context(&tree, "SQ", |ctx| assert!(profile.is_existential(ctx)));
    }

    #[test]
    fn test_wh_question_blocks_copula() {
        let tree = parse_tree("(SBARQ (WHNP (WP Who)) (SQ (VBZ is) (NP (DT the) (NN president))))").unwrap();
        let profile = english();

        with_context(&tree, "SQ", |ctx| {
            assert!(profile.is_wh_question(ctx));
            assert_eq!(CopulaOverride::new(profile.clone()).attempt(ctx), None);
        });
    }

    #[test]
    fn test_interrogative_nominal_needs_earlier_nominal() {
        let profile = english();
        let over = CopulaOverride::new(profile);

        // "Is he a man?": the second NP is predicative
        let tree = parse_tree("(SQ (VBZ Is) (NP (PRP he)) (NP (DT a) (NN man)))").unwrap();
        with_context(&tree, "SQ", |ctx| assert_eq!(over.attempt(ctx), Some(2)));

        let tree = parse_tree("(SQ (VBZ Is) (NP (PRP it)))").unwrap();
        with_context(&tree, "SQ", |ctx| assert_eq!(over.attempt(ctx), None));
    }

    #[test]
    fn test_temporal_complement_rejected() {
        // prefix matching lets NP-TMP through the rule; the marker check drops it
        let mut profile = SemanticProfile::english().unwrap();
        profile.copula_rule =
            Rule::compile("VP", TraversalMode::Left, &["NP"], MatchMode::Prefix).unwrap();
        let over = CopulaOverride::new(Arc::new(profile));

        let tree = parse_tree("(VP (VBD was) (NP-TMP (NN yesterday)))").unwrap();
        with_context(&tree, "VP", |ctx| assert_eq!(over.attempt(ctx), None));

        let tree = parse_tree("(VP (VBD was) (NP-PRD (NN home)))").unwrap();
        with_context(&tree, "VP", |ctx| assert_eq!(over.attempt(ctx), Some(1)));
    }

    #[test]
    fn test_ancora_profile() {
        let profile = Arc::new(SemanticProfile::ancora().unwrap());
        let tree = parse_tree("(GRUP.VERB (VSIP3S0 es) (SA (AQ0MS0 alto)))").unwrap();

        with_context(&tree, "GRUP.VERB", |ctx| {
            assert!(profile.has_copula(ctx));
            assert!(!profile.has_auxiliary(ctx));
            assert_eq!(CopulaOverride::new(profile.clone()).attempt(ctx), Some(1));
        });

        let tree = parse_tree("(GRUP.VERB (VAIP3S0 ha) (GRUP.VERB (VMP00SM comido)))").unwrap();
        with_context(&tree, "GRUP.VERB", |ctx| {
            assert!(profile.has_auxiliary(ctx));
            assert_eq!(AuxiliaryOverride::new(profile.clone()).attempt(ctx), Some(1));
        });
    }
}
