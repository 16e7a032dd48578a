//! Head rule engine
//!
//! [`HeadFinder`] combines a rule table, a coordination corrector and an
//! ordered list of [`HeadOverride`]s. It is immutable once built and can be
//! shared across threads.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::coordination::Coordination;
use crate::rules::{MissingRule, Rule, RuleTable, RuleTableError};
use crate::semantic::{HeadOverride, OverrideContext, SemanticProfile};
use crate::traversal::{self, Daughter};
use crate::tree::{NodeId, Tree};
use crate::variant::Variant;

/// Error while choosing the head of a node
#[derive(Debug, Error, PartialEq)]
pub enum HeadError {
    #[error("Head error: no rule for category {0:?}")]
    NoRuleForCategory(String),

    #[error("Head error: {0}")]
    InvalidArgument(String),
}

/// Chooses the head child of tree nodes
#[derive(Clone)]
pub struct HeadFinder {
    table: Arc<RuleTable>,
    coordination: Coordination,
    overrides: Vec<Arc<dyn HeadOverride>>,
}

impl fmt::Debug for HeadFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadFinder")
            .field("categories", &self.table.len())
            .field("coordination", &self.coordination.is_enabled())
            .field("overrides", &self.overrides)
            .finish()
    }
}

impl HeadFinder {
    /// Start assembling a finder around a table
    pub fn builder(table: impl Into<Arc<RuleTable>>) -> HeadFinderBuilder {
        HeadFinderBuilder {
            table: table.into(),
            coordination: Coordination::none(),
            overrides: Vec::new(),
        }
    }

    /// A finder for one of the built-in configurations
    pub fn for_variant(variant: Variant) -> Result<Self, RuleTableError> {
        let mut builder = Self::builder(variant.table()?).coordination(variant.coordination());
        if let Some(profile) = variant.profile()? {
            builder = builder.overrides(Arc::new(profile).overrides());
        }
        Ok(builder.build())
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn coordination(&self) -> &Coordination {
        &self.coordination
    }

    /// Position (within its children) of the head child of `node`
    ///
    /// Overrides are consulted first; the structural rules decide otherwise.
    pub fn head(&self, tree: &Tree, node: NodeId) -> Result<usize, HeadError> {
        self.choose(tree, node, true)
    }

    /// Like [`HeadFinder::head`] but ignoring overrides
    pub fn structural_head(&self, tree: &Tree, node: NodeId) -> Result<usize, HeadError> {
        self.choose(tree, node, false)
    }

    fn choose(&self, tree: &Tree, node: NodeId, use_overrides: bool) -> Result<usize, HeadError> {
        let n = tree
            .get_node(node)
            .ok_or_else(|| HeadError::InvalidArgument(format!("no node with id {}", node)))?;
        if n.is_leaf() {
            return Err(HeadError::InvalidArgument(format!(
                "node {} ({:?}) has no children",
                node, n.label
            )));
        }
        if n.children.len() == 1 {
            return Ok(0);
        }

        let category = n.category();
        let daughters = Daughter::of(tree, node);

        if use_overrides && !self.overrides.is_empty() {
            let ctx = OverrideContext {
                tree,
                node,
                parent: n.parent,
                category,
                daughters: &daughters,
                coordination: &self.coordination,
            };
            if let Some(head) = self.overrides.iter().find_map(|o| o.attempt(&ctx)) {
                return Ok(head);
            }
        }

        self.resolve(category, &daughters)
    }

    /// Structural head choice from the rule table
    pub fn resolve(&self, category: &str, daughters: &[Daughter]) -> Result<usize, HeadError> {
        let rules = match self.table.lookup(category) {
            Some(rules) => rules,
            None => match self.table.missing_rule() {
                MissingRule::Fail => return Err(HeadError::NoRuleForCategory(category.to_string())),
                MissingRule::Default(rule) => std::slice::from_ref(rule),
            },
        };

        for rule in rules {
            if let Some(head) = self.apply_rule(rule, daughters) {
                return Ok(head);
            }
        }

        let leftward = rules.last().is_some_and(|rule| rule.mode.is_leftward());
        Ok(self.last_resort(leftward, daughters))
    }

    /// One rule plus coordination correction; `None` if the rule fails
    pub fn apply_rule(&self, rule: &Rule, daughters: &[Daughter]) -> Option<usize> {
        traversal::find(rule, daughters).map(|head| self.coordination.correct(head, daughters))
    }

    /// Edge child not in the avoid set, or the bare edge child
    fn last_resort(&self, leftward: bool, daughters: &[Daughter]) -> usize {
        let n = daughters.len();
        let avoid = self.table.avoid();
        if !avoid.is_empty() {
            let allowed = |i: &usize| !avoid.iter().any(|p| p.matches(daughters[*i].category));
            let pick = if leftward {
                (0..n).find(allowed)
            } else {
                (0..n).rev().find(allowed)
            };
            if let Some(head) = pick {
                return self.coordination.correct(head, daughters);
            }
        }
        if leftward { 0 } else { n.saturating_sub(1) }
    }
}

/// Assembles a [`HeadFinder`]
pub struct HeadFinderBuilder {
    table: Arc<RuleTable>,
    coordination: Coordination,
    overrides: Vec<Arc<dyn HeadOverride>>,
}

impl HeadFinderBuilder {
    pub fn coordination(mut self, coordination: Coordination) -> Self {
        self.coordination = coordination;
        self
    }

    /// Append one override
    pub fn with_override<O: HeadOverride + 'static>(mut self, head_override: O) -> Self {
        self.overrides.push(Arc::new(head_override));
        self
    }

    /// Append several overrides, keeping their order
    pub fn overrides(mut self, overrides: Vec<Arc<dyn HeadOverride>>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// Append the overrides of a semantic profile
    pub fn semantic(self, profile: SemanticProfile) -> Self {
        self.overrides(Arc::new(profile).overrides())
    }

    pub fn build(self) -> HeadFinder {
        HeadFinder {
            table: self.table,
            coordination: self.coordination,
            overrides: self.overrides,
        }
    }
}
