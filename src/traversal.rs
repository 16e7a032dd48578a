//! Directional search over the children of a node

use crate::rules::{Rule, TraversalMode};
use crate::tree::{NodeId, Tree};

/// What the head rules see of one child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Daughter<'a> {
    /// Label with any head marker removed
    pub category: &'a str,
    /// Whether the child dominates exactly one word
    pub preterminal: bool,
}

impl<'a> Daughter<'a> {
    pub fn new(category: &'a str, preterminal: bool) -> Self {
        Self {
            category,
            preterminal,
        }
    }

    /// Describe each child of a node
    pub fn of(tree: &'a Tree, node: NodeId) -> Vec<Daughter<'a>> {
        tree.nodes[node]
            .children
            .iter()
            .map(|&child| Daughter::new(tree.nodes[child].category(), tree.is_preterminal(child)))
            .collect()
    }
}

/// Apply one rule to a child list, returning the selected position
///
/// `None` means the rule did not match and the next rule should be tried.
pub fn find(rule: &Rule, daughters: &[Daughter]) -> Option<usize> {
    let n = daughters.len();
    match rule.mode {
        TraversalMode::Left => rule.candidates.iter().find_map(|candidate| {
            (0..n).find(|&i| candidate.matches(daughters[i].category))
        }),
        TraversalMode::Right => rule.candidates.iter().find_map(|candidate| {
            (0..n).rev().find(|&i| candidate.matches(daughters[i].category))
        }),
        TraversalMode::LeftDis => (0..n).find(|&i| rule.matches_any(daughters[i].category)),
        TraversalMode::RightDis => (0..n).rev().find(|&i| {
            rule.candidates
                .iter()
                .rev()
                .any(|candidate| candidate.matches(daughters[i].category))
        }),
        TraversalMode::LeftExcept => (0..n).find(|&i| !rule.matches_any(daughters[i].category)),
        TraversalMode::RightExcept => (0..n).rev().find(|&i| !rule.matches_any(daughters[i].category)),
    }
}
