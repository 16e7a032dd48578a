//! Constituency tree data structures
//!
//! Trees are stored as an arena of nodes indexed by `NodeId`. Each node keeps
//! its ordered children and a parent link, so head finding can look one level
//! down (children) and one level up (parent) without recursion.
//!
//! Head choice is kept out-of-band in `Node::head` (the position of the head
//! child) instead of being encoded in labels. The `=H` marker only exists in
//! the bracketed text form, see [`crate::penn`].

use std::borrow::Cow;

/// Unique identifier for a node
pub type NodeId = usize;

/// Suffix appended to the label of a head child in bracketed output
pub const HEAD_MARK: &str = "=H";

/// Strip a trailing head marker from a label
///
/// Labels read from already-annotated input may still carry the marker;
/// rule lookups always go through this.
#[inline]
pub fn base_category(label: &str) -> &str {
    label.strip_suffix(HEAD_MARK).unwrap_or(label)
}

/// A node in a constituency tree
///
/// Terminal nodes (words) have no children and carry the token text as their
/// label. Internal nodes carry a category label.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Position (within `children`) of the head child, once annotated
    pub head: Option<usize>,
}

impl Node {
    /// Create a new node with the given label
    pub fn new(id: NodeId, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            parent: None,
            children: Vec::new(),
            head: None,
        }
    }

    /// Label with any head marker removed
    pub fn category(&self) -> &str {
        base_category(&self.label)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A constituency tree (sentence)
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub nodes: Vec<Node>,
    pub root_id: Option<NodeId>,
}

impl Tree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root_id: None,
        }
    }

    /// Add a detached node and return its id
    ///
    /// The first node added becomes the root.
    pub fn add_node(&mut self, label: &str) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(id, label));
        if self.root_id.is_none() {
            self.root_id = Some(id);
        }
        id
    }

    /// Add a node as the last child of `parent`
    pub fn add_child(&mut self, parent: NodeId, label: &str) -> NodeId {
        let id = self.add_node(label);
        self.set_parent(id, parent);
        id
    }

    /// Add a pre-terminal (`tag` over a single `word` leaf) under `parent`
    pub fn add_preterminal(&mut self, parent: NodeId, tag: &str, word: &str) -> NodeId {
        let id = self.add_child(parent, tag);
        self.add_child(id, word);
        id
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a mutable reference to a node by ID
    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Set the parent of a node
    pub fn set_parent(&mut self, child_id: NodeId, parent_id: NodeId) {
        if let Some(child) = self.get_node_mut(child_id) {
            child.parent = Some(parent_id);
        }
        if let Some(parent) = self.get_node_mut(parent_id) {
            parent.children.push(child_id);
        }
    }

    /// Get the children of a node
    pub fn children(&self, node_id: NodeId) -> Vec<&Node> {
        if let Some(node) = self.get_node(node_id) {
            node.children
                .iter()
                .filter_map(|&id| self.get_node(id))
                .collect()
        } else {
            Vec::new()
        }
    }

    /// Get the parent of a node
    pub fn parent(&self, node_id: NodeId) -> Option<&Node> {
        self.get_node(node_id)
            .and_then(|node| node.parent)
            .and_then(|parent_id| self.get_node(parent_id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// A pre-terminal wraps exactly one leaf
    pub fn is_preterminal(&self, node_id: NodeId) -> bool {
        match self.get_node(node_id) {
            Some(node) if node.children.len() == 1 => self
                .get_node(node.children[0])
                .is_some_and(|child| child.is_leaf()),
            _ => false,
        }
    }

    /// A phrasal node is neither a leaf nor a pre-terminal
    pub fn is_phrasal(&self, node_id: NodeId) -> bool {
        self.get_node(node_id).is_some_and(|node| !node.is_leaf()) && !self.is_preterminal(node_id)
    }

    /// The word under a pre-terminal
    pub fn word(&self, node_id: NodeId) -> Option<&str> {
        if !self.is_preterminal(node_id) {
            return None;
        }
        let leaf = self.nodes[node_id].children[0];
        Some(self.nodes[leaf].label.as_str())
    }

    /// Terminal yield of a node, words joined by single spaces
    pub fn covered_text(&self, node_id: NodeId) -> String {
        let mut words = Vec::new();
        self.collect_leaves(node_id, &mut words);
        words.join(" ")
    }

    fn collect_leaves<'a>(&'a self, node_id: NodeId, out: &mut Vec<&'a str>) {
        let mut stack = vec![node_id];
        while let Some(id) = stack.pop() {
            let Some(node) = self.get_node(id) else {
                continue;
            };
            if node.is_leaf() {
                out.push(node.label.as_str());
            } else {
                stack.extend(node.children.iter().rev());
            }
        }
    }

    /// Categories of the pre-terminals dominated by a node, left to right
    ///
    /// A pre-terminal node yields its own tag.
    pub fn preterminal_yield(&self, node_id: NodeId) -> Vec<&str> {
        let mut tags = Vec::new();
        let mut stack = vec![node_id];
        while let Some(id) = stack.pop() {
            if self.is_preterminal(id) {
                tags.push(self.nodes[id].category());
            } else if let Some(node) = self.get_node(id) {
                stack.extend(node.children.iter().rev());
            }
        }
        tags
    }

    /// The child chosen as head of `node_id`, if annotated
    pub fn head_child(&self, node_id: NodeId) -> Option<NodeId> {
        let node = self.get_node(node_id)?;
        node.head.and_then(|pos| node.children.get(pos).copied())
    }

    /// Whether a node was selected as the head of its parent
    pub fn is_head(&self, node_id: NodeId) -> bool {
        self.get_node(node_id)
            .and_then(|node| node.parent)
            .and_then(|parent| self.head_child(parent))
            == Some(node_id)
    }

    /// Label as it appears in annotated output
    ///
    /// Internal nodes chosen as head get [`HEAD_MARK`] appended; words are
    /// never marked.
    pub fn marked_label(&self, node_id: NodeId) -> Cow<'_, str> {
        let node = &self.nodes[node_id];
        if !node.is_leaf() && self.is_head(node_id) {
            Cow::Owned(format!("{}{}", node.category(), HEAD_MARK))
        } else {
            Cow::Borrowed(&node.label)
        }
    }

    /// Follow head links from `node_id` down to a word
    pub fn lexical_head(&self, node_id: NodeId) -> Option<&str> {
        let mut current = node_id;
        loop {
            let node = self.get_node(current)?;
            if node.is_leaf() {
                return Some(node.label.as_str());
            }
            current = self.head_child(current)?;
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (S (NP (DT The) (NN dog)) (VP (VBZ runs)))
    fn create_test_tree() -> Tree {
        let mut tree = Tree::new();
        let s = tree.add_node("S");
        let np = tree.add_child(s, "NP");
        tree.add_preterminal(np, "DT", "The");
        tree.add_preterminal(np, "NN", "dog");
        let vp = tree.add_child(s, "VP");
        tree.add_preterminal(vp, "VBZ", "runs");
        tree
    }

    #[test]
    fn test_tree_creation() {
        let tree = create_test_tree();

        assert_eq!(tree.root_id, Some(0));
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.children(0).len(), 2);
        assert_eq!(tree.parent(1).unwrap().label, "S");
    }

    #[test]
    fn test_preterminal_and_phrasal() {
        let tree = create_test_tree();

        assert!(tree.is_preterminal(2)); // DT
        assert!(!tree.is_preterminal(1)); // NP
        assert!(tree.is_phrasal(1));
        assert!(!tree.is_phrasal(2));
        assert!(!tree.is_preterminal(3)); // the word "The"
        assert_eq!(tree.word(2), Some("The"));
        assert_eq!(tree.word(1), None);
    }

    #[test]
    fn test_covered_text_and_yield() {
        let tree = create_test_tree();

        assert_eq!(tree.covered_text(0), "The dog runs");
        assert_eq!(tree.covered_text(1), "The dog");
        assert_eq!(tree.preterminal_yield(0), vec!["DT", "NN", "VBZ"]);
        assert_eq!(tree.preterminal_yield(2), vec!["DT"]);
    }

    #[test]
    fn test_base_category() {
        assert_eq!(base_category("NP=H"), "NP");
        assert_eq!(base_category("NP"), "NP");
        assert_eq!(base_category("=H"), "");
        assert_eq!(base_category("NP-TMP=H"), "NP-TMP");
    }

    #[test]
    fn test_head_links() {
        let mut tree = create_test_tree();
        tree.nodes[0].head = Some(1); // VP
        tree.nodes[6].head = Some(0); // VBZ
        tree.nodes[7].head = Some(0); // runs

        assert_eq!(tree.head_child(0), Some(6));
        assert!(tree.is_head(6));
        assert!(!tree.is_head(1));
        assert_eq!(tree.marked_label(6), "VP=H");
        assert_eq!(tree.marked_label(1), "NP");
        assert_eq!(tree.marked_label(8), "runs");
        assert_eq!(tree.lexical_head(0), Some("runs"));
        assert_eq!(tree.lexical_head(1), None);
    }
}
