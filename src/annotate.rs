//! Whole-tree head annotation

use std::collections::VecDeque;

use crate::engine::{HeadError, HeadFinder};
use crate::tree::Tree;

/// Set the head of every non-leaf node, breadth-first from the root
///
/// Re-annotating an annotated tree gives the same result.
pub fn annotate(tree: &mut Tree, finder: &HeadFinder) -> Result<(), HeadError> {
    let Some(root) = tree.root_id else {
        return Ok(());
    };

    let mut queue = VecDeque::from([root]);
    while let Some(id) = queue.pop_front() {
        if tree.nodes[id].is_leaf() {
            continue;
        }
        let head = finder.head(tree, id)?;
        tree.nodes[id].head = Some(head);
        queue.extend(tree.nodes[id].children.iter().copied());
    }
    Ok(())
}

/// Remove all head annotation
pub fn clear_heads(tree: &mut Tree) {
    for node in &mut tree.nodes {
        node.head = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::penn::parse_tree;
    use crate::variant::Variant;

    fn finder() -> HeadFinder {
        HeadFinder::for_variant(Variant::ModifiedCollins).unwrap()
    }

    #[test]
    fn test_annotate_marks_every_phrase() {
        let mut tree = parse_tree("(S (NP (DT The) (NN dog)) (VP (VBZ barks)) (. .))").unwrap();
        annotate(&mut tree, &finder()).unwrap();

        for node in &tree.nodes {
            if node.is_leaf() {
                assert_eq!(node.head, None);
            } else {
                let head = node.head.unwrap();
                assert!(head < node.children.len());
            }
        }
        assert_eq!(
            tree.to_bracketed(),
            "(S (NP (DT The) (NN=H dog)) (VP=H (VBZ=H barks)) (. .))"
        );
    }

    #[test]
    fn test_annotate_is_idempotent() {
        let mut tree = parse_tree("(S (NP (NNP Kim)) (VP (VBD left) (NP (NN town))))").unwrap();
        annotate(&mut tree, &finder()).unwrap();
        let once = tree.to_bracketed();
        annotate(&mut tree, &finder()).unwrap();
        assert_eq!(tree.to_bracketed(), once);
    }

    #[test]
    fn test_annotate_stops_on_error() {
        let mut tree = parse_tree("(FOO (A a) (B b))").unwrap();
        assert_eq!(
            annotate(&mut tree, &finder()),
            Err(HeadError::NoRuleForCategory("FOO".to_string()))
        );
    }

    #[test]
    fn test_clear_heads() {
        let mut tree = parse_tree("(NP (DT the) (NN cat))").unwrap();
        annotate(&mut tree, &finder()).unwrap();
        clear_heads(&mut tree);
        assert!(tree.nodes.iter().all(|n| n.head.is_none()));
        assert_eq!(tree.to_bracketed(), "(NP (DT the) (NN cat))");
    }

    #[test]
    fn test_empty_tree() {
        let mut tree = Tree::new();
        assert_eq!(annotate(&mut tree, &finder()), Ok(()));
    }
}
