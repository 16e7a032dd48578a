use treeheads::rules::TableEntry;
use treeheads::{
    Coordination, HeadFinder, MatchMode, MissingRule, RuleTable, TraversalMode, Tree, Variant, annotate,
    parse_rules, parse_tree,
};

const SENTENCES: &[&str] = &[
    "( (S (NP (DT The) (JJ old) (NN man)) (VP (VBD saw) (NP (DT the) (NN boat))) (. .)))",
    "(S (NP (NNP Kim) (CC and) (NNP Sandy)) (VP (MD will) (VP (VB leave))) (. .))",
    "(S (NP (EX There)) (VP (VBZ is) (NP (DT a) (NN problem))))",
    "(SBARQ (WHNP (WP Who)) (SQ (VBZ is) (NP (DT the) (NN president))) (. ?))",
    "(S (NP (PRP It)) (VP (VBD was) (VP (VBN eaten) (PP (IN by) (NP (NNS dogs))))))",
    "(S (NP (PRP She)) (VP (VBZ seems) (ADJP (JJ happy))))",
];

fn head_word(tree: &Tree) -> &str {
    tree.lexical_head(tree.root_id.unwrap()).unwrap()
}

fn annotated(variant: Variant, text: &str) -> Tree {
    let finder = HeadFinder::for_variant(variant).unwrap();
    let mut tree = parse_tree(text).unwrap();
    annotate(&mut tree, &finder).unwrap();
    tree
}

/// Position of the head child of the first node labelled `category`
fn head_of(tree: &Tree, category: &str) -> usize {
    tree.nodes
        .iter()
        .find(|n| n.category() == category)
        .and_then(|n| n.head)
        .unwrap()
}

#[test]
fn test_every_phrase_has_one_head() {
    for variant in [Variant::Collins, Variant::ModifiedCollins, Variant::EnglishSemantic] {
        for text in SENTENCES {
            let tree = annotated(variant, text);
            for node in &tree.nodes {
                match node.head {
                    Some(head) => assert!(head < node.children.len(), "{} {}", variant, text),
                    None => assert!(node.is_leaf(), "{} {}", variant, text),
                }
            }
        }
    }
}

#[test]
fn test_single_child_nodes() {
    // neither category has a rule
    let tree = annotated(Variant::Collins, "(FOO (BAR (BAZ x)))");
    assert_eq!(tree.to_bracketed(), "(FOO (BAR=H (BAZ=H x)))");
}

#[test]
fn test_annotation_is_idempotent() {
    let finder = HeadFinder::for_variant(Variant::EnglishSemantic).unwrap();
    for text in SENTENCES {
        let mut tree = parse_tree(text).unwrap();
        annotate(&mut tree, &finder).unwrap();
        let once = tree.to_bracketed();
        annotate(&mut tree, &finder).unwrap();
        assert_eq!(tree.to_bracketed(), once);
    }
}

#[test]
fn test_bracketed_round_trip() {
    for text in SENTENCES {
        let tree = annotated(Variant::ModifiedCollins, text);
        let written = tree.to_bracketed();
        let reread = parse_tree(&written).unwrap();

        assert_eq!(reread.to_bracketed(), written);
        // words are never marked, so pre-terminals come back without a head
        let expected: Vec<_> = tree
            .nodes
            .iter()
            .map(|n| if tree.is_preterminal(n.id) { None } else { n.head })
            .collect();
        let reread_heads: Vec<_> = reread.nodes.iter().map(|n| n.head).collect();
        assert_eq!(reread_heads, expected);
    }
}

const NP_RIGHT: &[TableEntry] = &[
    ("NP", &[(TraversalMode::Right, &["NP"])]),
    ("X", &[(TraversalMode::Left, &["A", "B"])]),
    ("Y", &[(TraversalMode::LeftDis, &["A", "B"])]),
    ("Z", &[(TraversalMode::Right, &["Q"])]),
];

#[test]
fn test_coordinated_noun_phrases() {
    let table = RuleTable::from_entries(NP_RIGHT, MatchMode::Exact).unwrap();
    let tree = parse_tree("(NP (NP (NN a)) (CC and) (NP (NN b)))").unwrap();

    let corrected = HeadFinder::builder(table.clone())
        .coordination(Coordination::collins())
        .build();
    assert_eq!(corrected.head(&tree, 0), Ok(0));

    let plain = HeadFinder::builder(table).build();
    assert_eq!(plain.head(&tree, 0), Ok(2));
}

#[test]
fn test_left_and_left_dis() {
    let finder = HeadFinder::builder(RuleTable::from_entries(NP_RIGHT, MatchMode::Exact).unwrap()).build();

    // candidate priority: A wins wherever it is
    let tree = parse_tree("(X (B b) (A a))").unwrap();
    assert_eq!(finder.head(&tree, 0), Ok(1));

    // position priority: the first child matching any candidate
    let tree = parse_tree("(Y (B b) (A a))").unwrap();
    assert_eq!(finder.head(&tree, 0), Ok(0));
}

#[test]
fn test_last_resort_skips_avoided() {
    let table = RuleTable::from_entries(NP_RIGHT, MatchMode::Exact)
        .unwrap()
        .with_avoid(&["PUNCT"])
        .unwrap();
    let finder = HeadFinder::builder(table).build();

    let tree = parse_tree("(Z (PUNCT ,) (NP (NN x)) (VP (VB y)))").unwrap();
    assert_eq!(finder.head(&tree, 0), Ok(2));

    let tree = parse_tree("(Z (NP (NN x)) (PUNCT ,))").unwrap();
    assert_eq!(finder.head(&tree, 0), Ok(0));
}

#[test]
fn test_missing_category_default_rule() {
    let table = RuleTable::from_entries(NP_RIGHT, MatchMode::Exact).unwrap();
    let avoid_punct = table.compile_rule("*", TraversalMode::RightExcept, &["PUNCT"]).unwrap();
    let finder = HeadFinder::builder(table.with_missing_rule(MissingRule::Default(avoid_punct))).build();

    let tree = parse_tree("(UNLISTED (PUNCT ,) (NP (NN x)) (VP (VB y)) (PUNCT .))").unwrap();
    assert_eq!(finder.head(&tree, 0), Ok(2));
}

#[test]
fn test_copula_complement() {
    let tree = annotated(Variant::EnglishSemantic, "(VP (AUX is) (ADJP (JJ big)))");
    assert_eq!(tree.nodes[0].head, Some(1));

    let tree = annotated(Variant::EnglishSemantic, SENTENCES[5]);
    assert_eq!(head_word(&tree), "happy");
    let tree = annotated(Variant::ModifiedCollins, SENTENCES[5]);
    assert_eq!(head_word(&tree), "seems");
}

#[test]
fn test_auxiliary_and_passive() {
    let tree = annotated(Variant::EnglishSemantic, SENTENCES[1]);
    assert_eq!(head_word(&tree), "leave");

    let tree = annotated(Variant::EnglishSemantic, SENTENCES[4]);
    assert_eq!(head_word(&tree), "eaten");
    let tree = annotated(Variant::ModifiedCollins, SENTENCES[4]);
    assert_eq!(head_word(&tree), "was");
}

#[test]
fn test_existential_keeps_copula() {
    let tree = annotated(Variant::EnglishSemantic, SENTENCES[2]);
    assert_eq!(head_word(&tree), "is");

    let tree = annotated(
        Variant::EnglishSemantic,
        "(S (NP (PRP This)) (VP (VBZ is) (NP (DT a) (NN problem))))",
    );
    assert_eq!(head_word(&tree), "problem");
}

#[test]
fn test_wh_question_keeps_copula() {
    let tree = annotated(Variant::EnglishSemantic, SENTENCES[3]);
    assert_eq!(head_of(&tree, "SQ"), 0);

    // yes/no question: the predicate wins
    let tree = annotated(Variant::EnglishSemantic, "(SQ (VBZ Is) (NP (PRP he)) (ADJP (JJ ill)))");
    assert_eq!(tree.nodes[0].head, Some(2));
}

#[test]
fn test_spanish_copula() {
    let text = "(GRUP.VERB (VSIP3S0 es) (S.A (AQ0MS0 alto)))";
    assert_eq!(annotated(Variant::AncoraSemantic, text).nodes[0].head, Some(1));
    assert_eq!(annotated(Variant::Ancora, text).nodes[0].head, Some(0));
}

#[test]
fn test_spanish_auxiliary() {
    let text = "(GRUP.VERB (VAIP3S0 ha) (GRUP.VERB (VMP00SM comido)))";
    let tree = annotated(Variant::AncoraSemantic, text);
    assert_eq!(head_word(&tree), "comido");
}

#[test]
fn test_line_format_table() {
    let table = parse_rules("# noun phrases\n5 NP 2 NN NNS NP\n3 PP 1 IN\n", MatchMode::Exact).unwrap();
    let finder = HeadFinder::builder(table).build();

    let mut tree = parse_tree("(S (NP (DT the) (NNS dogs)) (PP (IN in) (NP (NN town))))").unwrap();
    annotate(&mut tree, &finder).unwrap();

    // S has no rule: rightmost child
    assert_eq!(
        tree.to_bracketed(),
        "(S (NP (DT the) (NNS=H dogs)) (PP=H (IN=H in) (NP (NN=H town))))"
    );
}
