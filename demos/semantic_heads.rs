//! Compare structural and semantic heads on a few sentences
//!
//! Run with: cargo run --example semantic_heads

use treeheads::{HeadFinder, Tree, Variant, annotate, parse_tree};

const SENTENCES: &[&str] = &[
    "(S (NP (PRP He)) (VP (MD will) (VP (VB go) (NP (NN home)))) (. .))",
    "(S (NP (PRP It)) (VP (VBD was) (VP (VBN eaten))) (. .))",
    "(S (NP (DT The) (NN sky)) (VP (VBZ is) (ADJP (JJ blue))) (. .))",
    "(S (NP (EX There)) (VP (VBZ is) (NP (DT a) (NN problem))) (. .))",
    "(SBARQ (WHNP (WP Who)) (SQ (VBZ is) (NP (DT the) (NN president))) (. ?))",
];

fn lexical_head(finder: &HeadFinder, text: &str) -> (String, String) {
    let mut tree: Tree = parse_tree(text).expect("bad tree");
    annotate(&mut tree, finder).expect("annotation failed");
    let root = tree.root_id.expect("empty tree");
    let word = tree.lexical_head(root).unwrap_or("?").to_string();
    (word, tree.to_bracketed())
}

fn main() {
    let structural = HeadFinder::for_variant(Variant::ModifiedCollins).unwrap();
    let semantic = HeadFinder::for_variant(Variant::EnglishSemantic).unwrap();

    for text in SENTENCES {
        let (syn_word, _) = lexical_head(&structural, text);
        let (sem_word, marked) = lexical_head(&semantic, text);
        println!("{}", marked);
        println!("  structural head: {:<10} semantic head: {}\n", syn_word, sem_word);
    }
}
