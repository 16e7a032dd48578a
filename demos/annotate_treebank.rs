//! Annotate a treebank and write one marked tree per line to stdout
//!
//! Run with: cargo run --release --example annotate_treebank -- 'data/*.mrg.gz' sem

use std::io::{BufWriter, Write};
use std::sync::Arc;
use treeheads::{HeadFinder, Treebank, Variant};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(pattern) = args.next() else {
        eprintln!("usage: annotate_treebank <glob> [collins|modcollins|sem|ancora|ancora-sem]");
        std::process::exit(2);
    };
    let variant: Variant = match args.next().as_deref().unwrap_or("modcollins").parse() {
        Ok(variant) => variant,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let finder = Arc::new(HeadFinder::for_variant(variant).expect("built-in tables compile"));
    let treebank = Treebank::from_glob(&pattern).expect("invalid glob pattern");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut count = 0;
    let mut errors = 0;
    for result in treebank.annotated(finder) {
        match result {
            Ok(tree) => {
                writeln!(out, "{}", tree.to_bracketed()).expect("write failed");
                count += 1;
            }
            Err(e) => {
                eprintln!("Warning: {}", e);
                errors += 1;
            }
        }
    }
    out.flush().expect("write failed");
    eprintln!("{} trees annotated, {} skipped", count, errors);
}
