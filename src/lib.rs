//! Treeheads: rule-based head finding for constituency trees
//!
//! Marks the head child of every phrase in a parse tree using per-language
//! head rule tables, coordination correction and optional lexical overrides
//! that prefer semantic heads. Core implementation in Rust with Python
//! bindings.

pub mod annotate; // Breadth-first annotation of a whole tree
pub mod coordination; // Head correction in coordinated phrases
pub mod engine; // HeadFinder: rules + coordination + overrides
pub mod lexicon; // Word lists and tag classes
pub mod penn; // Bracketed tree reader and writer
pub mod rule_format; // Line-oriented rule table files
pub mod rules; // Rule tables (English, AnCora)
pub mod semantic; // Lexical head overrides
pub mod traversal; // The six directional searches
pub mod tree; // Arena-backed constituency tree
pub mod treebank; // File/glob sources and parallel annotation
pub mod variant; // Built-in configurations

// Python bindings
#[cfg(feature = "pyo3")]
pub mod python;

// Re-exports for convenience
pub use annotate::{annotate, clear_heads};
pub use coordination::Coordination;
pub use engine::{HeadError, HeadFinder, HeadFinderBuilder};
pub use penn::{TreeParseError, TreeReader, parse_tree};
pub use rule_format::{load_rules, parse_rules, write_rules};
pub use rules::{MatchMode, MissingRule, Rule, RuleTable, RuleTableError, TraversalMode};
pub use semantic::{HeadOverride, OverrideContext, SemanticProfile};
pub use tree::{Node, NodeId, Tree};
pub use treebank::{Treebank, TreebankError};
pub use variant::{Language, Variant};
