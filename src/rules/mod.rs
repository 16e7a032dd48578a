//! Head rule tables
//!
//! A rule table maps a category label to an ordered list of [`Rule`]s. Each
//! rule pairs a [`TraversalMode`] with candidate category patterns. How
//! candidates are compared with child labels (exact, prefix or regular
//! expression) is a property of the whole table, see [`MatchMode`].
//!
//! Tables are built once and never mutated afterwards; share them with
//! `Arc` across threads.

pub mod ancora;
pub mod english;

use regex::Regex;
use rustc_hash::FxHashMap;
use std::fmt::{self, Debug, Display};
use std::str::FromStr;
use thiserror::Error;

/// Error while building or loading a rule table
#[derive(Debug, Error)]
pub enum RuleTableError {
    #[error("Rule table error: empty candidate in {mode} rule for {category}")]
    EmptyCandidate {
        category: String,
        mode: TraversalMode,
    },

    #[error("Rule table error: invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule table error: unknown traversal mode: {0}")]
    UnknownMode(String),

    #[error("Rule table error at line {line_num}: {message}")]
    Format { line_num: usize, message: String },

    #[error("Rule table error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rule table error: cannot serialize {mode} rule for {category}")]
    Unserializable {
        category: String,
        mode: TraversalMode,
    },
}

/// Direction and priority used to search the children of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalMode {
    /// Candidate priority first, children left to right
    Left,
    /// Candidate priority first, children right to left
    Right,
    /// Position priority first, children left to right
    LeftDis,
    /// Position priority first, children right to left
    RightDis,
    /// First child, from the left, matching no candidate
    LeftExcept,
    /// First child, from the right, matching no candidate
    RightExcept,
}

impl TraversalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalMode::Left => "left",
            TraversalMode::Right => "right",
            TraversalMode::LeftDis => "leftdis",
            TraversalMode::RightDis => "rightdis",
            TraversalMode::LeftExcept => "leftexcept",
            TraversalMode::RightExcept => "rightexcept",
        }
    }

    /// Whether the mode searches from the left edge
    pub fn is_leftward(&self) -> bool {
        matches!(
            self,
            TraversalMode::Left | TraversalMode::LeftDis | TraversalMode::LeftExcept
        )
    }
}

impl Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalMode {
    type Err = RuleTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(TraversalMode::Left),
            "right" => Ok(TraversalMode::Right),
            "leftdis" => Ok(TraversalMode::LeftDis),
            "rightdis" => Ok(TraversalMode::RightDis),
            "leftexcept" => Ok(TraversalMode::LeftExcept),
            "rightexcept" => Ok(TraversalMode::RightExcept),
            _ => Err(RuleTableError::UnknownMode(s.to_string())),
        }
    }
}

/// How candidate strings are compared with child categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Category equals the candidate
    #[default]
    Exact,
    /// Category equals or starts with the candidate
    Prefix,
    /// Candidate is a regular expression that must match the whole category
    Regex,
}

/// A compiled candidate category
#[derive(Clone)]
pub enum CategoryPattern {
    Exact(String),
    Prefix(String),
    Regex(String, Regex), // Pattern string + compiled (anchored) regex
}

impl CategoryPattern {
    /// Compile a candidate string under the given match mode
    pub fn compile(text: &str, mode: MatchMode) -> Result<Self, RuleTableError> {
        match mode {
            MatchMode::Exact => Ok(CategoryPattern::Exact(text.to_string())),
            MatchMode::Prefix => Ok(CategoryPattern::Prefix(text.to_string())),
            MatchMode::Regex => {
                let regex = Regex::new(&format!("^(?:{})$", text)).map_err(|source| {
                    RuleTableError::InvalidPattern {
                        pattern: text.to_string(),
                        source,
                    }
                })?;
                Ok(CategoryPattern::Regex(text.to_string(), regex))
            }
        }
    }

    #[inline]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryPattern::Exact(s) => category == s,
            CategoryPattern::Prefix(s) => category.starts_with(s.as_str()),
            CategoryPattern::Regex(_, regex) => regex.is_match(category),
        }
    }

    /// The candidate as written in the table
    pub fn as_str(&self) -> &str {
        match self {
            CategoryPattern::Exact(s) | CategoryPattern::Prefix(s) | CategoryPattern::Regex(s, _) => s,
        }
    }
}

// Manual Debug implementation
impl Debug for CategoryPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryPattern::Exact(s) => f.debug_tuple("Exact").field(s).finish(),
            CategoryPattern::Prefix(s) => f.debug_tuple("Prefix").field(s).finish(),
            CategoryPattern::Regex(pattern, _) => f.debug_tuple("Regex").field(pattern).finish(),
        }
    }
}

// Compare pattern strings, not compiled regexes
impl PartialEq for CategoryPattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CategoryPattern::Exact(a), CategoryPattern::Exact(b)) => a == b,
            (CategoryPattern::Prefix(a), CategoryPattern::Prefix(b)) => a == b,
            (CategoryPattern::Regex(a, _), CategoryPattern::Regex(b, _)) => a == b,
            _ => false,
        }
    }
}

/// One traversal step: a mode and its ordered candidates
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub mode: TraversalMode,
    pub candidates: Vec<CategoryPattern>,
}

impl Rule {
    pub fn new(mode: TraversalMode, candidates: Vec<CategoryPattern>) -> Self {
        Self { mode, candidates }
    }

    /// Compile a rule from candidate strings
    ///
    /// An empty candidate list is valid (pure positional rule); an empty
    /// candidate string is not.
    pub fn compile<S: AsRef<str>>(
        category: &str,
        mode: TraversalMode,
        candidates: &[S],
        match_mode: MatchMode,
    ) -> Result<Self, RuleTableError> {
        let candidates = candidates
            .iter()
            .map(|c| {
                let text = c.as_ref();
                if text.is_empty() {
                    return Err(RuleTableError::EmptyCandidate {
                        category: category.to_string(),
                        mode,
                    });
                }
                CategoryPattern::compile(text, match_mode)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(mode, candidates))
    }

    pub fn matches_any(&self, category: &str) -> bool {
        self.candidates.iter().any(|p| p.matches(category))
    }
}

/// What to do when a category has no entry in the table
#[derive(Debug, Clone, PartialEq)]
pub enum MissingRule {
    /// Report `NoRuleForCategory`
    Fail,
    /// Use this rule as if it were the category's only entry
    Default(Rule),
}

/// Static description of a rule: mode and candidate strings
pub type RuleSpec = (TraversalMode, &'static [&'static str]);

/// Static description of a table entry
pub type TableEntry = (&'static str, &'static [RuleSpec]);

/// Per-category ordered head rules
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: FxHashMap<String, Vec<Rule>>,
    match_mode: MatchMode,
    missing: MissingRule,
    avoid: Vec<CategoryPattern>,
}

impl RuleTable {
    /// Create an empty table
    pub fn new(match_mode: MatchMode) -> Self {
        Self {
            rules: FxHashMap::default(),
            match_mode,
            missing: MissingRule::Fail,
            avoid: Vec::new(),
        }
    }

    /// Build a table from static entries
    pub fn from_entries(entries: &[TableEntry], match_mode: MatchMode) -> Result<Self, RuleTableError> {
        Self::new(match_mode).with_entries(entries)
    }

    /// Add entries, replacing any existing rules for the same categories
    pub fn with_entries(mut self, entries: &[TableEntry]) -> Result<Self, RuleTableError> {
        for &(category, specs) in entries {
            let rules = specs
                .iter()
                .map(|&(mode, candidates)| self.compile_rule(category, mode, candidates))
                .collect::<Result<Vec<_>, _>>()?;
            self.insert(category, rules);
        }
        Ok(self)
    }

    /// Set the lookup-miss policy
    pub fn with_missing_rule(mut self, missing: MissingRule) -> Self {
        self.missing = missing;
        self
    }

    /// Set categories the last resort avoids
    ///
    /// Patterns are compiled with the table's match mode.
    pub fn with_avoid<S: AsRef<str>>(mut self, categories: &[S]) -> Result<Self, RuleTableError> {
        self.avoid = Rule::compile("<avoid>", TraversalMode::LeftExcept, categories, self.match_mode)?.candidates;
        Ok(self)
    }

    /// Compile a rule using this table's match mode
    pub fn compile_rule<S: AsRef<str>>(
        &self,
        category: &str,
        mode: TraversalMode,
        candidates: &[S],
    ) -> Result<Rule, RuleTableError> {
        Rule::compile(category, mode, candidates, self.match_mode)
    }

    /// Replace the rules of a category
    pub fn insert(&mut self, category: &str, rules: Vec<Rule>) {
        self.rules.insert(category.to_string(), rules);
    }

    /// Append one rule to a category
    pub fn push_rule(&mut self, category: &str, rule: Rule) {
        self.rules.entry(category.to_string()).or_default().push(rule);
    }

    /// Rules for a base category, if any
    pub fn lookup(&self, category: &str) -> Option<&[Rule]> {
        self.rules.get(category).map(|rules| rules.as_slice())
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn missing_rule(&self) -> &MissingRule {
        &self.missing
    }

    pub fn avoid(&self) -> &[CategoryPattern] {
        &self.avoid
    }

    /// Categories in sorted order with their rules
    pub fn entries(&self) -> Vec<(&str, &[Rule])> {
        let mut entries: Vec<_> = self
            .rules
            .iter()
            .map(|(category, rules)| (category.as_str(), rules.as_slice()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
