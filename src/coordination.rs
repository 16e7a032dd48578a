//! Coordination correction
//!
//! In `a , b and c` a directional rule tends to land on the conjunct next to
//! the conjunction. When the chosen child directly follows a conjunction,
//! the head is moved back to the first conjunct.

use rustc_hash::FxHashSet;

use crate::rules::english::PUNCTUATION;
use crate::traversal::Daughter;

/// Separators that link three or more conjuncts
const SEPARATORS: &[&str] = &[",", ":"];

fn set(items: &[&str]) -> FxHashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Per-language coordination settings
///
/// Without separators only the conjunct immediately left of the conjunction
/// is considered (skipping punctuation). With separators the correction
/// walks back across `,`/`:`-separated conjuncts, and interjections are
/// skipped unless the original head was one.
#[derive(Debug, Clone, Default)]
pub struct Coordination {
    conjunctions: FxHashSet<String>,
    punctuation: FxHashSet<String>,
    separators: FxHashSet<String>,
    interjection_tag: Option<String>,
    interjection_phrase: Option<String>,
}

impl Coordination {
    /// Correction switched off
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(conjunctions: &[&str], punctuation: &[&str]) -> Self {
        Self {
            conjunctions: set(conjunctions),
            punctuation: set(punctuation),
            ..Self::default()
        }
    }

    /// Walk back across separator-delimited conjuncts
    pub fn with_separators(mut self, separators: &[&str]) -> Self {
        self.separators = set(separators);
        self
    }

    /// Interjection tag and phrase skipped while walking back
    pub fn with_interjections(mut self, tag: &str, phrase: &str) -> Self {
        self.interjection_tag = Some(tag.to_string());
        self.interjection_phrase = Some(phrase.to_string());
        self
    }

    /// Penn Treebank structural correction
    pub fn collins() -> Self {
        Self::new(&["CC", "CONJP"], PUNCTUATION)
    }

    /// AnCora structural correction
    pub fn ancora() -> Self {
        Self::new(&["CC", "COORD", "CONJ"], PUNCTUATION)
    }

    /// Penn Treebank correction for three or more conjuncts
    pub fn english_semantic() -> Self {
        Self::new(&["CC", "CONJP"], PUNCTUATION)
            .with_separators(SEPARATORS)
            .with_interjections("UH", "INTJ")
    }

    /// AnCora correction for three or more conjuncts
    pub fn ancora_semantic() -> Self {
        Self::new(&["CC", "CONJ"], PUNCTUATION)
            .with_separators(SEPARATORS)
            .with_interjections("I", "INTERJECCIO")
    }

    pub fn is_enabled(&self) -> bool {
        !self.conjunctions.is_empty()
    }

    fn multi_conjunct(&self) -> bool {
        !self.separators.is_empty()
    }

    /// Return the corrected head position
    pub fn correct(&self, head: usize, daughters: &[Daughter]) -> usize {
        if head < 2 || head >= daughters.len() {
            return head;
        }
        if !self.conjunctions.contains(daughters[head - 1].category) {
            return head;
        }

        let orig_interjection = self.interjection_tag.as_deref() == Some(daughters[head].category);
        let skip = |d: &Daughter| {
            if self.multi_conjunct() {
                self.is_skippable(d, orig_interjection)
            } else {
                self.is_punctuation(d)
            }
        };

        let mut new_head = head - 2;
        while skip(&daughters[new_head]) {
            if new_head == 0 {
                return head;
            }
            new_head -= 1;
        }

        if self.multi_conjunct() {
            while new_head >= 2 {
                match self.previous_head(new_head, daughters, orig_interjection) {
                    Some(prev) => new_head = prev,
                    None => break,
                }
            }
        }

        new_head
    }

    fn is_punctuation(&self, d: &Daughter) -> bool {
        d.preterminal && self.punctuation.contains(d.category)
    }

    fn is_skippable(&self, d: &Daughter, orig_interjection: bool) -> bool {
        let interjection_tag = !orig_interjection && self.interjection_tag.as_deref() == Some(d.category);
        let interjection_phrase =
            !orig_interjection && self.interjection_phrase.as_deref() == Some(d.category);
        (d.preterminal && (self.punctuation.contains(d.category) || interjection_tag)) || interjection_phrase
    }

    /// Next conjunct to the left, if a separator lies between
    fn previous_head(&self, from: usize, daughters: &[Daughter], orig_interjection: bool) -> Option<usize> {
        let mut seen_separator = false;
        let mut i = from;
        while i > 0 {
            i -= 1;
            let d = &daughters[i];
            if self.separators.contains(d.category) {
                seen_separator = true;
            } else if self.is_skippable(d, orig_interjection) {
                continue;
            } else {
                return seen_separator.then_some(i);
            }
        }
        None
    }
}
