//! Word lists and tag classes used by the semantic overrides

use regex::Regex;
use rustc_hash::FxHashSet;
use std::fmt::{self, Debug};

use crate::rules::RuleTableError;

/// Auxiliaries, including frequent misspellings and contractions
/// ("na" from "gonna", "ve" from "weve", "of" for "have")
pub const AUXILIARIES: &[&str] = &[
    "will", "wo", "shall", "sha", "may", "might", "should", "would", "can", "could", "ca", "must",
    "has", "have", "had", "having", "get", "gets", "getting", "got", "gotten", "do", "does", "did",
    "to", "'ve", "ve", "v", "'d", "d", "'ll", "ll", "na", "of", "hav", "hvae", "as",
];

/// Auxiliaries of passive and progressive constructions
pub const BE_GET_VERBS: &[&str] = &[
    "be", "being", "been", "am", "are", "r", "is", "ai", "was", "were", "'m", "m", "'re", "'s", "s",
    "art", "ar", "get", "getting", "gets", "got",
];

/// Copulas taking a nominal or adjectival complement
pub const COPULA_VERBS: &[&str] = &[
    "be", "being", "been", "am", "are", "r", "is", "ai", "was", "were", "'m", "m", "'re", "'s", "s",
    "wase", "seem", "seems", "seemed", "appear", "appears", "appeared", "stay", "stays", "stayed",
    "remain", "remains", "remained", "resemble", "resembles", "resembled", "become", "becomes",
    "became",
];

/// Verbal tags, including Charniak's AUX/AUXG
pub const VERB_TAGS: &[&str] = &["TO", "MD", "VB", "VBD", "VBP", "VBZ", "VBG", "VBN", "AUX", "AUXG"];

/// Tags that mark an auxiliary whatever the word
pub const UNAMBIGUOUS_AUX_TAGS: &[&str] = &["TO", "MD", "AUX", "AUXG"];

/// Participle and past tags heading a passive or progressive VP
pub const PARTICIPLE_TAGS: &[&str] = &["VBN", "VBG", "VBD"];

/// Forms of ser, estar and parecer
pub const SPANISH_COPULAS: &[&str] = &[
    "pareceres", "parecer", "pareced", "parecéis", "parecemos", "parecen", "parece", "parecerán",
    "parecerá", "parecerás", "pareceréis", "pareceremos", "pareceré", "pareceríais", "pareceríamos",
    "parecerían", "parecería", "parecerías", "pareces", "parecíais", "parecíamos", "parecían",
    "parecía", "parecías", "parecida", "parecidas", "parecido", "parecidos", "pareciendo",
    "parecierais", "pareciéramos", "parecieran", "pareciera", "parecieras", "pareciereis",
    "pareciéremos", "parecieren", "pareciere", "parecieres", "parecieron", "parecieseis",
    "pareciésemos", "pareciesen", "pareciese", "parecieses", "parecimos", "pareció", "parecí",
    "parecisteis", "pareciste", "parezcáis", "parezcamos", "parezcan", "parezca", "parezcas",
    "parezco", "estaba", "estabais", "estábamos", "estaban", "estabas", "estad", "estado", "está",
    "estáis", "estamos", "estando", "están", "estará", "estarán", "estarás", "estaré", "estaréis",
    "estaremos", "estar", "estaría", "estaríais", "estaríamos", "estarían", "estarías", "estás",
    "esté", "estéis", "estemos", "estén", "estés", "estoy", "estuve", "estuviera", "estuvierais",
    "estuviéramos", "estuvieran", "estuvieras", "estuviere", "estuviereis", "estuviéremos",
    "estuvieren", "estuvieres", "estuvieron", "estuviese", "estuvieseis", "estuviésemos",
    "estuviesen", "estuvieses", "estuvimos", "estuviste", "estuvisteis", "estuvo", "erais",
    "éramos", "eran", "era", "eras", "eres", "es", "fuerais", "fuéramos", "fueran", "fuera",
    "fueras", "fuereis", "fuéremos", "fueren", "fuere", "fueres", "fueron", "fueseis", "fuésemos",
    "fuesen", "fue", "fuese", "fueses", "fuimos", "fui", "fuisteis", "fuiste", "seáis", "seamos",
    "sean", "sea", "seas", "sed", "serán", "será", "serás", "seréis", "seremos", "seré", "seríais",
    "seríamos", "serían", "sería", "serías", "ser", "sé", "sido", "siendo", "sois", "somos", "son",
    "soy",
];

/// Case-insensitive word set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexicalSet {
    words: FxHashSet<String>,
}

impl LexicalSet {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A class of part-of-speech tags
#[derive(Clone)]
pub enum TagClass {
    Any,
    Set(FxHashSet<String>),
    Pattern(String, Regex), // Pattern string + anchored regex
}

impl TagClass {
    pub fn set(tags: &[&str]) -> Self {
        TagClass::Set(tags.iter().map(|t| t.to_string()).collect())
    }

    /// Tags fully matching a regular expression
    pub fn pattern(pattern: &str) -> Result<Self, RuleTableError> {
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| {
            RuleTableError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(TagClass::Pattern(pattern.to_string(), regex))
    }

    #[inline]
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            TagClass::Any => true,
            TagClass::Set(tags) => tags.contains(tag),
            TagClass::Pattern(_, regex) => regex.is_match(tag),
        }
    }
}

// Manual Debug implementation
impl Debug for TagClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagClass::Any => f.write_str("Any"),
            TagClass::Set(tags) => {
                let mut tags: Vec<_> = tags.iter().collect();
                tags.sort();
                f.debug_tuple("Set").field(&tags).finish()
            }
            TagClass::Pattern(pattern, _) => f.debug_tuple("Pattern").field(pattern).finish(),
        }
    }
}

/// Test applied to a pre-terminal's tag and word
///
/// Matches when the tag alone is in `tags`, or when the tag is in the word
/// test's class and the word is in its set.
#[derive(Debug, Clone, Default)]
pub struct LexicalTest {
    tags: Option<TagClass>,
    words: Option<(TagClass, LexicalSet)>,
}

impl LexicalTest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags that match regardless of the word
    pub fn with_tags(mut self, tags: TagClass) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Words that match under the given tags
    pub fn with_words(mut self, tags: TagClass, words: LexicalSet) -> Self {
        self.words = Some((tags, words));
        self
    }

    pub fn matches(&self, tag: &str, word: &str) -> bool {
        if self.tags.as_ref().is_some_and(|tags| tags.matches(tag)) {
            return true;
        }
        self.words
            .as_ref()
            .is_some_and(|(tags, words)| tags.matches(tag) && words.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_set_ignores_case() {
        let set = LexicalSet::new(COPULA_VERBS);
        assert!(set.contains("is"));
        assert!(set.contains("IS"));
        assert!(set.contains("Became"));
        assert!(!set.contains("run"));
    }

    #[test]
    fn test_spanish_copulas() {
        let set = LexicalSet::new(SPANISH_COPULAS);
        assert!(set.contains("Está"));
        assert!(set.contains("fue"));
        assert!(!set.contains("come"));
    }

    #[test]
    fn test_tag_classes() {
        assert!(TagClass::Any.matches("XYZ"));
        assert!(TagClass::set(VERB_TAGS).matches("VBZ"));
        assert!(!TagClass::set(VERB_TAGS).matches("NN"));

        let auxiliary = TagClass::pattern("VA.*").unwrap();
        assert!(auxiliary.matches("VAIP3S0"));
        assert!(!auxiliary.matches("VMIP3S0"));
        assert!(!auxiliary.matches("AVA"));
        assert!(TagClass::pattern("V(").is_err());
    }

    #[test]
    fn test_lexical_test() {
        let auxiliary = LexicalTest::new()
            .with_tags(TagClass::set(UNAMBIGUOUS_AUX_TAGS))
            .with_words(TagClass::set(VERB_TAGS), LexicalSet::new(AUXILIARIES));

        assert!(auxiliary.matches("MD", "too")); // tag alone
        assert!(auxiliary.matches("VBZ", "has"));
        assert!(!auxiliary.matches("NN", "has"));
        assert!(!auxiliary.matches("VBZ", "runs"));

        let copula = LexicalTest::new().with_words(TagClass::set(VERB_TAGS), LexicalSet::new(COPULA_VERBS));
        assert!(copula.matches("VBZ", "Is"));
        assert!(!copula.matches("AUX", "will"));
        assert!(!LexicalTest::new().matches("VBZ", "is"));
    }
}
