//! English (Penn Treebank) head rule tables
//!
//! Three tables are provided: the Collins (1999) thesis table, a modified
//! table with extra categories (JJP, NML, TYPO, VB) and revised priorities,
//! and a semantic table that replaces a number of entries of the modified
//! one so that content words win over function words.

use super::TraversalMode::{Left, LeftDis, Right, RightDis};
use super::{MatchMode, RuleTable, RuleTableError, TableEntry};

/// Punctuation tags avoided by the last-resort rule
pub const PUNCTUATION: &[&str] = &[".", ",", "``", "''", ":"];

/// Collins (1999) head table
pub const COLLINS: &[TableEntry] = &[
    ("ADJP", &[(Left, &["NNS", "QP", "NN", "$", "ADVP", "JJ", "VBN", "VBG", "ADJP", "JJR", "NP", "JJS", "DT", "FW", "RBR", "RBS", "SBAR", "RB"])]),
    ("ADVP", &[(Right, &["RB", "RBR", "RBS", "FW", "ADVP", "TO", "CD", "JJR", "JJ", "IN", "NP", "JJS", "NN"])]),
    ("CONJP", &[(Right, &["CC", "RB", "IN"])]),
    ("FRAG", &[(Right, &[])]),
    ("INTJ", &[(Left, &[])]),
    ("LST", &[(Right, &["LS", ":"])]),
    ("NAC", &[(Left, &["NN", "NNS", "NNP", "NNPS", "NP", "NAC", "EX", "$", "CD", "QP", "PRP", "VBG", "JJ", "JJS", "JJR", "ADJP", "FW"])]),
    ("NX", &[(Left, &[])]),
    ("PP", &[(Right, &["IN", "TO", "VBG", "VBN", "RP", "FW"])]),
    ("PRN", &[(Left, &[])]),
    ("PRT", &[(Right, &["RP"])]),
    ("QP", &[(Left, &["$", "IN", "NNS", "NN", "JJ", "RB", "DT", "CD", "NCD", "QP", "JJR", "JJS"])]),
    ("RRC", &[(Right, &["VP", "NP", "ADVP", "ADJP", "PP"])]),
    ("S", &[(Left, &["TO", "IN", "VP", "S", "SBAR", "ADJP", "UCP", "NP"])]),
    ("SBAR", &[(Left, &["WHNP", "WHPP", "WHADVP", "WHADJP", "IN", "DT", "S", "SQ", "SINV", "SBAR", "FRAG"])]),
    ("SBARQ", &[(Left, &["SQ", "S", "SINV", "SBARQ", "FRAG"])]),
    ("SINV", &[(Left, &["VBZ", "VBD", "VBP", "VB", "MD", "VP", "S", "SINV", "ADJP", "NP"])]),
    ("SQ", &[(Left, &["VBZ", "VBD", "VBP", "VB", "MD", "VP", "SQ"])]),
    ("UCP", &[(Right, &[])]),
    ("VP", &[(Left, &["TO", "VBD", "VBN", "MD", "VBZ", "VB", "VBG", "VBP", "AUX", "AUXG", "VP", "ADJP", "NN", "NNS", "NP"])]),
    ("WHADJP", &[(Left, &["CC", "WRB", "JJ", "ADJP"])]),
    ("WHADVP", &[(Right, &["CC", "WRB"])]),
    ("WHNP", &[(Left, &["WDT", "WP", "WP$", "WHADJP", "WHPP", "WHNP"])]),
    ("WHPP", &[(Right, &["IN", "TO", "FW"])]),
    ("X", &[(Right, &[])]),
    ("NP", &[
        (RightDis, &["NN", "NNP", "NNPS", "NNS", "NX", "POS", "JJR"]),
        (Left, &["NP"]),
        (RightDis, &["$", "ADJP", "PRN"]),
        (Right, &["CD"]),
        (RightDis, &["JJ", "JJS", "RB", "QP"]),
    ]),
    ("TYPO", &[(Left, &[])]),
    ("EDITED", &[(Left, &[])]),
    ("XS", &[(Right, &["IN"])]),
];

/// Extended table with NML, JJP, TYPO and VB categories
pub const MODIFIED_COLLINS: &[TableEntry] = &[
    ("ADJP", &[
        (Left, &["$"]),
        (RightDis, &["NNS", "NN", "JJ", "QP", "VBN", "VBG"]),
        (Left, &["ADJP"]),
        (RightDis, &["JJP", "JJR", "JJS", "DT", "RB", "RBR", "CD", "IN", "VBD"]),
        (Left, &["ADVP", "NP"]),
    ]),
    ("JJP", &[(Left, &["NNS", "NN", "$", "QP", "JJ", "VBN", "VBG", "ADJP", "JJP", "JJR", "NP", "JJS", "DT", "FW", "RBR", "RBS", "SBAR", "RB"])]),
    ("ADVP", &[
        (Left, &["ADVP", "IN"]),
        (RightDis, &["RB", "RBR", "RBS", "JJ", "JJR", "JJS"]),
        (RightDis, &["RP", "DT", "NN", "CD", "NP", "VBN", "NNP", "CC", "FW", "NNS", "ADJP", "NML"]),
    ]),
    ("CONJP", &[(Right, &["CC", "RB", "IN"])]),
    ("FRAG", &[(Right, &[])]),
    ("INTJ", &[(Left, &[])]),
    ("LST", &[(Right, &["LS", ":"])]),
    ("NAC", &[(Left, &["NN", "NNS", "NML", "NNP", "NNPS", "NP", "NAC", "EX", "$", "CD", "QP", "PRP", "VBG", "JJ", "JJS", "JJR", "ADJP", "JJP", "FW"])]),
    ("NX", &[(Right, &["NP", "NX"])]),
    ("PP", &[
        (Right, &["IN", "TO", "VBG", "VBN", "RP", "FW", "JJ", "SYM"]),
        (Left, &["PP"]),
    ]),
    ("PRN", &[(Left, &["VP", "NP", "PP", "SQ", "S", "SINV", "SBAR", "ADJP", "JJP", "ADVP", "INTJ", "WHNP", "NAC", "VBP", "JJ", "NN", "NNP"])]),
    ("PRT", &[(Right, &["RP"])]),
    ("QP", &[(Left, &["$", "IN", "NNS", "NN", "JJ", "CD", "PDT", "DT", "RB", "NCD", "QP", "JJR", "JJS"])]),
    ("RRC", &[
        (Left, &["RRC"]),
        (Right, &["VP", "ADJP", "JJP", "NP", "PP", "ADVP"]),
    ]),
    ("S", &[(Left, &["TO", "VP", "S", "FRAG", "SBAR", "ADJP", "JJP", "UCP", "NP"])]),
    ("SBAR", &[(Left, &["WHNP", "WHPP", "WHADVP", "WHADJP", "IN", "DT", "S", "SQ", "SINV", "SBAR", "FRAG"])]),
    ("SBARQ", &[(Left, &["SQ", "S", "SINV", "SBARQ", "FRAG", "SBAR"])]),
    ("SINV", &[(Left, &["VBZ", "VBD", "VBP", "VB", "MD", "VBN", "VP", "S", "SINV", "ADJP", "JJP", "NP"])]),
    ("SQ", &[(Left, &["VBZ", "VBD", "VBP", "VB", "MD", "AUX", "AUXG", "VP", "SQ"])]),
    ("UCP", &[(Right, &[])]),
    ("VP", &[(Left, &["TO", "VBD", "VBN", "MD", "VBZ", "VB", "VBG", "VBP", "VP", "AUX", "AUXG", "ADJP", "JJP", "NN", "NNS", "JJ", "NP", "NNP"])]),
    ("WHADJP", &[(Left, &["WRB", "WHADVP", "RB", "JJ", "ADJP", "JJP", "JJR"])]),
    ("WHADVP", &[(Right, &["WRB", "WHADVP"])]),
    ("WHNP", &[(Left, &["WDT", "WP", "WP$", "WHADJP", "WHPP", "WHNP"])]),
    ("WHPP", &[(Right, &["IN", "TO", "FW"])]),
    ("X", &[(Right, &["S", "VP", "ADJP", "JJP", "NP", "SBAR", "PP", "X"])]),
    ("NP", &[
        (RightDis, &["NN", "NNP", "NNPS", "NNS", "NML", "NX", "POS", "JJR"]),
        (Left, &["NP", "PRP"]),
        (RightDis, &["$", "ADJP", "JJP", "PRN", "FW"]),
        (Right, &["CD"]),
        (RightDis, &["JJ", "JJS", "RB", "QP", "DT", "WDT", "RBR", "ADVP"]),
    ]),
    ("NML", &[
        (RightDis, &["NN", "NNP", "NNPS", "NNS", "NX", "NML", "POS", "JJR"]),
        (Left, &["NP", "PRP"]),
        (RightDis, &["$", "ADJP", "JJP", "PRN"]),
        (Right, &["CD"]),
        (RightDis, &["JJ", "JJS", "RB", "QP", "DT", "WDT", "RBR", "ADVP"]),
    ]),
    ("TYPO", &[(Left, &["NN", "NP", "NML", "NNP", "NNPS", "TO", "VBD", "VBN", "MD", "VBZ", "VB", "VBG", "VBP", "VP", "ADJP", "JJP", "FRAG"])]),
    ("EDITED", &[(Left, &[])]),
    ("XS", &[(Right, &["IN"])]),
    ("VB", &[(Left, &["TO", "VBD", "VBN", "MD", "VBZ", "VB", "VBG", "VBP", "VP", "AUX", "AUXG", "ADJP", "JJP", "NN", "NNS", "JJ", "NP", "NNP"])]),
];

/// Entries replaced in the modified table to prefer semantic heads
pub const SEMANTIC: &[TableEntry] = &[
    // a possessive marker is never the head of an NP
    ("NP", &[
        (RightDis, &["NN", "NNP", "NNPS", "NNS", "NX", "NML", "JJR", "WP"]),
        (Left, &["NP", "PRP"]),
        (RightDis, &["$", "ADJP", "FW"]),
        (Right, &["CD"]),
        (RightDis, &["JJ", "JJS", "QP", "DT", "WDT", "NML", "PRN", "RB", "RBR", "ADVP"]),
        (Left, &["POS"]),
    ]),
    ("WHNP", &[
        (RightDis, &["NN", "NNP", "NNPS", "NNS", "NX", "NML", "JJR", "WP"]),
        (Left, &["WHNP", "NP"]),
        (RightDis, &["$", "ADJP", "PRN", "FW"]),
        (Right, &["CD"]),
        (RightDis, &["JJ", "JJS", "RB", "QP"]),
        (Left, &["WHPP", "WHADJP", "WP$", "WDT"]),
    ]),
    ("WHADJP", &[
        (Left, &["ADJP", "JJ", "JJR", "WP"]),
        (Right, &["RB"]),
        (Right, &[]),
    ]),
    // JJ covers "how long"
    ("WHADVP", &[(RightDis, &["WRB", "WHADVP", "RB", "JJ"])]),
    // "three billion" is headed by "billion"
    ("QP", &[(Right, &["$", "NNS", "NN", "CD", "JJ", "PDT", "DT", "IN", "RB", "NCD", "QP", "JJR", "JJS"])]),
    ("S", &[
        (Left, &["VP", "S", "FRAG", "SBAR", "ADJP", "UCP", "TO"]),
        (Right, &["NP"]),
    ]),
    ("SBAR", &[(Left, &["S", "SQ", "SINV", "SBAR", "FRAG", "VP", "WHNP", "WHPP", "WHADVP", "WHADJP", "IN", "DT"])]),
    ("SQ", &[(Left, &["VP", "SQ", "ADJP", "VB", "VBZ", "VBD", "VBP", "MD", "AUX", "AUXG"])]),
    ("UCP", &[(Left, &[])]),
    ("CONJP", &[(Right, &["VB", "JJ", "RB", "IN", "CC"])]),
    ("FRAG", &[
        (Left, &["IN"]),
        (Right, &["RB"]),
        (Left, &["NP"]),
        (Left, &["ADJP", "ADVP", "FRAG", "S", "SBAR", "VP"]),
    ]),
    ("PRN", &[(Left, &["VP", "SQ", "S", "SINV", "SBAR", "NP", "ADJP", "PP", "ADVP", "INTJ", "WHNP", "NAC", "VBP", "JJ", "NN", "NNP"])]),
    ("XS", &[(Right, &["IN"])]),
    // CoNLL data
    ("EMBED", &[(Right, &["INTJ"])]),
];

/// The Collins (1999) table, exact matching
pub fn collins() -> Result<RuleTable, RuleTableError> {
    RuleTable::from_entries(COLLINS, MatchMode::Exact)
}

/// The modified Collins table; the last resort skips punctuation
pub fn modified_collins() -> Result<RuleTable, RuleTableError> {
    RuleTable::from_entries(MODIFIED_COLLINS, MatchMode::Exact)?.with_avoid(PUNCTUATION)
}

/// The modified table with semantic replacements
pub fn semantic() -> Result<RuleTable, RuleTableError> {
    RuleTable::from_entries(MODIFIED_COLLINS, MatchMode::Exact)?
        .with_entries(SEMANTIC)?
        .with_avoid(PUNCTUATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{MissingRule, TraversalMode};

    #[test]
    fn test_tables_build() {
        let collins = collins().unwrap();
        assert_eq!(collins.len(), COLLINS.len());
        assert!(collins.avoid().is_empty());
        assert_eq!(*collins.missing_rule(), MissingRule::Fail);
        assert!(collins.lookup("NML").is_none());

        let modified = modified_collins().unwrap();
        assert!(modified.lookup("NML").is_some());
        assert_eq!(modified.avoid().len(), PUNCTUATION.len());
    }

    #[test]
    fn test_semantic_replacements() {
        let modified = modified_collins().unwrap();
        let semantic = semantic().unwrap();

        assert_eq!(semantic.len(), modified.len() + 1); // EMBED
        assert_eq!(semantic.lookup("QP").unwrap()[0].mode, TraversalMode::Right);
        assert_eq!(modified.lookup("QP").unwrap()[0].mode, TraversalMode::Left);
        assert_eq!(semantic.lookup("NP").unwrap().len(), 6);
        // untouched entries are shared with the modified table
        assert_eq!(semantic.lookup("VP"), modified.lookup("VP"));
    }
}
