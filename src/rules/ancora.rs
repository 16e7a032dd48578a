//! Spanish AnCora head rule tables
//!
//! AnCora part-of-speech tags are positional (`NCMS000`, `VMIP3S0`), so
//! candidates in these tables are regular expressions matched against the
//! whole label.

use super::TraversalMode::{Left, Right, RightDis};
use super::{MatchMode, RuleTable, RuleTableError, TableEntry};

/// AnCora structural head table
pub const ANCORA: &[TableEntry] = &[
    ("SN", &[
        (RightDis, &["AQA.*", "AQC.*", "GRUP\\.A", "S\\.A", "NC.*S.*", "NP.*", "NC.*P.*", "GRUP\\.NOM"]),
        (Left, &["SN", "GRUP\\.NOM"]),
        (RightDis, &["\\$", "GRUP\\.A", "S\\.A", "SA"]),
        (Right, &["Z.*"]),
        (RightDis, &["AQ0.*", "AQ[AC].*", "AO.*", "GRUP\\.A", "S\\.A", "RG", "RN", "GRUP\\.NOM"]),
    ]),
    ("GRUP.NOM", &[
        (RightDis, &["AQA.*", "AQC.*", "GRUP\\.A", "S\\.A", "NC.*S.*", "NP.*", "NC.*P.*", "GRUP\\.NOM"]),
        (Left, &["SN", "GRUP\\.NOM"]),
        (RightDis, &["\\$", "GRUP\\.A", "S\\.A", "SA"]),
        (Right, &["Z.*"]),
        (RightDis, &["AQ0.*", "AQ[AC].*", "AO.*", "GRUP\\.A", "S\\.A", "RG", "RN", "GRUP\\.NOM"]),
    ]),
    ("SENTENCE", &[(Left, &["PREP", "SP[CS].*", "CS.*", "GRUP\\.VERB", "S", "SA", "COORD", "CONJ", "GRUP\\.NOM", "SN", "S"])]),
    ("S", &[(Left, &["PREP", "SP[CS].*", "COORD", "CONJ", "CS.*", "GRUP\\.VERB", "S", "SA", "COORD", "GRUP\\.NOM", "SN"])]),
    ("SA", &[(Left, &["NC.*P.*", "GRUP\\.NOM", "\\$", "NC.*S.*", "SADV", "GRUP\\.ADV", "AQA.*", "AQC.*", "V[MAS]P.*", "V[MAS]G.*", "SA", "S\\.A", "GRUP\\.A", "AQS.*", "SN", "GRUP\\.NOM", "D.*", "S", "RG", "RN"])]),
    ("S.A", &[(Left, &["NC.*P.*", "GRUP\\.NOM", "\\$", "NC.*S.*", "SADV", "GRUP\\.ADV", "AQA.*", "AQC.*", "V[MAS]P.*", "V[MAS]G.*", "S\\.A", "GRUP\\.A", "AQS.*", "SN", "GRUP\\.NOM", "D.*", "S", "RG", "RN"])]),
    ("SADV", &[(Right, &["S", "RG", "RN", "SADV", "GRUP\\.ADV", "SP[CS].*", "PREP", "Z.*", "AQA.*", "AQC.*", "S\\.A", "GRUP\\.A", "CONJ", "CS.*", "SN", "GRUP\\.NOM", "AQS.*", "NC.*S.*"])]),
    ("SP", &[(Right, &["SP[CS].*", "PREP", "CS.*", "CONJ", "V[MAS]G.*", "V[MAS]P.*"])]),
    ("GRUP.A", &[(Left, &["NC.*P.*", "GRUP\\.NOM", "\\$", "NC.*S.*", "SADV", "GRUP\\.ADV", "AQA.*", "AQC.*", "V[MAS]P.*", "V[MAS]G.*", "GRUP\\.A", "AQS.*", "SN", "GRUP\\.NOM", "D.*", "S", "RG", "RN"])]),
    ("GRUP.ADV", &[(Right, &["RG", "RN", "GRUP\\.ADV", "PREP", "SP.*", "Z.*", "AQA.*", "AQC.*", "GRUP\\.A", "S\\.A", "CS.*", "CONJ", "SN", "GRUP\\.NOM", "AQS.*", "NC.*S.*"])]),
    ("GRUP.VERB", &[(Left, &["INFINITIU", "GERUNDI", "PARTICIPI", "PREP", "SP[CS].*", "V[MAS].*[IS].*", "V[MAS]P.*", "V.*C.*", "V[MAS]IP3S.*", "V.*", "V[MAS]G.*", "V[MAS]IP[12]S.*", "GRUP\\.VERB", "SA", "S\\.A", "GRUP\\.A", "NC.*S.*", "NC.*P.*", "GRUP\\.NOM", "SN", "S"])]),
    ("INFINITIU", &[(Left, &["VMN.*", "V[MAS]N.*", "V.*"])]),
    ("GERUNDI", &[(Left, &["VMG.*", "V[MAS]G.*", "V.*"])]),
    ("PARTICIPI", &[(Left, &["VMP.*", "V[MAS]P.*", "V.*"])]),
    ("MORFEMA.PRONOMINAL", &[(Left, &["P.*", "SN.*", "GRUP\\.NOM.*", "GRUP\\.VERB"])]),
    ("MORFEMA.VERBAL", &[(Left, &["GRUP\\.VERB", "P.*", "SN.*", "GRUP\\.NOM.*", "S"])]),
    ("COORD", &[(Right, &[])]),
    ("CONJ", &[(Right, &["CONJ", "CC.*", "RB", "RN", "SP[CS].*", "PREP", "CS"])]),
    ("INC", &[(Left, &["S", "SN", "GRUP\\.NOM", "GRUP\\.VERB", "SADV", "GRUP.ADV", "SA", "S\\.A", "GRUP\\.A", "PREP", "SP[CS].*", "CONJ", "CS", "D.*"])]),
    ("INTERJECCIO", &[(Left, &["I"])]),
    ("NEG", &[(Left, &["RN"])]),
    ("PREP", &[(Left, &["PREP", "SP[CS].*", "CONJ", "CS"])]),
    ("RELATIU", &[(Left, &["P.*", "SN", "GRUP\\.NOM", "S", "GRUP\\.VERB"])]),
    ("SPEC", &[(Left, &[])]),
    ("X", &[(Right, &[])]),
];

/// Entries replaced in the AnCora table to prefer semantic heads
pub const SEMANTIC: &[TableEntry] = &[
    ("SN", &[
        (RightDis, &["NC.*S.*", "NP.*", "NC.*P.*", "SN", "GRUP\\.NOM", "AQA.*", "AQC.*", "GRUP\\.A", "S\\.A"]),
        (Left, &["SN", "GRUP\\.NOM", "P.*"]),
        (RightDis, &["\\$", "SA", "S\\.A", "GRUP\\.A"]),
        (Right, &["Z.*"]),
        (RightDis, &["AQ0.*", "AQ[AC].*", "AO.*", "GRUP\\.A", "S\\.A", "GRUP\\.NOM", "D.*", "RG", "RN", "SADV", "GRUP\\.ADV"]),
    ]),
    ("GRUP.NOM", &[
        (RightDis, &["NC.*S.*", "NP.*", "NC.*P.*", "GRUP\\.NOM", "AQA.*", "AQC.*", "GRUP\\.A", "S\\.A"]),
        (Left, &["GRUP\\.NOM", "P.*"]),
        (RightDis, &["\\$", "SA", "S\\.A", "GRUP\\.A"]),
        (Right, &["Z.*"]),
        (RightDis, &["AQ0.*", "AQ[AC].*", "AO.*", "GRUP\\.A", "S\\.A", "GRUP\\.NOM", "D.*", "RG", "RN", "SADV", "GRUP\\.ADV"]),
    ]),
    ("SENTENCE", &[
        (Left, &["GRUP\\.VERB", "S", "SA", "S\\.A", "GRUP\\.A", "COORD", "CONJ", "PREP", "SP[CS].*"]),
        (Right, &["SN", "GRUP\\.NOM"]),
    ]),
    ("S", &[
        (Left, &["GRUP\\.VERB", "S", "SA", "S\\.A", "GRUP\\.A", "COORD", "CONJ", "PREP", "SP[CS].*"]),
        (Right, &["SN", "GRUP\\.NOM"]),
    ]),
    ("COORD", &[(Right, &["GRUP\\.VERB", "A[QO][AC].*", "GRUP\\.A", "S\\.A", "RB", "RN", "PREP", "SP[CS].*", "CC"])]),
    ("CONJ", &[(Right, &["GRUP\\.VERB", "A[QO][AC].*", "GRUP\\.A", "S\\.A", "RB", "RN", "PREP", "SP[CS].*", "CC"])]),
];

/// The AnCora table, regular-expression matching
pub fn ancora() -> Result<RuleTable, RuleTableError> {
    RuleTable::from_entries(ANCORA, MatchMode::Regex)
}

/// The AnCora table with semantic replacements
pub fn semantic() -> Result<RuleTable, RuleTableError> {
    ancora()?.with_entries(SEMANTIC)
}
