//! Built-in head finder configurations
//!
//! A [`Variant`] names a rule table, a coordination profile and, for the
//! semantic variants, a set of lexical overrides.

use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

use crate::coordination::Coordination;
use crate::rules::{RuleTable, RuleTableError, ancora, english};
use crate::semantic::SemanticProfile;

/// Unknown variant, language or head finder name
#[derive(Debug, Error, PartialEq)]
#[error("Unknown {kind}: {name}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub name: String,
}

/// Language of the treebank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
}

impl FromStr for Language {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            _ => Err(UnknownVariant {
                kind: "language",
                name: s.to_string(),
            }),
        }
    }
}

/// Built-in head finder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Collins (1999), Penn Treebank
    Collins,
    /// Extended Penn Treebank table
    ModifiedCollins,
    /// Extended table with semantic heads and lexical overrides
    EnglishSemantic,
    /// Spanish AnCora
    Ancora,
    /// AnCora with semantic heads and lexical overrides
    AncoraSemantic,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Collins,
        Variant::ModifiedCollins,
        Variant::EnglishSemantic,
        Variant::Ancora,
        Variant::AncoraSemantic,
    ];

    /// Select by language and head finder kind (`collins` or `sem`)
    pub fn from_options(language: &str, head_finder: &str) -> Result<Self, UnknownVariant> {
        let language: Language = language.parse()?;
        match (language, head_finder) {
            (Language::English, "collins") => Ok(Variant::ModifiedCollins),
            (Language::English, "sem") => Ok(Variant::EnglishSemantic),
            (Language::Spanish, "collins") => Ok(Variant::Ancora),
            (Language::Spanish, "sem") => Ok(Variant::AncoraSemantic),
            _ => Err(UnknownVariant {
                kind: "head finder",
                name: head_finder.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Collins => "collins",
            Variant::ModifiedCollins => "modcollins",
            Variant::EnglishSemantic => "sem",
            Variant::Ancora => "ancora",
            Variant::AncoraSemantic => "ancora-sem",
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Variant::Collins | Variant::ModifiedCollins | Variant::EnglishSemantic => Language::English,
            Variant::Ancora | Variant::AncoraSemantic => Language::Spanish,
        }
    }

    pub fn table(&self) -> Result<RuleTable, RuleTableError> {
        match self {
            Variant::Collins => english::collins(),
            Variant::ModifiedCollins => english::modified_collins(),
            Variant::EnglishSemantic => english::semantic(),
            Variant::Ancora => ancora::ancora(),
            Variant::AncoraSemantic => ancora::semantic(),
        }
    }

    pub fn coordination(&self) -> Coordination {
        match self {
            Variant::Collins | Variant::ModifiedCollins => Coordination::collins(),
            Variant::EnglishSemantic => Coordination::english_semantic(),
            Variant::Ancora => Coordination::ancora(),
            Variant::AncoraSemantic => Coordination::ancora_semantic(),
        }
    }

    /// Lexical override data, for the semantic variants
    pub fn profile(&self) -> Result<Option<SemanticProfile>, RuleTableError> {
        match self {
            Variant::EnglishSemantic => SemanticProfile::english().map(Some),
            Variant::AncoraSemantic => SemanticProfile::ancora().map(Some),
            _ => Ok(None),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "variant",
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        for variant in Variant::ALL {
            assert_eq!(variant.as_str().parse::<Variant>(), Ok(variant));
        }
        assert!("stanford".parse::<Variant>().is_err());
    }

    #[test]
    fn test_from_options() {
        assert_eq!(Variant::from_options("en", "sem"), Ok(Variant::EnglishSemantic));
        assert_eq!(Variant::from_options("en", "collins"), Ok(Variant::ModifiedCollins));
        assert_eq!(Variant::from_options("es", "sem"), Ok(Variant::AncoraSemantic));
        assert_eq!(Variant::from_options("es", "collins"), Ok(Variant::Ancora));

        let err = Variant::from_options("eu", "sem").unwrap_err();
        assert_eq!(err.kind, "language");
        let err = Variant::from_options("en", "bikel").unwrap_err();
        assert_eq!(err.to_string(), "Unknown head finder: bikel");
    }

    #[test]
    fn test_every_variant_builds() {
        for variant in Variant::ALL {
            assert!(variant.table().is_ok(), "{}", variant);
            assert_eq!(
                variant.profile().unwrap().is_some(),
                matches!(variant, Variant::EnglishSemantic | Variant::AncoraSemantic)
            );
        }
        assert_eq!(Variant::AncoraSemantic.language(), Language::Spanish);
    }
}
