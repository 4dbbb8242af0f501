//! Supported text syntaxes and their capabilities

use crate::error::RdfError;
use std::str::FromStr;

/// A concrete text syntax for RDF statements
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// Turtle: directives, prefixed names, and abbreviated triples
    Turtle,
    /// N-Triples: one plain triple per line
    NTriples,
    /// N-Quads: N-Triples with an optional graph label
    NQuads,
    /// TriG: Turtle plus `{ ... }` graph blocks
    TriG,
}

impl Syntax {
    /// True if the syntax admits `@prefix` / `@base` directives
    pub fn supports_directives(self) -> bool {
        matches!(self, Syntax::Turtle | Syntax::TriG)
    }

    /// True if the syntax can express named graphs
    pub fn supports_named_graphs(self) -> bool {
        matches!(self, Syntax::NQuads | Syntax::TriG)
    }

    /// True if the syntax admits prefixed names, bare literals, and the
    /// `[...]` / `(...)` shorthands
    pub fn supports_abbreviation(self) -> bool {
        matches!(self, Syntax::Turtle | Syntax::TriG)
    }

    /// All supported syntaxes
    pub fn all() -> [Syntax; 4] {
        [Syntax::Turtle, Syntax::NTriples, Syntax::NQuads, Syntax::TriG]
    }
}

impl FromStr for Syntax {
    type Err = RdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(Syntax::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(Syntax::NTriples),
            "nquads" | "n-quads" | "nq" => Ok(Syntax::NQuads),
            "trig" => Ok(Syntax::TriG),
            other => Err(RdfError::UnsupportedSyntax(other.to_string())),
        }
    }
}

impl std::fmt::Display for Syntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Syntax::Turtle => "turtle",
            Syntax::NTriples => "ntriples",
            Syntax::NQuads => "nquads",
            Syntax::TriG => "trig",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("Turtle".parse::<Syntax>().unwrap(), Syntax::Turtle);
        assert_eq!("TRIG".parse::<Syntax>().unwrap(), Syntax::TriG);
        assert_eq!("n-quads".parse::<Syntax>().unwrap(), Syntax::NQuads);
    }

    #[test]
    fn test_from_str_unknown() {
        assert!(matches!(
            "rdfxml".parse::<Syntax>(),
            Err(RdfError::UnsupportedSyntax(_))
        ));
    }

    #[test]
    fn test_capabilities() {
        assert!(Syntax::Turtle.supports_directives());
        assert!(!Syntax::NTriples.supports_directives());
        assert!(Syntax::TriG.supports_named_graphs());
        assert!(!Syntax::Turtle.supports_named_graphs());
        assert!(Syntax::NQuads.supports_named_graphs());
        assert!(!Syntax::NQuads.supports_abbreviation());
    }

    #[test]
    fn test_display_round_trip() {
        for syntax in Syntax::all() {
            assert_eq!(syntax.to_string().parse::<Syntax>().unwrap(), syntax);
        }
    }
}
