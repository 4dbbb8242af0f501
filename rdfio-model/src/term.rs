//! RDF term types: IRI, CURIE, blank node, and literal
//!
//! Terms are the building blocks of statements. A term can be:
//! - An IRI (full, expanded form)
//! - A CURIE (`prefix:name` shorthand, expanded at write time)
//! - A blank node (document-scoped identity)
//! - A literal (typed value + optional language tag)
//!
//! Literal datatypes are implied by the value variant rather than stored
//! alongside it, which makes the "at most one of {language, datatype}"
//! invariant structural: a language tag can only be attached to a string
//! value, and non-string values always carry exactly their own datatype.

use crate::error::ModelError;
use crate::vocab::xsd;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Blank node identifier
///
/// Blank node IDs are stable within a document but have no cross-document
/// meaning. Readers may prepend a caller-supplied prefix to keep IDs from
/// distinct parses disjoint when the results are merged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Create a blank node ID from a label
    ///
    /// The label should NOT include the `_:` prefix.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Get the label (without `_:` prefix)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// Literal value storage
///
/// The variant determines the literal's datatype on the wire: strings have
/// no datatype (or `rdf:langString` when tagged), booleans are
/// `xsd:boolean`, integers `xsd:integer`, decimals `xsd:decimal`, doubles
/// `xsd:double`. Decimals keep their lexical form to preserve precision.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LiteralValue {
    /// String value (UTF-8)
    String(Arc<str>),
    /// Boolean value
    Boolean(bool),
    /// Integer value (i64 range)
    Integer(i64),
    /// Decimal value (lexical form, e.g. "3.14")
    Decimal(Arc<str>),
    /// Floating point value (f64)
    Double(f64),
}

impl LiteralValue {
    /// Create a string literal value
    pub fn string(s: impl AsRef<str>) -> Self {
        LiteralValue::String(Arc::from(s.as_ref()))
    }

    /// Create a decimal literal value from its lexical form
    pub fn decimal(lexical: impl AsRef<str>) -> Self {
        LiteralValue::Decimal(Arc::from(lexical.as_ref()))
    }

    /// The datatype IRI this value carries on the wire
    ///
    /// Strings produce no datatype. This is the encoding half of the
    /// literal fidelity rules.
    pub fn datatype(&self) -> Option<&'static str> {
        match self {
            LiteralValue::String(_) => None,
            LiteralValue::Boolean(_) => Some(xsd::BOOLEAN),
            LiteralValue::Integer(_) => Some(xsd::INTEGER),
            LiteralValue::Decimal(_) => Some(xsd::DECIMAL),
            LiteralValue::Double(_) => Some(xsd::DOUBLE),
        }
    }

    /// Decode a lexical form under a datatype IRI
    ///
    /// Only the registered XSD datatypes `{string, boolean, integer,
    /// decimal, double}` are recognized; any other IRI fails with
    /// `UnknownDatatype`. A recognized datatype with a malformed lexical
    /// form fails with `MalformedLexical`.
    pub fn parse(lexical: &str, datatype_iri: &str) -> Result<Self, ModelError> {
        let malformed = || ModelError::MalformedLexical {
            datatype: datatype_iri.to_string(),
            lexical: lexical.to_string(),
        };

        match datatype_iri {
            xsd::STRING => Ok(LiteralValue::string(lexical)),
            xsd::BOOLEAN => match lexical {
                "true" | "1" => Ok(LiteralValue::Boolean(true)),
                "false" | "0" => Ok(LiteralValue::Boolean(false)),
                _ => Err(malformed()),
            },
            xsd::INTEGER => lexical
                .parse::<i64>()
                .map(LiteralValue::Integer)
                .map_err(|_| malformed()),
            xsd::DECIMAL => {
                if is_valid_decimal(lexical) {
                    Ok(LiteralValue::decimal(lexical))
                } else {
                    Err(malformed())
                }
            }
            xsd::DOUBLE => match lexical {
                "INF" | "+INF" => Ok(LiteralValue::Double(f64::INFINITY)),
                "-INF" => Ok(LiteralValue::Double(f64::NEG_INFINITY)),
                "NaN" => Ok(LiteralValue::Double(f64::NAN)),
                _ => lexical
                    .parse::<f64>()
                    .map(LiteralValue::Double)
                    .map_err(|_| malformed()),
            },
            other => Err(ModelError::UnknownDatatype(other.to_string())),
        }
    }

    /// Get the lexical representation of this value
    pub fn lexical(&self) -> String {
        match self {
            LiteralValue::String(s) => s.to_string(),
            LiteralValue::Boolean(b) => b.to_string(),
            LiteralValue::Integer(i) => i.to_string(),
            LiteralValue::Decimal(s) => s.to_string(),
            LiteralValue::Double(d) => {
                if d.is_nan() {
                    "NaN".to_string()
                } else if d.is_infinite() {
                    if d.is_sign_positive() {
                        "INF".to_string()
                    } else {
                        "-INF".to_string()
                    }
                } else {
                    format!("{d:e}")
                }
            }
        }
    }

    /// Check if this is a string value
    pub fn is_string(&self) -> bool {
        matches!(self, LiteralValue::String(_))
    }

    /// Try to get as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LiteralValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LiteralValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as double
    pub fn as_double(&self) -> Option<f64> {
        match self {
            LiteralValue::Double(d) => Some(*d),
            _ => None,
        }
    }
}

/// Check a decimal lexical form: optional sign, digits, at most one dot,
/// at least one digit overall.
fn is_valid_decimal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let mut digits = 0;
    let mut dots = 0;
    for c in body.chars() {
        if c.is_ascii_digit() {
            digits += 1;
        } else if c == '.' {
            dots += 1;
        } else {
            return false;
        }
    }
    digits > 0 && dots <= 1
}

impl PartialEq for LiteralValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LiteralValue::String(a), LiteralValue::String(b)) => a == b,
            (LiteralValue::Boolean(a), LiteralValue::Boolean(b)) => a == b,
            (LiteralValue::Integer(a), LiteralValue::Integer(b)) => a == b,
            (LiteralValue::Decimal(a), LiteralValue::Decimal(b)) => a == b,
            (LiteralValue::Double(a), LiteralValue::Double(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for LiteralValue {}

impl Hash for LiteralValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            LiteralValue::String(s) => s.hash(state),
            LiteralValue::Boolean(b) => b.hash(state),
            LiteralValue::Integer(i) => i.hash(state),
            LiteralValue::Decimal(s) => s.hash(state),
            LiteralValue::Double(d) => d.to_bits().hash(state),
        }
    }
}

/// An RDF literal: a value with an optional language tag
///
/// # Invariants
///
/// - A literal carries at most one of {language, datatype}; the datatype is
///   implied by the value variant, and the constructor rejects a language
///   tag on anything but a string value.
/// - Absence of both means a plain string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    value: LiteralValue,
    language: Option<Arc<str>>,
}

impl Literal {
    /// Create a literal, validating the language/value pairing
    pub fn new(value: LiteralValue, language: Option<&str>) -> Result<Self, ModelError> {
        match (&value, language) {
            (_, None) => Ok(Self {
                value,
                language: None,
            }),
            (LiteralValue::String(_), Some(lang)) if !lang.is_empty() => Ok(Self {
                value,
                language: Some(Arc::from(lang)),
            }),
            // Empty language tags are treated as absent
            (LiteralValue::String(_), Some(_)) => Ok(Self {
                value,
                language: None,
            }),
            (_, Some(lang)) => Err(ModelError::LanguageOnNonString(lang.to_string())),
        }
    }

    /// Create a plain string literal
    pub fn string(value: impl AsRef<str>) -> Self {
        Self {
            value: LiteralValue::string(value),
            language: None,
        }
    }

    /// Create a language-tagged string literal
    ///
    /// An empty language tag is treated as absent, matching [`Literal::new`].
    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        let lang = lang.as_ref();
        Self {
            value: LiteralValue::string(value),
            language: if lang.is_empty() {
                None
            } else {
                Some(Arc::from(lang))
            },
        }
    }

    /// Create a boolean literal
    pub fn boolean(value: bool) -> Self {
        Self {
            value: LiteralValue::Boolean(value),
            language: None,
        }
    }

    /// Create an integer literal
    pub fn integer(value: i64) -> Self {
        Self {
            value: LiteralValue::Integer(value),
            language: None,
        }
    }

    /// Create a decimal literal from its lexical form
    pub fn decimal(lexical: impl AsRef<str>) -> Self {
        Self {
            value: LiteralValue::decimal(lexical),
            language: None,
        }
    }

    /// Create a double literal
    pub fn double(value: f64) -> Self {
        Self {
            value: LiteralValue::Double(value),
            language: None,
        }
    }

    /// Decode a wire literal: lexical form plus optional language/datatype
    ///
    /// A language tag wins over a datatype (encoders never emit both); with
    /// a datatype the lexical form is parsed under it; with neither the
    /// result is a plain string.
    pub fn decode(
        lexical: &str,
        language: Option<&str>,
        datatype: Option<&str>,
    ) -> Result<Self, ModelError> {
        match (language, datatype) {
            (Some(lang), _) if !lang.is_empty() => Ok(Self::lang_string(lexical, lang)),
            (_, Some(dt)) => Ok(Self {
                value: LiteralValue::parse(lexical, dt)?,
                language: None,
            }),
            _ => Ok(Self::string(lexical)),
        }
    }

    /// The literal's value
    pub fn value(&self) -> &LiteralValue {
        &self.value
    }

    /// The language tag, if any
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The datatype IRI this literal carries on the wire, if any
    ///
    /// Language-tagged and plain strings produce no datatype.
    pub fn datatype(&self) -> Option<&'static str> {
        if self.language.is_some() {
            None
        } else {
            self.value.datatype()
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.value.lexical())?;
        if let Some(lang) = &self.language {
            write!(f, "@{lang}")
        } else if let Some(dt) = self.value.datatype() {
            write!(f, "^^<{dt}>")
        } else {
            Ok(())
        }
    }
}

/// An RDF term (any statement position)
///
/// # Invariants
///
/// - `Term::Iri` holds a full IRI; `Term::Curie` holds the `prefix:name`
///   shorthand unexpanded. Writers expand or abbreviate as the target
///   syntax requires.
/// - Subject and graph positions exclude literals; predicate positions
///   exclude literals and blank nodes (see `Subject` / `Predicate`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Full IRI (e.g. "http://schema.org/Person")
    Iri(Arc<str>),

    /// Compact URI: `prefix:name` shorthand for an IRI
    Curie {
        /// Namespace prefix (without colon)
        prefix: Arc<str>,
        /// Local name (may itself contain colons)
        name: Arc<str>,
    },

    /// Blank node with document-scoped identifier
    Blank(BlankId),

    /// Literal value
    Literal(Literal),
}

impl Term {
    /// Create an IRI term
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// Create a CURIE term from prefix and local name
    pub fn curie(prefix: impl AsRef<str>, name: impl AsRef<str>) -> Self {
        Term::Curie {
            prefix: Arc::from(prefix.as_ref()),
            name: Arc::from(name.as_ref()),
        }
    }

    /// Decode a CURIE from its wire form
    ///
    /// Splits on the *first* colon only: `"foo:bar:baz"` yields prefix
    /// `foo` and name `bar:baz`. Text without a colon becomes a CURIE with
    /// an empty prefix.
    pub fn curie_from_wire(wire: &str) -> Self {
        match wire.split_once(':') {
            Some((prefix, name)) => Term::curie(prefix, name),
            None => Term::curie("", wire),
        }
    }

    /// Create a blank node term
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::Blank(BlankId::new(label))
    }

    /// Create a plain string literal term
    pub fn string(value: impl AsRef<str>) -> Self {
        Term::Literal(Literal::string(value))
    }

    /// Create a language-tagged string literal term
    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Term::Literal(Literal::lang_string(value, lang))
    }

    /// Create a boolean literal term
    pub fn boolean(value: bool) -> Self {
        Term::Literal(Literal::boolean(value))
    }

    /// Create an integer literal term
    pub fn integer(value: i64) -> Self {
        Term::Literal(Literal::integer(value))
    }

    /// Create a decimal literal term from its lexical form
    pub fn decimal(lexical: impl AsRef<str>) -> Self {
        Term::Literal(Literal::decimal(lexical))
    }

    /// Create a double literal term
    pub fn double(value: f64) -> Self {
        Term::Literal(Literal::double(value))
    }

    /// Check if this is an IRI term
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Check if this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Try to get as IRI string
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get as blank node ID
    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Term::Blank(id) => Some(id),
            _ => None,
        }
    }

    /// Try to get as literal
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Curie { prefix, name } => write!(f, "{prefix}:{name}"),
            Term::Blank(id) => write!(f, "{id}"),
            Term::Literal(lit) => write!(f, "{lit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_id() {
        let id = BlankId::new("b0");
        assert_eq!(id.as_str(), "b0");
        assert_eq!(format!("{}", id), "_:b0");
    }

    #[test]
    fn test_curie_split_on_first_colon() {
        let term = Term::curie_from_wire("foo:bar:baz");
        assert_eq!(term, Term::curie("foo", "bar:baz"));
    }

    #[test]
    fn test_empty_language_tag_is_absent() {
        let lit = Literal::lang_string("x", "");
        assert_eq!(lit.language(), None);
        assert_eq!(lit, Literal::string("x"));
        assert_eq!(format!("{}", lit), "\"x\"");

        assert_eq!(Term::lang_string("x", ""), Term::string("x"));
    }

    #[test]
    fn test_datatype_of_values() {
        assert_eq!(LiteralValue::string("x").datatype(), None);
        assert_eq!(LiteralValue::Boolean(true).datatype(), Some(xsd::BOOLEAN));
        assert_eq!(LiteralValue::Integer(1).datatype(), Some(xsd::INTEGER));
        assert_eq!(LiteralValue::decimal("1.5").datatype(), Some(xsd::DECIMAL));
        assert_eq!(LiteralValue::Double(1.5).datatype(), Some(xsd::DOUBLE));
    }

    #[test]
    fn test_parse_boolean() {
        assert_eq!(
            LiteralValue::parse("true", xsd::BOOLEAN).unwrap(),
            LiteralValue::Boolean(true)
        );
        assert_eq!(
            LiteralValue::parse("0", xsd::BOOLEAN).unwrap(),
            LiteralValue::Boolean(false)
        );
        assert!(matches!(
            LiteralValue::parse("yes", xsd::BOOLEAN),
            Err(ModelError::MalformedLexical { .. })
        ));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(
            LiteralValue::parse("42", xsd::INTEGER).unwrap(),
            LiteralValue::Integer(42)
        );
        assert_eq!(
            LiteralValue::parse("-7", xsd::INTEGER).unwrap(),
            LiteralValue::Integer(-7)
        );
        assert!(LiteralValue::parse("4.2", xsd::INTEGER).is_err());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(
            LiteralValue::parse("3.14", xsd::DECIMAL).unwrap(),
            LiteralValue::decimal("3.14")
        );
        assert!(LiteralValue::parse("3.1.4", xsd::DECIMAL).is_err());
        assert!(LiteralValue::parse("abc", xsd::DECIMAL).is_err());
    }

    #[test]
    fn test_parse_double_special_values() {
        assert_eq!(
            LiteralValue::parse("INF", xsd::DOUBLE).unwrap(),
            LiteralValue::Double(f64::INFINITY)
        );
        assert_eq!(
            LiteralValue::parse("-INF", xsd::DOUBLE).unwrap(),
            LiteralValue::Double(f64::NEG_INFINITY)
        );
        // NaN compares equal via bit comparison
        assert_eq!(
            LiteralValue::parse("NaN", xsd::DOUBLE).unwrap(),
            LiteralValue::Double(f64::NAN)
        );
    }

    #[test]
    fn test_parse_unknown_datatype() {
        assert!(matches!(
            LiteralValue::parse("2020-01-01", "http://www.w3.org/2001/XMLSchema#date"),
            Err(ModelError::UnknownDatatype(_))
        ));
    }

    #[test]
    fn test_literal_exclusivity() {
        // A language-tagged string has no datatype
        let lit = Literal::lang_string("bonjour", "fr");
        assert_eq!(lit.language(), Some("fr"));
        assert_eq!(lit.datatype(), None);

        // A typed literal has no language
        let lit = Literal::boolean(true);
        assert_eq!(lit.language(), None);
        assert_eq!(lit.datatype(), Some(xsd::BOOLEAN));

        // A language tag on a non-string is rejected
        assert!(Literal::new(LiteralValue::Integer(1), Some("en")).is_err());
    }

    #[test]
    fn test_literal_empty_language_treated_as_absent() {
        let lit = Literal::new(LiteralValue::string("x"), Some("")).unwrap();
        assert_eq!(lit.language(), None);
    }

    #[test]
    fn test_literal_decode() {
        let lit = Literal::decode("Alice", None, None).unwrap();
        assert_eq!(lit, Literal::string("Alice"));

        let lit = Literal::decode("Alicia", Some("es"), None).unwrap();
        assert_eq!(lit, Literal::lang_string("Alicia", "es"));

        let lit = Literal::decode("true", None, Some(xsd::BOOLEAN)).unwrap();
        assert_eq!(lit, Literal::boolean(true));
    }

    #[test]
    fn test_term_display() {
        assert_eq!(
            format!("{}", Term::iri("http://example.org")),
            "<http://example.org>"
        );
        assert_eq!(format!("{}", Term::curie("ex", "thing")), "ex:thing");
        assert_eq!(format!("{}", Term::blank("b0")), "_:b0");
        assert_eq!(format!("{}", Term::string("hello")), "\"hello\"");
        assert_eq!(
            format!("{}", Term::lang_string("bonjour", "fr")),
            "\"bonjour\"@fr"
        );
        assert_eq!(
            format!("{}", Term::integer(42)),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }

    #[test]
    fn test_double_lexical_round_trip() {
        let v = LiteralValue::Double(3.14);
        let parsed = LiteralValue::parse(&v.lexical(), xsd::DOUBLE).unwrap();
        assert_eq!(v, parsed);
    }
}
