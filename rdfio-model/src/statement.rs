//! Statements: triples and quads with position-typed components
//!
//! Subject, predicate, and graph positions narrow the general `Term` type
//! so that invalid statements (a literal subject, a blank predicate) are
//! unrepresentable rather than checked at runtime.

use crate::error::ModelError;
use crate::term::{BlankId, Term};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A term valid in subject or graph position: IRI, CURIE, or blank node
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    /// Full IRI
    Iri(Arc<str>),
    /// `prefix:name` shorthand
    Curie { prefix: Arc<str>, name: Arc<str> },
    /// Blank node
    Blank(BlankId),
}

impl Subject {
    /// Create an IRI subject
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Subject::Iri(Arc::from(iri.as_ref()))
    }

    /// Create a CURIE subject
    pub fn curie(prefix: impl AsRef<str>, name: impl AsRef<str>) -> Self {
        Subject::Curie {
            prefix: Arc::from(prefix.as_ref()),
            name: Arc::from(name.as_ref()),
        }
    }

    /// Create a blank node subject
    pub fn blank(label: impl AsRef<str>) -> Self {
        Subject::Blank(BlankId::new(label))
    }

    /// Check if this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Subject::Blank(_))
    }

    /// Try to get as blank node ID
    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Subject::Blank(id) => Some(id),
            _ => None,
        }
    }

    /// Widen back to a general term
    pub fn to_term(&self) -> Term {
        match self {
            Subject::Iri(iri) => Term::Iri(iri.clone()),
            Subject::Curie { prefix, name } => Term::Curie {
                prefix: prefix.clone(),
                name: name.clone(),
            },
            Subject::Blank(id) => Term::Blank(id.clone()),
        }
    }
}

impl TryFrom<Term> for Subject {
    type Error = ModelError;

    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::Iri(iri) => Ok(Subject::Iri(iri)),
            Term::Curie { prefix, name } => Ok(Subject::Curie { prefix, name }),
            Term::Blank(id) => Ok(Subject::Blank(id)),
            Term::Literal(lit) => Err(ModelError::InvalidSubject(lit.to_string())),
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Iri(iri) => write!(f, "<{iri}>"),
            Subject::Curie { prefix, name } => write!(f, "{prefix}:{name}"),
            Subject::Blank(id) => write!(f, "{id}"),
        }
    }
}

/// A term valid in predicate position: IRI or CURIE only
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Predicate {
    /// Full IRI
    Iri(Arc<str>),
    /// `prefix:name` shorthand
    Curie { prefix: Arc<str>, name: Arc<str> },
}

impl Predicate {
    /// Create an IRI predicate
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Predicate::Iri(Arc::from(iri.as_ref()))
    }

    /// Create a CURIE predicate
    pub fn curie(prefix: impl AsRef<str>, name: impl AsRef<str>) -> Self {
        Predicate::Curie {
            prefix: Arc::from(prefix.as_ref()),
            name: Arc::from(name.as_ref()),
        }
    }

    /// Widen back to a general term
    pub fn to_term(&self) -> Term {
        match self {
            Predicate::Iri(iri) => Term::Iri(iri.clone()),
            Predicate::Curie { prefix, name } => Term::Curie {
                prefix: prefix.clone(),
                name: name.clone(),
            },
        }
    }
}

impl TryFrom<Term> for Predicate {
    type Error = ModelError;

    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::Iri(iri) => Ok(Predicate::Iri(iri)),
            Term::Curie { prefix, name } => Ok(Predicate::Curie { prefix, name }),
            other => Err(ModelError::InvalidPredicate(other.to_string())),
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::Iri(iri) => write!(f, "<{iri}>"),
            Predicate::Curie { prefix, name } => write!(f, "{prefix}:{name}"),
        }
    }
}

/// A triple or quad
///
/// Quads extend triples with a graph label; the graph position admits the
/// same terms as the subject position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statement {
    /// Subject-predicate-object in the default graph
    Triple {
        subject: Subject,
        predicate: Predicate,
        object: Term,
    },
    /// Subject-predicate-object in a named graph
    Quad {
        subject: Subject,
        predicate: Predicate,
        object: Term,
        graph: Subject,
    },
}

impl Statement {
    /// Create a triple
    pub fn triple(subject: Subject, predicate: Predicate, object: Term) -> Self {
        Statement::Triple {
            subject,
            predicate,
            object,
        }
    }

    /// Create a quad
    pub fn quad(subject: Subject, predicate: Predicate, object: Term, graph: Subject) -> Self {
        Statement::Quad {
            subject,
            predicate,
            object,
            graph,
        }
    }

    /// The statement's subject
    pub fn subject(&self) -> &Subject {
        match self {
            Statement::Triple { subject, .. } | Statement::Quad { subject, .. } => subject,
        }
    }

    /// The statement's predicate
    pub fn predicate(&self) -> &Predicate {
        match self {
            Statement::Triple { predicate, .. } | Statement::Quad { predicate, .. } => predicate,
        }
    }

    /// The statement's object
    pub fn object(&self) -> &Term {
        match self {
            Statement::Triple { object, .. } | Statement::Quad { object, .. } => object,
        }
    }

    /// The graph label, if this is a quad
    pub fn graph(&self) -> Option<&Subject> {
        match self {
            Statement::Triple { .. } => None,
            Statement::Quad { graph, .. } => Some(graph),
        }
    }

    /// Attach a graph label, turning a triple into a quad
    ///
    /// A quad keeps its existing graph.
    pub fn into_graph(self, graph: Subject) -> Self {
        match self {
            Statement::Triple {
                subject,
                predicate,
                object,
            } => Statement::Quad {
                subject,
                predicate,
                object,
                graph,
            },
            quad @ Statement::Quad { .. } => quad,
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Triple {
                subject,
                predicate,
                object,
            } => write!(f, "{subject} {predicate} {object} ."),
            Statement::Quad {
                subject,
                predicate,
                object,
                graph,
            } => write!(f, "{subject} {predicate} {object} {graph} ."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_rejects_literal() {
        let result = Subject::try_from(Term::string("not a subject"));
        assert!(matches!(result, Err(ModelError::InvalidSubject(_))));
    }

    #[test]
    fn test_predicate_rejects_blank() {
        let result = Predicate::try_from(Term::blank("b0"));
        assert!(matches!(result, Err(ModelError::InvalidPredicate(_))));
    }

    #[test]
    fn test_predicate_accepts_curie() {
        let pred = Predicate::try_from(Term::curie("foaf", "knows")).unwrap();
        assert_eq!(pred, Predicate::curie("foaf", "knows"));
    }

    #[test]
    fn test_triple_accessors() {
        let stmt = Statement::triple(
            Subject::iri("http://example.org/s"),
            Predicate::iri("http://example.org/p"),
            Term::string("o"),
        );
        assert_eq!(stmt.subject(), &Subject::iri("http://example.org/s"));
        assert_eq!(stmt.graph(), None);
    }

    #[test]
    fn test_into_graph_promotes_triple() {
        let stmt = Statement::triple(
            Subject::iri("http://example.org/s"),
            Predicate::iri("http://example.org/p"),
            Term::integer(1),
        );
        let graph = Subject::iri("http://example.org/g");
        let quad = stmt.into_graph(graph.clone());
        assert_eq!(quad.graph(), Some(&graph));
    }

    #[test]
    fn test_statement_serde_round_trip() {
        let stmt = Statement::quad(
            Subject::blank("b0"),
            Predicate::curie("ex", "p"),
            Term::lang_string("bonjour", "fr"),
            Subject::iri("http://example.org/g"),
        );
        let json = serde_json::to_string(&stmt).unwrap();
        let back: Statement = serde_json::from_str(&json).unwrap();
        assert_eq!(stmt, back);
    }

    #[test]
    fn test_into_graph_keeps_quad_graph() {
        let original = Subject::iri("http://example.org/g1");
        let quad = Statement::quad(
            Subject::blank("b0"),
            Predicate::iri("http://example.org/p"),
            Term::boolean(true),
            original.clone(),
        );
        let result = quad.into_graph(Subject::iri("http://example.org/g2"));
        assert_eq!(result.graph(), Some(&original));
    }

    #[test]
    fn test_statement_display() {
        let stmt = Statement::triple(
            Subject::iri("http://a"),
            Predicate::iri("http://b"),
            Term::iri("http://c"),
        );
        assert_eq!(format!("{}", stmt), "<http://a> <http://b> <http://c> .");
    }
}
