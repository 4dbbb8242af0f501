//! Parse/serialize events
//!
//! A document is a stream of events: directives, statements, and the
//! end-of-anonymous-node marker that closes a `[...]` or `(...)` scope.
//! Readers produce the stream; writers consume it.

use crate::flags::StatementFlags;
use crate::statement::Statement;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One event in a document stream
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// `@base` / `BASE` directive
    Base {
        /// The new base IRI
        iri: Arc<str>,
    },

    /// `@prefix` / `PREFIX` directive
    Prefix {
        /// Namespace prefix (without colon); empty for the default prefix
        name: Arc<str>,
        /// The namespace IRI
        iri: Arc<str>,
    },

    /// A triple or quad, with the syntactic context it was parsed from
    Statement {
        statement: Statement,
        flags: StatementFlags,
    },

    /// Closes the innermost open anonymous node or collection
    EndAnonymous,
}

impl Event {
    /// Create a base directive event
    pub fn base(iri: impl AsRef<str>) -> Self {
        Event::Base {
            iri: Arc::from(iri.as_ref()),
        }
    }

    /// Create a prefix directive event
    pub fn prefix(name: impl AsRef<str>, iri: impl AsRef<str>) -> Self {
        Event::Prefix {
            name: Arc::from(name.as_ref()),
            iri: Arc::from(iri.as_ref()),
        }
    }

    /// Create a statement event with no structural flags
    pub fn statement(statement: Statement) -> Self {
        Event::Statement {
            statement,
            flags: StatementFlags::default(),
        }
    }

    /// Create a statement event with flags
    pub fn statement_with_flags(statement: Statement, flags: StatementFlags) -> Self {
        Event::Statement { statement, flags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::{Predicate, Subject};
    use crate::term::Term;

    #[test]
    fn test_event_constructors() {
        let event = Event::prefix("ex", "http://example.org/");
        assert_eq!(
            event,
            Event::Prefix {
                name: Arc::from("ex"),
                iri: Arc::from("http://example.org/"),
            }
        );

        let stmt = Statement::triple(
            Subject::iri("http://a"),
            Predicate::iri("http://b"),
            Term::integer(1),
        );
        let event = Event::statement(stmt.clone());
        assert_eq!(
            event,
            Event::Statement {
                statement: stmt,
                flags: StatementFlags::default(),
            }
        );
    }
}
