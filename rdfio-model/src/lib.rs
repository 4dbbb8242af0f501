//! Term, statement, and event model for the rdfio codec
//!
//! This crate provides the data types shared by the streaming reader and
//! writer: terms, position-typed statements, document events, and the
//! structural flags that preserve anonymous-node and collection shorthand
//! across a parse/serialize round trip.
//!
//! # Key Design Principles
//!
//! 1. **Position-typed statements** - Subject, predicate, and graph
//!    positions narrow `Term` so invalid statements are unrepresentable.
//!
//! 2. **Datatype from the value** - A literal's datatype is implied by its
//!    value variant. The "at most one of language/datatype" rule is
//!    structural, not checked.
//!
//! 3. **CURIEs are first-class** - `prefix:name` shorthand survives in the
//!    model; expansion and abbreviation are writer concerns.
//!
//! # Example
//!
//! ```
//! use rdfio_model::{Predicate, Statement, Subject, Term};
//!
//! let stmt = Statement::triple(
//!     Subject::iri("http://example.org/alice"),
//!     Predicate::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! );
//! assert!(stmt.graph().is_none());
//! ```

mod error;
mod event;
mod flags;
mod statement;
mod term;
pub mod vocab;

pub use error::{ModelError, Result};
pub use event::Event;
pub use flags::StatementFlags;
pub use statement::{Predicate, Statement, Subject};
pub use term::{BlankId, Literal, LiteralValue, Term};
