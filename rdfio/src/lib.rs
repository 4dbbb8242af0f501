//! Streaming reader and writer for the Turtle family of graph syntaxes.
//!
//! Four syntaxes share one token grammar and one statement model:
//! Turtle, N-Triples, N-Quads, and TriG. A [`Reader`] parses a document
//! and streams directives and statements to a [`ReadHandler`]; a
//! [`Writer`] serializes statements (and, where the syntax allows,
//! directives) to any `io::Write` sink.
//!
//! # Example
//!
//! ```
//! use rdfio::{Reader, ReaderOptions, Syntax, Writer, WriterOptions};
//!
//! let turtle = r#"
//!     @prefix ex: <http://example.org/> .
//!     ex:alice ex:name "Alice" ;
//!              ex:age 30 .
//! "#;
//!
//! let mut reader = Reader::new(Syntax::Turtle, ReaderOptions::default());
//! let statements = reader.parse_to_statements(turtle).unwrap();
//! assert_eq!(statements.len(), 2);
//!
//! let mut writer = Writer::new(Vec::new(), Syntax::NTriples, WriterOptions::default());
//! for statement in &statements {
//!     writer.write_statement(statement).unwrap();
//! }
//! writer.finish().unwrap();
//! let lines = String::from_utf8(writer.into_inner()).unwrap();
//! assert_eq!(lines.lines().count(), 2);
//! ```

pub mod error;
pub mod handle;
pub mod iri;
pub mod lex;
pub mod reader;
pub mod status;
pub mod syntax;
pub mod writer;

pub use error::{Diagnostic, RdfError, Result};
pub use handle::EngineHandle;
pub use reader::{EventCollector, ReadHandler, Reader, ReaderOptions, StatementCollector};
pub use status::{Status, StatusError};
pub use syntax::Syntax;
pub use writer::{Writer, WriterOptions};

// The statement model lives in its own crate; re-export it whole for
// callers that only depend on this one.
pub use rdfio_model as model;
