//! Error types for reading and writing RDF text syntaxes

use crate::status::StatusError;
use rdfio_model::ModelError;

/// Error type for reader and writer operations
#[derive(Debug, thiserror::Error)]
pub enum RdfError {
    /// Input violated the grammar of the selected syntax
    #[error("syntax error at position {position}: {message}")]
    Syntax { position: usize, message: String },

    /// A lexical form could not be decoded into a typed value
    #[error("parse error: {0}")]
    Parse(String),

    /// The operation is not meaningful for the selected syntax
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Literal datatype IRI is not one of the registered XSD datatypes
    #[error("unknown datatype IRI: {0}")]
    UnknownDatatype(String),

    /// Syntax name did not match any supported syntax
    #[error("unsupported syntax: {0}")]
    UnsupportedSyntax(String),

    /// A relative IRI could not be resolved
    #[error("IRI resolution error: {0}")]
    IriResolution(String),

    /// A non-success engine status, translated at the callback boundary
    #[error(transparent)]
    Engine(#[from] StatusError),

    /// Underlying I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for reader and writer operations
pub type Result<T> = std::result::Result<T, RdfError>;

impl RdfError {
    /// Create a syntax error
    pub fn syntax(position: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create an unsupported-operation error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation(message.into())
    }
}

impl From<ModelError> for RdfError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownDatatype(iri) => RdfError::UnknownDatatype(iri),
            other => RdfError::Parse(other.to_string()),
        }
    }
}

/// A recoverable oddity noticed while parsing
///
/// Diagnostics are produced in lenient mode for input a strict parse would
/// reject, such as characters that are not legal inside an IRI. They are
/// reported through the handler and never abort the parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Byte offset in the input
    pub position: usize,
    /// Human-readable description
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "at position {}: {}", self.position, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_datatype_passes_through() {
        let err: RdfError = ModelError::UnknownDatatype("http://x".to_string()).into();
        assert!(matches!(err, RdfError::UnknownDatatype(_)));
    }

    #[test]
    fn test_malformed_lexical_becomes_parse_error() {
        let err: RdfError = ModelError::MalformedLexical {
            datatype: "http://www.w3.org/2001/XMLSchema#integer".to_string(),
            lexical: "abc".to_string(),
        }
        .into();
        assert!(matches!(err, RdfError::Parse(_)));
    }
}
