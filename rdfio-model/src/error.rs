//! Error types for the term and statement model

/// Error type for model-level operations
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Datatype IRI is not one of the registered XSD datatypes
    #[error("unknown datatype IRI: {0}")]
    UnknownDatatype(String),

    /// Lexical form does not parse under the given datatype
    #[error("malformed lexical form {lexical:?} for datatype {datatype}")]
    MalformedLexical { datatype: String, lexical: String },

    /// Language tag attached to a non-string literal value
    #[error("language tag {0:?} is only valid on string literals")]
    LanguageOnNonString(String),

    /// Term is not allowed in subject position (literals)
    #[error("term is not valid as a statement subject: {0}")]
    InvalidSubject(String),

    /// Term is not allowed in predicate position (blank nodes, literals)
    #[error("term is not valid as a statement predicate: {0}")]
    InvalidPredicate(String),
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
