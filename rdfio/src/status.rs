//! Engine status codes and their translation into errors
//!
//! Handler callbacks report outcomes as `Status` values rather than errors,
//! so a handler written against the callback API never constructs error
//! types itself. The reader translates any non-success status into an
//! error at the single point where the callback returns.

/// Outcome of an engine operation or handler callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Operation completed
    Success,
    /// Operation did not complete, no further detail
    Failure,
    /// Unclassified error
    Unknown,
    /// Input violated the syntax of the selected format
    BadSyntax,
    /// An argument was invalid, missing, or referenced a released resource
    BadArg,
    /// A referenced item does not exist
    NotFound,
    /// An identifier was declared twice with conflicting values
    IdClash,
    /// A CURIE used an undeclared prefix
    BadCurie,
    /// Internal inconsistency
    Internal,
}

impl Status {
    /// True for `Success`
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Translate a non-success status into a `StatusError` carrying context
    ///
    /// This is the only place engine statuses become errors; everything
    /// upstream passes `Status` values around.
    pub fn check(self, context: &str) -> Result<(), StatusError> {
        let context = context.to_string();
        match self {
            Status::Success => Ok(()),
            Status::Failure => Err(StatusError::Failure(context)),
            Status::Unknown => Err(StatusError::Unknown(context)),
            Status::BadSyntax => Err(StatusError::BadSyntax(context)),
            Status::BadArg => Err(StatusError::BadArg(context)),
            Status::NotFound => Err(StatusError::NotFound(context)),
            Status::IdClash => Err(StatusError::IdClash(context)),
            Status::BadCurie => Err(StatusError::BadCurie(context)),
            Status::Internal => Err(StatusError::Internal(context)),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Status::Success => "success",
            Status::Failure => "failure",
            Status::Unknown => "unknown error",
            Status::BadSyntax => "bad syntax",
            Status::BadArg => "bad argument",
            Status::NotFound => "not found",
            Status::IdClash => "identifier clash",
            Status::BadCurie => "bad CURIE",
            Status::Internal => "internal error",
        };
        write!(f, "{name}")
    }
}

/// A non-success status with the context it arose in
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("operation failed: {0}")]
    Failure(String),

    #[error("unknown error: {0}")]
    Unknown(String),

    #[error("bad syntax: {0}")]
    BadSyntax(String),

    #[error("bad argument: {0}")]
    BadArg(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("identifier clash: {0}")]
    IdClash(String),

    #[error("bad CURIE: {0}")]
    BadCurie(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl StatusError {
    /// The status this error was translated from
    pub fn status(&self) -> Status {
        match self {
            StatusError::Failure(_) => Status::Failure,
            StatusError::Unknown(_) => Status::Unknown,
            StatusError::BadSyntax(_) => Status::BadSyntax,
            StatusError::BadArg(_) => Status::BadArg,
            StatusError::NotFound(_) => Status::NotFound,
            StatusError::IdClash(_) => Status::IdClash,
            StatusError::BadCurie(_) => Status::BadCurie,
            StatusError::Internal(_) => Status::Internal,
        }
    }
}
