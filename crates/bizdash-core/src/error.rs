use std::fmt;

/// Result type for bizdash-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the list-view layer
#[derive(Debug)]
pub enum Error {
    /// Record layer error
    Types(bizdash_types::Error),

    /// Row with the given identity does not exist in the source
    NotFound(String),

    /// Two rows of one source share an identity
    DuplicateRowId(String),

    /// Two navigation links share a path
    DuplicateNavPath(String),

    /// A row action callback failed
    Action(String),

    /// Data source could not serve the request
    Source(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "Record error: {}", err),
            Error::NotFound(id) => write!(f, "Row not found: {}", id),
            Error::DuplicateRowId(id) => write!(f, "Duplicate row id: {}", id),
            Error::DuplicateNavPath(path) => write!(f, "Duplicate navigation path: {}", path),
            Error::Action(msg) => write!(f, "Action failed: {}", msg),
            Error::Source(msg) => write!(f, "Data source error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::NotFound(_)
            | Error::DuplicateRowId(_)
            | Error::DuplicateNavPath(_)
            | Error::Action(_)
            | Error::Source(_) => None,
        }
    }
}

impl From<bizdash_types::Error> for Error {
    fn from(err: bizdash_types::Error) -> Self {
        Error::Types(err)
    }
}
