use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the wayfarer library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Map database could not be located at the given path.
    #[error("map database not found at {path}")]
    MapFileNotFound { path: PathBuf },

    /// Raised when the database declares fewer places than the minimum of one.
    #[error("map database declares too few places ({count}); at least 1 required")]
    TooFewPlaces { count: i64 },

    /// Raised when the database declares more places than the graph capacity.
    #[error("map database declares {count} places; at most {max} allowed")]
    TooManyPlaces { count: usize, max: usize },

    /// Raised when an adjacency stanza or road endpoint names a place that is
    /// not in the database header. Treated as a corrupt database.
    #[error("unknown place name in map database: {name}")]
    UnknownPlace { name: String },

    /// Raised when a route computation starts from a place that is not in the
    /// graph.
    #[error("unknown start place: {name}")]
    UnknownStart { name: String },

    /// Raised when the database header lists the same place name twice, which
    /// would make name resolution ambiguous.
    #[error("duplicate place name in map database: {name}")]
    DuplicatePlace { name: String },

    /// Raised for an empty place name or one beyond the length bound.
    #[error("invalid place name {name:?}: must be 1 to 20 characters")]
    InvalidPlaceName { name: String },

    /// Raised for truncated input or a token that does not parse as expected.
    #[error("malformed map database: {message}")]
    MalformedDatabase { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
