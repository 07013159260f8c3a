use std::fmt;

/// Unified error type for the sorted-vector engine.
///
/// Every variant is a caller precondition failure. Nothing here is
/// transient, so none of them are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A batch delete or erase was called with nothing to remove.
    EmptySelection,
    /// A selected key does not exist in the sequence.
    KeyNotFound(String),
    /// An inserted key already exists (only when duplicate inserts are rejected).
    DuplicateKey(String),
    /// A point delete addressed a slot past the end.
    PositionOutOfRange { position: usize, len: usize },
    /// Erase positions were unsorted, repeated, or out of range.
    InvalidPositions(String),
    /// Input claimed to be sorted was not. `position` is the first offending index.
    NotSorted { position: usize },
    /// A random selection asked for at least as many keys as exist.
    SelectionTooLarge { requested: usize, available: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySelection => write!(f, "Empty selection"),
            Error::KeyNotFound(key) => write!(f, "Key not found: {key}"),
            Error::DuplicateKey(key) => write!(f, "Duplicate key: {key}"),
            Error::PositionOutOfRange { position, len } => {
                write!(f, "Position {position} out of range for length {len}")
            }
            Error::InvalidPositions(msg) => write!(f, "Invalid positions: {msg}"),
            Error::NotSorted { position } => write!(f, "Not sorted at position {position}"),
            Error::SelectionTooLarge { requested, available } => write!(
                f,
                "Selection of {requested} keys must be smaller than {available}"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
