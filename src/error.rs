use thiserror::Error;

/// Errors reported by [`List`](crate::List) operations.
///
/// Every failing operation leaves the list exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The operation needs at least one element.
    #[error("list is empty")]
    EmptyList,

    /// The anchor element, or the neighbour it was asked for, is not in the list.
    #[error("element not found")]
    NotFound,

    #[error("position {position} is out of range for length {len}")]
    OutOfRange { position: usize, len: usize },

    /// An unrecognized topology tag.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("out of memory")]
    OutOfMemory,
}

/// Errors reported by [`Vector`](crate::Vector) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("vector is empty")]
    EmptyVector,

    #[error("position {position} is out of range for length {len}")]
    OutOfRange { position: usize, len: usize },

    #[error("out of memory")]
    OutOfMemory,
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;
