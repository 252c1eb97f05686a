//! Graph-specific error types.

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors reported by graph operations.
///
/// Every variant describes a caller bug: the container never retries and
/// never mutates itself before returning one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a node that is not stored in the graph.
    #[error("Cannot call {operation} when a referenced node does not exist in the graph")]
    MissingNode { operation: &'static str },

    /// An operation needed a dereferenceable cursor but got the end cursor.
    #[error("Cannot call {operation} with the end cursor")]
    EndCursor { operation: &'static str },

    /// A cursor designates an edge that is no longer stored in the graph.
    #[error("Cursor designates an edge that is not stored in the graph")]
    StaleCursor,

    /// A cursor range whose start comes after its end.
    #[error("Invalid cursor range: first is positioned after last")]
    InvalidRange,

    /// Internal consistency check failed.
    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

impl GraphError {
    pub(crate) fn missing(operation: &'static str) -> Self {
        GraphError::MissingNode { operation }
    }
}
