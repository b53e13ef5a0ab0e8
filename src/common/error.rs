//! Error types for the B-tree index.
//!
//! Insert, lookup and count never fail. Errors only come out of the
//! diagnostic surface: writing a dump to a sink, checked handle lookups,
//! and structural verification.

use thiserror::Error;

use crate::common::NodeId;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the index.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while writing a diagnostic dump.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The handle was never issued by this pool.
    #[error("Invalid node handle: {0}")]
    InvalidNodeId(NodeId),

    /// A structural invariant does not hold.
    ///
    /// This indicates a bug in the insert path.
    #[error("Invariant violated at {node}: {reason}")]
    InvariantViolation { node: NodeId, reason: String },
}
