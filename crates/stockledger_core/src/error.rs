//! # Ledger Error Types
//!
//! All errors that can occur in the stock containers.
//!
//! A missing search target is deliberately NOT an error: `find` returns
//! `Option<usize>` because "not found" is a normal negative result.

use thiserror::Error;

/// Errors that can occur in the stock containers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// A capacity request was zero or negative.
    #[error("invalid capacity: {requested} (must be positive)")]
    InvalidCapacity {
        /// The capacity that was requested.
        requested: i32,
    },

    /// An index fell outside the occupied range.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// The index that was requested.
        index: i32,
        /// The occupied length at the time of the request.
        len: usize,
    },

    /// A slot reservation exceeded the instance's allocation limit.
    #[error("allocation of {requested} slots exceeds the limit of {limit}")]
    AllocationFailed {
        /// Number of slots requested.
        requested: usize,
        /// The configured slot limit.
        limit: usize,
    },

    /// Statistics were requested over zero elements.
    #[error("ledger is empty")]
    Empty,

    /// A grid stock adjustment was zero or negative.
    #[error("invalid quantity: {requested} (must be positive)")]
    InvalidQuantity {
        /// The quantity that was requested.
        requested: i32,
    },
}

/// Result type for stock container operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
