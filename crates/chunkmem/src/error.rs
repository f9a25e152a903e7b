//! Error types for the bulk memory operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur during a bulk memory operation.
///
/// `swap` can only fail with [`MemOpError::InvalidRange`]; `copy` can
/// fail with all three variants; `compare` is infallible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemOpError {
    /// The requested size is zero or exceeds an operand's length.
    InvalidRange {
        /// Number of bytes requested.
        size: usize,
        /// Length of the shortest operand.
        available: usize,
    },
    /// The allocation budget denied the request before any allocation
    /// was attempted.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
        /// The policy's limit in bytes, when it has a concrete one.
        budget: Option<usize>,
    },
    /// The allocation itself failed.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
}

impl fmt::Display for MemOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { size, available } => {
                write!(
                    f,
                    "invalid range: requested {size} bytes, {available} available"
                )
            }
            Self::OutOfMemory {
                requested,
                budget: Some(budget),
            } => {
                write!(
                    f,
                    "allocation denied: requested {requested} bytes exceeds budget of {budget} bytes"
                )
            }
            Self::OutOfMemory {
                requested,
                budget: None,
            } => {
                write!(f, "allocation denied: requested {requested} bytes")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed for {requested} bytes")
            }
        }
    }
}

impl Error for MemOpError {}
