//! Error types shared by model construction and every inference operation.

use thiserror::Error;

/// Result type for HMM construction and inference.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the model and its inference routines.
///
/// Every variant that refers to caller input carries the offending position
/// and value so a bad sequence can be diagnosed without re-scanning it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An emission row does not form a probability distribution.
    #[error("emission probabilities for state {state} sum to {sum}, expected 1")]
    InvalidParameters { state: usize, sum: f64 },

    /// An observation symbol lies outside `[0, symbol_count)`.
    #[error("observation {value} at index {index} is not in 0..{symbol_count}")]
    InvalidObservation {
        index: usize,
        value: usize,
        symbol_count: usize,
    },

    /// A state path entry lies outside `[0, state_count)`.
    #[error("state {value} at path index {index} is not in 0..{state_count}")]
    InvalidStatePath {
        index: usize,
        value: usize,
        state_count: usize,
    },

    /// The operation needs at least one observation.
    #[error("observation sequence is empty")]
    EmptySequence,

    /// A state path was paired with an observation sequence of another length.
    #[error("observation sequence has length {observations} but state path has length {path}")]
    LengthMismatch { observations: usize, path: usize },

    /// Model parameters were supplied with inconsistent shapes.
    #[error("{what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The observation sequence cannot be produced by the model at all.
    #[error("observation sequence has zero probability under the model")]
    ZeroProbability,
}

impl Error {
    pub(crate) fn dimension(what: &'static str, expected: usize, actual: usize) -> Self {
        Error::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }
}
