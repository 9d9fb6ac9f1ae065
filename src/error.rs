//! Error types for graphstep operations.
//!
//! Only malformed input is an error. Unreachable vertices and empty
//! knapsack inputs are ordinary results (infinite cost, empty selection).

use std::fmt;

/// Main error type for graphstep operations.
///
/// # Examples
///
/// ```
/// use graphstep::error::GraphstepError;
///
/// let err = GraphstepError::Shape {
///     expected: 3,
///     actual: 2,
///     row: Some(1),
/// };
/// assert!(err.to_string().contains("row 1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GraphstepError {
    /// Matrix is not square: wrong row count or a ragged row.
    Shape {
        /// Expected length (the matrix order)
        expected: usize,
        /// Length actually found
        actual: usize,
        /// Offending row, `None` when the row count itself is wrong
        row: Option<usize>,
    },

    /// Vertex index outside `0..order`.
    VertexOutOfBounds {
        /// Requested vertex
        vertex: usize,
        /// Number of vertices in the matrix
        order: usize,
    },

    /// Input exceeds a configured size ceiling.
    InputTooLarge {
        /// What was being counted
        what: &'static str,
        /// Configured ceiling
        limit: usize,
        /// Size actually supplied
        actual: usize,
    },

    /// Invalid parameter value provided.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl fmt::Display for GraphstepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphstepError::Shape {
                expected,
                actual,
                row: None,
            } => {
                write!(
                    f,
                    "Matrix shape error: expected {expected} rows, got {actual}"
                )
            }
            GraphstepError::Shape {
                expected,
                actual,
                row: Some(row),
            } => {
                write!(
                    f,
                    "Matrix shape error: row {row} has {actual} entries, expected {expected}"
                )
            }
            GraphstepError::VertexOutOfBounds { vertex, order } => {
                write!(
                    f,
                    "Vertex {vertex} out of bounds for graph of order {order}"
                )
            }
            GraphstepError::InputTooLarge {
                what,
                limit,
                actual,
            } => {
                write!(f, "Input too large: {actual} {what}, limit is {limit}")
            }
            GraphstepError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter: {param} = {value}, expected {constraint}"
                )
            }
        }
    }
}

impl std::error::Error for GraphstepError {}

impl GraphstepError {
    /// Create a ragged-row shape error.
    #[must_use]
    pub fn ragged_row(row: usize, expected: usize, actual: usize) -> Self {
        Self::Shape {
            expected,
            actual,
            row: Some(row),
        }
    }

    /// Check `vertex < order`.
    pub fn check_vertex(vertex: usize, order: usize) -> Result<()> {
        if vertex >= order {
            return Err(Self::VertexOutOfBounds { vertex, order });
        }
        Ok(())
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, GraphstepError>;
