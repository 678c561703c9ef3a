//! Error types for the linear system solvers.
//!
//! Breakdowns of an algorithm (a vanishing pivot or diagonal) and usage
//! errors (inconsistent dimensions) are reported through [`SolverError`].
//! Slow convergence is not an error: iterative solvers report it through
//! [`SolveResult::converged`](crate::SolveResult::converged).

use thiserror::Error;

/// Errors that can occur while solving a linear system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Gaussian elimination found no usable pivot in a column.
    #[error("matrix is singular or nearly singular: best pivot in column {index} is {pivot:e}")]
    SingularMatrix {
        /// Column in which elimination stopped
        index: usize,
        /// Magnitude of the best available pivot
        pivot: f64,
    },

    /// A diagonal entry of U vanished during unpivoted LU factorization.
    #[error("zero pivot in LU factorization: |U[{index},{index}]| = {value:e}")]
    ZeroPivot {
        /// Row/column of the vanishing pivot
        index: usize,
        /// Magnitude of the pivot
        value: f64,
    },

    /// A diagonal entry of A is too small for an iterative sweep to divide by.
    #[error("zero diagonal element |A[{index},{index}]| = {value:e}, iteration cannot proceed")]
    ZeroDiagonal {
        /// Row/column of the offending diagonal entry
        index: usize,
        /// Magnitude of the diagonal entry
        value: f64,
    },

    /// The coefficient matrix is not square.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// A vector does not match the system dimension.
    #[error("{what} dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Which operand was wrong ("right-hand side", "initial guess", ...)
        what: &'static str,
        /// System dimension
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// The system has dimension zero.
    #[error("empty system: dimension must be positive")]
    EmptySystem,
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Returns `true` if the algorithm itself broke down on the given matrix.
    ///
    /// This includes `SingularMatrix`, `ZeroPivot` and `ZeroDiagonal`.
    pub fn is_breakdown(&self) -> bool {
        matches!(
            self,
            SolverError::SingularMatrix { .. }
                | SolverError::ZeroPivot { .. }
                | SolverError::ZeroDiagonal { .. }
        )
    }

    /// Returns `true` if the inputs had inconsistent shapes.
    ///
    /// This includes `NotSquare`, `DimensionMismatch` and `EmptySystem`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            SolverError::NotSquare { .. }
                | SolverError::DimensionMismatch { .. }
                | SolverError::EmptySystem
        )
    }
}
