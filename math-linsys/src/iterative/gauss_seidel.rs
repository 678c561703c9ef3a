//! Gauss-Seidel solver
//!
//! Each sweep updates the components in increasing index order, using the
//! values already updated in the current sweep for lower indices and the
//! previous iterate for higher ones. Converges for strictly diagonally
//! dominant and for symmetric positive definite matrices.

use super::{SolveResult, SweepControl, iterate, prepare};
use crate::dense::partial_dot;
use crate::error::Result;
use crate::traits::ComplexField;
use ndarray::{Array1, Array2};
use num_traits::Float;

/// Gauss-Seidel solver configuration
#[derive(Debug, Clone)]
pub struct GaussSeidelConfig<R> {
    /// Maximum number of sweeps
    pub max_iterations: usize,
    /// Absolute tolerance on the infinity norm of the update between sweeps
    pub tolerance: R,
    /// Diagonal entries with magnitude below this value are rejected
    pub diagonal_threshold: R,
    /// Print progress every N iterations (0 = no output)
    pub print_interval: usize,
}

impl Default for GaussSeidelConfig<f64> {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
            diagonal_threshold: 1e-10,
            print_interval: 0,
        }
    }
}

impl Default for GaussSeidelConfig<f32> {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-5,
            diagonal_threshold: 1e-6,
            print_interval: 0,
        }
    }
}

impl<R: Float> GaussSeidelConfig<R> {
    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: R) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the sweep budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the progress logging interval
    pub fn with_print_interval(mut self, print_interval: usize) -> Self {
        self.print_interval = print_interval;
        self
    }
}

/// Solve Ax = b using Gauss-Seidel iteration from a zero initial guess
pub fn gauss_seidel<T: ComplexField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &GaussSeidelConfig<T::Real>,
) -> Result<SolveResult<T>> {
    gauss_seidel_with_guess(a, b, None, config)
}

/// Solve Ax = b using Gauss-Seidel iteration with an initial guess
///
/// # Errors
/// [`SolverError::ZeroDiagonal`](crate::SolverError::ZeroDiagonal) before any
/// sweep when some `|A[i,i]|` is below `config.diagonal_threshold`.
/// Failing to converge is not an error; check [`SolveResult::converged`].
pub fn gauss_seidel_with_guess<T: ComplexField>(
    a: &Array2<T>,
    b: &Array1<T>,
    x0: Option<&Array1<T>>,
    config: &GaussSeidelConfig<T::Real>,
) -> Result<SolveResult<T>> {
    let x = prepare(a, b, x0, config.diagonal_threshold)?;
    let n = x.len();

    let control = SweepControl {
        tolerance: config.tolerance,
        max_iterations: config.max_iterations,
        print_interval: config.print_interval,
    };

    Ok(iterate("Gauss-Seidel", x, &control, |x_old, x| {
        for i in 0..n {
            let s1 = partial_dot(a.row(i), x.view(), 0..i);
            let s2 = partial_dot(a.row(i), x_old.view(), (i + 1)..n);
            x[i] = (b[i] - s1 - s2) / a[[i, i]];
        }
    }))
}
