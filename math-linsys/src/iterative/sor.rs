//! SOR (Successive Over-Relaxation) solver
//!
//! Computes the Gauss-Seidel value for each component and blends it with the
//! previous iterate: x_i = (1 - ω) x_old_i + ω x_gs_i. ω = 1 is exactly
//! Gauss-Seidel; for symmetric positive definite systems convergence requires
//! 0 < ω < 2.

use super::{SolveResult, SweepControl, iterate, prepare};
use crate::dense::partial_dot;
use crate::error::Result;
use crate::traits::ComplexField;
use ndarray::{Array1, Array2};
use num_traits::{Float, One, ToPrimitive, Zero};

/// SOR solver configuration
#[derive(Debug, Clone)]
pub struct SorConfig<R> {
    /// Relaxation factor ω (not range-checked)
    pub omega: R,
    /// Maximum number of sweeps
    pub max_iterations: usize,
    /// Absolute tolerance on the infinity norm of the update between sweeps
    pub tolerance: R,
    /// Diagonal entries with magnitude below this value are rejected
    pub diagonal_threshold: R,
    /// Print progress every N iterations (0 = no output)
    pub print_interval: usize,
}

impl Default for SorConfig<f64> {
    fn default() -> Self {
        Self {
            omega: 1.25,
            max_iterations: 100,
            tolerance: 1e-6,
            diagonal_threshold: 1e-10,
            print_interval: 0,
        }
    }
}

impl Default for SorConfig<f32> {
    fn default() -> Self {
        Self {
            omega: 1.25,
            max_iterations: 100,
            tolerance: 1e-5,
            diagonal_threshold: 1e-6,
            print_interval: 0,
        }
    }
}

impl<R: Float> SorConfig<R> {
    /// Set the relaxation factor
    pub fn with_omega(mut self, omega: R) -> Self {
        self.omega = omega;
        self
    }

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

/// Solve Ax = b using SOR from a zero initial guess
pub fn sor<T: ComplexField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &SorConfig<T::Real>,
) -> Result<SolveResult<T>> {
    sor_with_guess(a, b, None, config)
}

/// Solve Ax = b using SOR with an initial guess
///
/// # Errors
/// [`SolverError::ZeroDiagonal`](crate::SolverError::ZeroDiagonal) before any
/// sweep when some `|A[i,i]|` is below `config.diagonal_threshold`.
/// Divergence, e.g. from ω outside (0, 2), shows up only as
/// `converged == false`.
pub fn sor_with_guess<T: ComplexField>(
    a: &Array2<T>,
    b: &Array1<T>,
    x0: Option<&Array1<T>>,
    config: &SorConfig<T::Real>,
) -> Result<SolveResult<T>> {
    let x = prepare(a, b, x0, config.diagonal_threshold)?;
    let n = x.len();

    let two = T::Real::one() + T::Real::one();
    if config.omega <= T::Real::zero() || config.omega >= two {
        log::debug!(
            "SOR: omega = {} is outside (0, 2), iteration may diverge",
            config.omega.to_f64().unwrap_or(f64::NAN)
        );
    }

    let omega = T::from_real(config.omega);
    let keep = T::from_real(T::Real::one() - config.omega);

    let control = SweepControl {
        tolerance: config.tolerance,
        max_iterations: config.max_iterations,
        print_interval: config.print_interval,
    };

    Ok(iterate("SOR", x, &control, |x_old, x| {
        for i in 0..n {
            let s1 = partial_dot(a.row(i), x.view(), 0..i);
            let s2 = partial_dot(a.row(i), x_old.view(), (i + 1)..n);
            let sigma = (b[i] - s1 - s2) / a[[i, i]];
            x[i] = keep * x_old[i] + omega * sigma;
        }
    }))
}
