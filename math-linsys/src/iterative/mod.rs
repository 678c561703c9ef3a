//! Stationary iterative solvers for linear systems
//!
//! This module provides fixed-point methods for small dense systems:
//! - [`gauss_seidel`]: Gauss-Seidel with immediate-update coupling
//! - [`sor`]: Successive Over-Relaxation, Gauss-Seidel blended with a relaxation factor
//!
//! Both record every iterate, including the initial guess, so callers can
//! inspect or plot the convergence history.

mod gauss_seidel;
mod sor;

pub use gauss_seidel::{GaussSeidelConfig, gauss_seidel, gauss_seidel_with_guess};
pub use sor::{SorConfig, sor, sor_with_guess};

use crate::dense::{check_length, check_system, diff_norm2, diff_norm_inf};
use crate::error::{Result, SolverError};
use crate::traits::ComplexField;
use ndarray::{Array1, Array2};
use num_traits::{Float, ToPrimitive};

/// Iterative solver result
#[derive(Debug, Clone)]
pub struct SolveResult<T: ComplexField> {
    /// Solution vector (last iterate)
    pub x: Array1<T>,
    /// Number of sweeps performed
    pub iterations: usize,
    /// Whether the update norm dropped below the tolerance
    pub converged: bool,
    /// Infinity norm of the last sweep's update, `None` if no sweep ran
    pub last_update: Option<T::Real>,
    /// Every iterate, starting with the initial guess
    pub history: Vec<Array1<T>>,
}

impl<T: ComplexField> SolveResult<T> {
    /// Euclidean error of every recorded iterate against a known solution
    pub fn error_history(&self, exact: &Array1<T>) -> Vec<T::Real> {
        self.history.iter().map(|x| diff_norm2(x, exact)).collect()
    }
}

/// Check a system and initial guess, returning the starting iterate
pub(crate) fn prepare<T: ComplexField>(
    a: &Array2<T>,
    b: &Array1<T>,
    x0: Option<&Array1<T>>,
    diagonal_threshold: T::Real,
) -> Result<Array1<T>> {
    let n = check_system(a, b)?;
    let x = match x0 {
        Some(x0) => {
            check_length("initial guess", n, x0.len())?;
            x0.clone()
        }
        None => Array1::zeros(n),
    };

    for i in 0..n {
        let d = a[[i, i]].norm();
        if d < diagonal_threshold || d.is_nan() {
            return Err(SolverError::ZeroDiagonal {
                index: i,
                value: a[[i, i]].magnitude(),
            });
        }
    }

    Ok(x)
}

/// Sweep budget and stopping rule shared by the stationary methods
pub(crate) struct SweepControl<R> {
    pub tolerance: R,
    pub max_iterations: usize,
    pub print_interval: usize,
}

/// Run sweeps until the update norm drops below the tolerance
///
/// `sweep(x_old, x)` must overwrite `x` (which starts equal to `x_old`) with
/// the next iterate.
pub(crate) fn iterate<T, F>(
    method: &str,
    x0: Array1<T>,
    control: &SweepControl<T::Real>,
    mut sweep: F,
) -> SolveResult<T>
where
    T: ComplexField,
    F: FnMut(&Array1<T>, &mut Array1<T>),
{
    let mut x = x0;
    let mut history = Vec::with_capacity(control.max_iterations + 1);
    history.push(x.clone());
    let mut last_update = None;

    for iter in 0..control.max_iterations {
        let x_old = x.clone();
        sweep(&x_old, &mut x);
        history.push(x.clone());

        let update = diff_norm_inf(&x, &x_old);
        last_update = Some(update);

        if control.print_interval > 0 && (iter + 1) % control.print_interval == 0 {
            log::info!(
                "{} iteration {}: update norm = {:.6e}",
                method,
                iter + 1,
                update.to_f64().unwrap_or(0.0)
            );
        }

        if update < control.tolerance {
            log::debug!("{} converged after {} iterations", method, iter + 1);
            return SolveResult {
                x,
                iterations: iter + 1,
                converged: true,
                last_update,
                history,
            };
        }
    }

    log::warn!(
        "{} did not converge within {} iterations (update norm = {:.3e})",
        method,
        control.max_iterations,
        last_update.and_then(|u| u.to_f64()).unwrap_or(f64::NAN)
    );

    SolveResult {
        x,
        iterations: control.max_iterations,
        converged: false,
        last_update,
        history,
    }
}
