//! Gaussian elimination with partial pivoting
//!
//! Forward elimination reduces the system to upper triangular form, choosing
//! the largest-magnitude entry of each column as pivot, then back
//! substitution recovers the solution.

use super::DirectConfig;
use crate::dense::{back_substitution, check_system, subtract_scaled_row, swap_rows};
use crate::error::{Result, SolverError};
use crate::traits::ComplexField;
use ndarray::{Array1, Array2};
use num_traits::Float;

/// Solve Ax = b by Gaussian elimination with the default pivot threshold
pub fn gauss_elimination<T>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>>
where
    T: ComplexField,
    DirectConfig<T::Real>: Default,
{
    gauss_elimination_with_config(a, b, &DirectConfig::default())
}

/// Solve Ax = b by Gaussian elimination with partial pivoting
///
/// `a` and `b` are copied; the caller's buffers are left untouched.
///
/// # Errors
/// [`SolverError::SingularMatrix`] when the best pivot of some column has
/// magnitude below `config.pivot_threshold`.
pub fn gauss_elimination_with_config<T: ComplexField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &DirectConfig<T::Real>,
) -> Result<Array1<T>> {
    let n = check_system(a, b)?;
    let mut a = a.clone();
    let mut b = b.clone();

    for i in 0..n {
        // Find pivot (first maximal entry wins on ties)
        let mut pivot_row = i;
        let mut max_val = a[[i, i]].norm();
        for r in (i + 1)..n {
            let val = a[[r, i]].norm();
            if val > max_val {
                max_val = val;
                pivot_row = r;
            }
        }

        if pivot_row != i {
            log::debug!("gauss: column {i}, swapping rows {i} and {pivot_row}");
            swap_rows(&mut a, i, pivot_row);
            b.swap(i, pivot_row);
        }

        let pivot = a[[i, i]];
        let magnitude = pivot.norm();
        if magnitude < config.pivot_threshold || magnitude.is_nan() {
            return Err(SolverError::SingularMatrix {
                index: i,
                pivot: pivot.magnitude(),
            });
        }

        for j in (i + 1)..n {
            let factor = a[[j, i]] / pivot;
            subtract_scaled_row(&mut a, j, i, factor, i..n);
            let bi = b[i];
            b[j] -= factor * bi;
        }
    }

    Ok(back_substitution(&a, &b))
}
