//! LU factorization with partial pivoting
//!
//! An extension beyond the Doolittle solver: rows are exchanged so that each
//! pivot is the largest-magnitude entry of its column, giving P * A = L * U.
//! This handles invertible matrices that [`lu_decomposition`](super::lu_decomposition)
//! rejects with a zero pivot.

use super::DirectConfig;
use crate::dense::{
    back_substitution, check_length, check_matrix, forward_substitution_unit, swap_rows,
};
use crate::error::{Result, SolverError};
use crate::traits::ComplexField;
use ndarray::{Array1, Array2};
use num_traits::Float;

/// Pivoted LU factorization result
///
/// Stores L and U in a single matrix along with the row permutation.
#[derive(Debug, Clone)]
pub struct PivotedLu<T: ComplexField> {
    /// Combined L and U matrices (L is unit lower triangular, stored below diagonal)
    lu: Array2<T>,
    /// `perm[i]` is the row of A that ended up in row i
    perm: Vec<usize>,
}

impl<T: ComplexField> PivotedLu<T> {
    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.perm.len()
    }

    /// Row permutation: row `i` of P * A is row `permutation()[i]` of A
    pub fn permutation(&self) -> &[usize] {
        &self.perm
    }

    /// Unit lower triangular factor
    pub fn lower(&self) -> Array2<T> {
        let n = self.dim();
        Array2::from_shape_fn((n, n), |(i, j)| match i.cmp(&j) {
            std::cmp::Ordering::Greater => self.lu[[i, j]],
            std::cmp::Ordering::Equal => T::one(),
            std::cmp::Ordering::Less => T::zero(),
        })
    }

    /// Upper triangular factor
    pub fn upper(&self) -> Array2<T> {
        let n = self.dim();
        Array2::from_shape_fn((n, n), |(i, j)| {
            if i <= j { self.lu[[i, j]] } else { T::zero() }
        })
    }

    /// Solve Ax = b using the pre-computed factorization
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        check_length("right-hand side", self.dim(), b.len())?;

        let pb: Array1<T> = self.perm.iter().map(|&row| b[row]).collect();

        // Only the strictly lower part of `lu` is read here, and only the
        // upper part below
        let y = forward_substitution_unit(&self.lu, &pb);
        Ok(back_substitution(&self.lu, &y))
    }
}

/// Compute LU factorization with partial pivoting
///
/// # Errors
/// [`SolverError::SingularMatrix`] when the best pivot of some column has
/// magnitude below `config.pivot_threshold`.
pub fn lu_factorize_pivoted<T: ComplexField>(
    a: &Array2<T>,
    config: &DirectConfig<T::Real>,
) -> Result<PivotedLu<T>> {
    let n = check_matrix(a)?;
    let mut lu = a.clone();
    let mut perm: Vec<usize> = (0..n).collect();

    for k in 0..n {
        let mut max_val = lu[[k, k]].norm();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = lu[[i, k]].norm();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val < config.pivot_threshold || max_val.is_nan() {
            return Err(SolverError::SingularMatrix {
                index: k,
                pivot: lu[[max_row, k]].magnitude(),
            });
        }

        if max_row != k {
            swap_rows(&mut lu, k, max_row);
            perm.swap(k, max_row);
        }

        // Compute multipliers and eliminate
        let pivot_inv = lu[[k, k]].inv();
        for i in (k + 1)..n {
            let mult = lu[[i, k]] * pivot_inv;
            lu[[i, k]] = mult;

            for j in (k + 1)..n {
                let update = mult * lu[[k, j]];
                lu[[i, j]] -= update;
            }
        }
    }

    Ok(PivotedLu { lu, perm })
}

/// Solve Ax = b using LU decomposition with partial pivoting
pub fn lu_solve_pivoted<T>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>>
where
    T: ComplexField,
    DirectConfig<T::Real>: Default,
{
    check_length("right-hand side", a.nrows(), b.len())?;
    let factorization = lu_factorize_pivoted(a, &DirectConfig::default())?;
    factorization.solve(b)
}
