//! LU decomposition solver (Doolittle)
//!
//! Factors A = L * U with L unit lower triangular and U upper triangular,
//! then solves L * y = b and U * x = y.
//!
//! No pivoting is performed: a matrix whose leading principal minors vanish
//! fails with [`SolverError::ZeroPivot`] even when it is invertible. Use
//! [`lu_solve_pivoted`](super::lu_solve_pivoted) for those systems.

use super::DirectConfig;
use crate::dense::{
    back_substitution, check_length, check_matrix, check_system, forward_substitution_unit,
    matmul, partial_dot,
};
use crate::error::{Result, SolverError};
use crate::traits::ComplexField;
use ndarray::{Array1, Array2};
use num_traits::Float;

/// Doolittle factors of a square matrix
#[derive(Debug, Clone)]
pub struct LuFactors<T: ComplexField> {
    /// Unit lower triangular factor
    pub l: Array2<T>,
    /// Upper triangular factor
    pub u: Array2<T>,
}

impl<T: ComplexField> LuFactors<T> {
    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.u.nrows()
    }

    /// Recompute L * U
    pub fn reconstruct(&self) -> Array2<T> {
        matmul(&self.l, &self.u)
    }

    /// Solve Ax = b using the pre-computed factors
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        check_length("right-hand side", self.dim(), b.len())?;
        let y = forward_substitution_unit(&self.l, b);
        Ok(back_substitution(&self.u, &y))
    }
}

/// Compute the Doolittle factorization A = L * U
///
/// # Errors
/// [`SolverError::ZeroPivot`] when some `|U[i,i]|` falls below
/// `config.pivot_threshold`.
pub fn lu_factorize<T: ComplexField>(
    a: &Array2<T>,
    config: &DirectConfig<T::Real>,
) -> Result<LuFactors<T>> {
    let n = check_matrix(a)?;
    let mut l = Array2::<T>::zeros((n, n));
    let mut u = Array2::<T>::zeros((n, n));

    for i in 0..n {
        // Row i of U
        for k in i..n {
            let sum = partial_dot(l.row(i), u.column(k), 0..i);
            u[[i, k]] = a[[i, k]] - sum;
        }

        let pivot = u[[i, i]];
        let magnitude = pivot.norm();
        if magnitude < config.pivot_threshold || magnitude.is_nan() {
            return Err(SolverError::ZeroPivot {
                index: i,
                value: pivot.magnitude(),
            });
        }

        // Column i of L
        l[[i, i]] = T::one();
        for k in (i + 1)..n {
            let sum = partial_dot(l.row(k), u.column(i), 0..i);
            l[[k, i]] = (a[[k, i]] - sum) / pivot;
        }
    }

    Ok(LuFactors { l, u })
}

/// Solve Ax = b by Doolittle LU decomposition with the default pivot threshold
///
/// Returns the solution together with the factors.
pub fn lu_decomposition<T>(a: &Array2<T>, b: &Array1<T>) -> Result<(Array1<T>, LuFactors<T>)>
where
    T: ComplexField,
    DirectConfig<T::Real>: Default,
{
    lu_decomposition_with_config(a, b, &DirectConfig::default())
}

/// Solve Ax = b by Doolittle LU decomposition
pub fn lu_decomposition_with_config<T: ComplexField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &DirectConfig<T::Real>,
) -> Result<(Array1<T>, LuFactors<T>)> {
    check_system(a, b)?;
    let factors = lu_factorize(a, config)?;
    let x = factors.solve(b)?;
    Ok((x, factors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::matvec;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_lu_reference_system() {
        let a = array![[4.0_f64, 1.0, 1.0], [1.0, 5.0, 2.0], [1.0, 2.0, 6.0]];
        let b = array![12.0_f64, 13.0, 22.0];

        let (x, _) = lu_decomposition(&a, &b).expect("LU decomposition should succeed");

        assert_relative_eq!(x[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-10);
        assert_relative_eq!(x[2], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_lu_factor_structure() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];

        let factors = lu_factorize(&a, &DirectConfig::default())
            .expect("Factorization should succeed");

        for i in 0..3 {
            assert_eq!(factors.l[[i, i]], 1.0);
            for j in (i + 1)..3 {
                assert_eq!(factors.l[[i, j]], 0.0);
                assert_eq!(factors.u[[j, i]], 0.0);
            }
        }

        let lu = factors.reconstruct();
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(lu[[i, j]], a[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_lu_known_factors() {
        let a = array![[2.0_f64, 1.0], [4.0, 5.0]];

        let factors = lu_factorize(&a, &DirectConfig::default())
            .expect("Factorization should succeed");

        assert_eq!(factors.l, array![[1.0, 0.0], [2.0, 1.0]]);
        assert_eq!(factors.u, array![[2.0, 1.0], [0.0, 3.0]]);
    }

    #[test]
    fn test_lu_factors_solve_multiple_rhs() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];
        let (_, factors) =
            lu_decomposition(&a, &array![1.0_f64, 2.0, 3.0]).expect("LU should succeed");

        let b2 = array![4.0_f64, 5.0, 6.0];
        let x2 = factors.solve(&b2).expect("Solve should succeed");

        let ax2 = matvec(&a, &x2);
        for i in 0..3 {
            assert_relative_eq!(ax2[i], b2[i], epsilon = 1e-10);
        }

        assert!(factors.solve(&array![1.0_f64]).is_err());
    }

    #[test]
    fn test_lu_zero_leading_pivot() {
        // Invertible, but the unpivoted factorization cannot start
        let a = array![[0.0_f64, 1.0], [1.0, 0.0]];
        let b = array![1.0_f64, 1.0];

        let err = lu_decomposition(&a, &b).unwrap_err();
        assert_eq!(
            err,
            SolverError::ZeroPivot {
                index: 0,
                value: 0.0
            }
        );
    }

    #[test]
    fn test_lu_singular_last_pivot() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        let b = array![1.0_f64, 2.0];

        let err = lu_decomposition(&a, &b).unwrap_err();
        assert!(matches!(err, SolverError::ZeroPivot { index: 1, .. }));
    }

    #[test]
    fn test_lu_identity() {
        let n = 5;
        let a = Array2::<f64>::eye(n);
        let b = Array1::from_iter((1..=n).map(|i| i as f64));

        let (x, factors) = lu_decomposition(&a, &b).expect("LU should succeed");

        assert_eq!(x, b);
        assert_eq!(factors.l, a);
        assert_eq!(factors.u, a);
    }
}
