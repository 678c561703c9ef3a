//! Dense linear algebra primitives
//!
//! Row operations, restricted dot products, vector-difference norms and the
//! triangular substitutions shared by the direct and iterative solvers.
//! Everything here works on caller-supplied `ndarray` buffers and has no
//! numeric failure modes; callers guarantee non-vanishing divisors.

use crate::error::{Result, SolverError};
use crate::traits::ComplexField;
use ndarray::{Array1, Array2, ArrayView1};
use num_traits::{Float, Zero};
use std::ops::Range;

/// Validate that `a` is a non-empty square matrix and return its dimension.
pub fn check_matrix<T: ComplexField>(a: &Array2<T>) -> Result<usize> {
    let (rows, cols) = a.dim();
    if rows == 0 {
        return Err(SolverError::EmptySystem);
    }
    if rows != cols {
        return Err(SolverError::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// Validate a system `Ax = b` and return its dimension.
pub fn check_system<T: ComplexField>(a: &Array2<T>, b: &Array1<T>) -> Result<usize> {
    let n = check_matrix(a)?;
    check_length("right-hand side", n, b.len())?;
    Ok(n)
}

/// Validate that a vector operand has the system dimension.
pub fn check_length(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(SolverError::DimensionMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}

/// Swap rows `i` and `j` of `a` in place.
#[inline]
pub fn swap_rows<T: ComplexField>(a: &mut Array2<T>, i: usize, j: usize) {
    if i == j {
        return;
    }
    for c in 0..a.ncols() {
        a.swap([i, c], [j, c]);
    }
}

/// Row combination: `a[target, c] -= factor * a[source, c]` for `c` in `cols`.
#[inline]
pub fn subtract_scaled_row<T: ComplexField>(
    a: &mut Array2<T>,
    target: usize,
    source: usize,
    factor: T,
    cols: Range<usize>,
) {
    for c in cols {
        let s = a[[source, c]];
        a[[target, c]] -= factor * s;
    }
}

/// Partial dot product Σ_{j ∈ range} row_j * x_j
#[inline]
pub fn partial_dot<T: ComplexField>(
    row: ArrayView1<'_, T>,
    x: ArrayView1<'_, T>,
    range: Range<usize>,
) -> T {
    let mut sum = T::zero();
    for j in range {
        sum += row[j] * x[j];
    }
    sum
}

/// Infinity norm of a difference: max_i |x_i - y_i|
///
/// A NaN entry makes the whole norm NaN, so an overflowed iterate can never
/// pass a `< tolerance` test.
#[inline]
pub fn diff_norm_inf<T: ComplexField>(x: &Array1<T>, y: &Array1<T>) -> T::Real {
    assert_eq!(x.len(), y.len(), "Vector lengths must match for norm");
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - yi).norm())
        .fold(T::Real::zero(), |acc, v| if v.is_nan() || v > acc { v } else { acc })
}

/// Euclidean norm of a difference: ||x - y||_2
#[inline]
pub fn diff_norm2<T: ComplexField>(x: &Array1<T>, y: &Array1<T>) -> T::Real {
    assert_eq!(x.len(), y.len(), "Vector lengths must match for norm");
    let mut sum = T::Real::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sum += (xi - yi).norm_sqr();
    }
    sum.sqrt()
}

/// Compute vector 2-norm: ||x||_2 = sqrt(Σ |x_i|^2)
#[inline]
pub fn vector_norm<T: ComplexField>(x: &Array1<T>) -> T::Real {
    let mut sum = T::Real::zero();
    for xi in x.iter() {
        sum += xi.norm_sqr();
    }
    sum.sqrt()
}

/// Matrix-vector product y = A * x
pub fn matvec<T: ComplexField>(a: &Array2<T>, x: &Array1<T>) -> Array1<T> {
    assert_eq!(a.ncols(), x.len(), "Matrix columns must match vector length");
    let x = x.view();
    (0..a.nrows())
        .map(|i| partial_dot(a.row(i), x, 0..a.ncols()))
        .collect()
}

/// Residual r = b - A * x
pub fn residual<T: ComplexField>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> Array1<T> {
    let ax = matvec(a, x);
    b.iter().zip(ax.iter()).map(|(&bi, &axi)| bi - axi).collect()
}

/// Matrix product C = A * B
pub fn matmul<T: ComplexField>(a: &Array2<T>, b: &Array2<T>) -> Array2<T> {
    assert_eq!(a.ncols(), b.nrows(), "Inner dimensions must match");
    let inner = a.ncols();
    Array2::from_shape_fn((a.nrows(), b.ncols()), |(i, j)| {
        partial_dot(a.row(i), b.column(j), 0..inner)
    })
}

/// Forward substitution for a unit lower triangular system L * y = b
///
/// The diagonal of `l` is taken to be 1 and never read.
pub fn forward_substitution_unit<T: ComplexField>(l: &Array2<T>, b: &Array1<T>) -> Array1<T> {
    let n = b.len();
    let mut y = Array1::zeros(n);
    for i in 0..n {
        let s = partial_dot(l.row(i), y.view(), 0..i);
        y[i] = b[i] - s;
    }
    y
}

/// Back substitution for an upper triangular system U * x = y
///
/// Entries below the diagonal of `u` are never read.
pub fn back_substitution<T: ComplexField>(u: &Array2<T>, y: &Array1<T>) -> Array1<T> {
    let n = y.len();
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let s = partial_dot(u.row(i), x.view(), (i + 1)..n);
        x[i] = (y[i] - s) / u[[i, i]];
    }
    x
}
