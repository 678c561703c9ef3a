//! Cross-solver properties
//!
//! These tests check that the four solvers agree on well-posed systems, that
//! the LU factors have the documented structure, and that the iterative
//! diagnostics obey their length and convergence contracts.

use approx::assert_relative_eq;
use math_linsys::dense::{diff_norm2, matvec};
use math_linsys::{
    DirectConfig, GaussSeidelConfig, SolverError, SorConfig, gauss_elimination, gauss_seidel,
    gauss_seidel_with_guess, lu_decomposition, lu_factorize, lu_solve_pivoted, sor,
};
use ndarray::{Array1, Array2, array};

fn reference_system() -> (Array2<f64>, Array1<f64>, Array1<f64>) {
    (
        array![[4.0, 1.0, 1.0], [1.0, 5.0, 2.0], [1.0, 2.0, 6.0]],
        array![12.0, 13.0, 22.0],
        array![2.0, 1.0, 3.0],
    )
}

/// Strictly diagonally dominant n x n system with solution x_i = i + 1
fn dominant_system(n: usize) -> (Array2<f64>, Array1<f64>, Array1<f64>) {
    let a = Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            2.0 * n as f64 + 1.0
        } else {
            1.0 / (1.0 + (i as f64 - j as f64).abs())
        }
    });
    let exact = Array1::from_iter((0..n).map(|i| i as f64 + 1.0));
    let b = matvec(&a, &exact);
    (a, b, exact)
}

/// Fixed nonsingular systems that need pivoting in places
fn nonsingular_systems() -> Vec<(Array2<f64>, Array1<f64>)> {
    vec![
        (array![[2.0, 1.0], [1.0, 3.0]], array![3.0, 5.0]),
        (
            array![[3.0, -1.0, 2.0], [1.0, 4.0, -1.0], [2.0, 1.0, 5.0]],
            array![1.0, 2.0, 3.0],
        ),
        (
            array![
                [1.0, 2.0, 0.0, 1.0],
                [3.0, 1.0, 1.0, 0.0],
                [0.0, 1.0, 4.0, 2.0],
                [2.0, 0.0, 1.0, 5.0]
            ],
            array![4.0, -1.0, 2.0, 0.5],
        ),
    ]
}

#[test]
fn test_all_solvers_on_reference_system() {
    let (a, b, exact) = reference_system();

    let x_gauss = gauss_elimination(&a, &b).expect("Gauss elimination should succeed");
    let (x_lu, _) = lu_decomposition(&a, &b).expect("LU decomposition should succeed");
    let gs = gauss_seidel(&a, &b, &GaussSeidelConfig::default().with_tolerance(1e-8))
        .expect("Gauss-Seidel should run");
    let relaxed = sor(&a, &b, &SorConfig::default().with_omega(1.1).with_tolerance(1e-8))
        .expect("SOR should run");

    assert!(gs.converged && gs.iterations < 100);
    assert!(relaxed.converged && relaxed.iterations < 100);

    for x in [&x_gauss, &x_lu, &gs.x, &relaxed.x] {
        for i in 0..3 {
            assert_relative_eq!(x[i], exact[i], epsilon = 1e-6);
        }
    }
}

#[test]
fn test_direct_solvers_agree() {
    for (a, b) in nonsingular_systems() {
        let x_gauss = gauss_elimination(&a, &b).expect("Gauss elimination should succeed");
        let (x_lu, _) = lu_decomposition(&a, &b).expect("LU decomposition should succeed");
        let x_plu = lu_solve_pivoted(&a, &b).expect("Pivoted LU should succeed");

        assert!(diff_norm2(&x_gauss, &x_lu) < 1e-9);
        assert!(diff_norm2(&x_gauss, &x_plu) < 1e-9);
    }
}

#[test]
fn test_lu_factors_reconstruct_input() {
    let (a, _, _) = dominant_system(6);
    let mut systems: Vec<Array2<f64>> =
        nonsingular_systems().into_iter().map(|(a, _)| a).collect();
    systems.push(a);

    for a in systems {
        let factors = lu_factorize(&a, &DirectConfig::default())
            .expect("Factorization should succeed");
        let n = a.nrows();

        for i in 0..n {
            assert_eq!(factors.l[[i, i]], 1.0);
            for j in (i + 1)..n {
                assert_eq!(factors.l[[i, j]], 0.0, "L must be lower triangular");
                assert_eq!(factors.u[[j, i]], 0.0, "U must be upper triangular");
            }
        }

        let lu = factors.reconstruct();
        for i in 0..n {
            for j in 0..n {
                assert_relative_eq!(lu[[i, j]], a[[i, j]], epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn test_gauss_elimination_is_idempotent() {
    let (a, b, _) = dominant_system(5);

    let first = gauss_elimination(&a, &b).expect("Gauss elimination should succeed");
    let second = gauss_elimination(&a, &b).expect("Gauss elimination should succeed");

    assert_eq!(first, second);
}

#[test]
fn test_history_length_matches_iterations() {
    let (a, b, _) = reference_system();

    let converged = gauss_seidel(&a, &b, &GaussSeidelConfig::default())
        .expect("Gauss-Seidel should run");
    assert!(converged.converged);
    assert_eq!(converged.history.len(), converged.iterations + 1);

    let capped = sor(
        &a,
        &b,
        &SorConfig::default().with_tolerance(1e-30).with_max_iterations(7),
    )
    .expect("SOR should run");
    assert!(!capped.converged);
    assert_eq!(capped.iterations, 7);
    assert_eq!(capped.history.len(), 8);
    assert_eq!(capped.history[0], Array1::<f64>::zeros(3));
}

#[test]
fn test_error_tail_is_non_increasing() {
    let (a, b, exact) = dominant_system(8);
    let config = GaussSeidelConfig::default().with_tolerance(1e-12);

    for result in [
        gauss_seidel(&a, &b, &config).expect("Gauss-Seidel should run"),
        sor(&a, &b, &SorConfig::default().with_omega(1.05).with_tolerance(1e-12))
            .expect("SOR should run"),
    ] {
        assert!(result.converged);
        let errors = result.error_history(&exact);
        let tail = &errors[errors.len() / 2..];
        for pair in tail.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-12, "error increased: {:?}", pair);
        }
        assert!(*errors.last().expect("history is never empty") < 1e-9);
    }
}

#[test]
fn test_zero_diagonal_fails_before_sweeping() {
    let (mut a, b, _) = reference_system();
    a[[0, 0]] = 0.0;

    let err = gauss_seidel(&a, &b, &GaussSeidelConfig::default()).unwrap_err();
    assert_eq!(
        err,
        SolverError::ZeroDiagonal {
            index: 0,
            value: 0.0
        }
    );

    let err = sor(&a, &b, &SorConfig::default()).unwrap_err();
    assert!(err.is_breakdown());

    // The direct solver pivots around the same zero
    let x = gauss_elimination(&a, &b).expect("Pivoting handles a zero diagonal");
    assert!(x.iter().all(|v| v.is_finite()));
}

#[test]
fn test_singular_matrix_never_returns_non_finite() {
    let a = array![[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [2.0, 1.0, 0.0]];
    let b = array![1.0, 0.0, 1.0];

    let err = gauss_elimination(&a, &b).unwrap_err();
    assert!(matches!(err, SolverError::SingularMatrix { .. }));

    let err = lu_decomposition(&a, &b).unwrap_err();
    assert!(matches!(err, SolverError::ZeroPivot { .. }));
}

#[test]
fn test_initial_guess_is_respected() {
    let (a, b, exact) = reference_system();
    let x0 = array![1.9, 1.1, 2.9];

    let from_guess = gauss_seidel_with_guess(&a, &b, Some(&x0), &GaussSeidelConfig::default())
        .expect("Gauss-Seidel should run");
    let from_zero = gauss_seidel(&a, &b, &GaussSeidelConfig::default())
        .expect("Gauss-Seidel should run");

    assert_eq!(from_guess.history[0], x0);
    assert!(from_guess.iterations <= from_zero.iterations);
    assert!(diff_norm2(&from_guess.x, &exact) < 1e-5);
}

#[test]
fn test_inputs_are_not_mutated() {
    let (a, b, _) = reference_system();
    let (a_before, b_before) = (a.clone(), b.clone());

    let _ = gauss_elimination(&a, &b);
    let _ = lu_decomposition(&a, &b);
    let _ = gauss_seidel(&a, &b, &GaussSeidelConfig::default());
    let _ = sor(&a, &b, &SorConfig::default());

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}
