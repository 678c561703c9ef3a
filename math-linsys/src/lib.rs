//! Direct and stationary iterative solvers for small dense linear systems
//!
//! This crate solves Ax = b for dense square matrices with four independent,
//! stateless methods and reports the diagnostics each one produces.
//!
//! # Features
//!
//! - **Direct Solvers**: Gaussian elimination with partial pivoting, Doolittle
//!   LU decomposition, and LU with partial pivoting
//! - **Iterative Solvers**: Gauss-Seidel and SOR, with iteration counts,
//!   convergence flags and the full iterate history
//! - **Generic Scalar Types**: Works with f64, f32, Complex64, Complex32
//! - **JSON Configuration**: [`config::SystemConfig`] describes a system and
//!   solver settings
//!
//! # Example
//!
//! ```
//! use math_linsys::{GaussSeidelConfig, gauss_elimination, gauss_seidel};
//! use ndarray::array;
//!
//! let a = array![[4.0_f64, 1.0, 1.0], [1.0, 5.0, 2.0], [1.0, 2.0, 6.0]];
//! let b = array![12.0_f64, 13.0, 22.0];
//!
//! let x = gauss_elimination(&a, &b)?;
//! assert!((x[0] - 2.0).abs() < 1e-10);
//!
//! let result = gauss_seidel(&a, &b, &GaussSeidelConfig::default())?;
//! assert!(result.converged);
//! assert_eq!(result.history.len(), result.iterations + 1);
//! # Ok::<(), math_linsys::SolverError>(())
//! ```

pub mod config;
pub mod dense;
pub mod direct;
pub mod error;
pub mod iterative;
pub mod traits;

// Re-export main types
pub use error::{Result, SolverError};
pub use traits::ComplexField;

// Re-export direct solvers
pub use direct::{
    DirectConfig, LuFactors, PivotedLu, gauss_elimination, gauss_elimination_with_config,
    lu_decomposition, lu_decomposition_with_config, lu_factorize, lu_factorize_pivoted,
    lu_solve_pivoted,
};

// Re-export iterative solvers
pub use iterative::{
    GaussSeidelConfig, SolveResult, SorConfig, gauss_seidel, gauss_seidel_with_guess, sor,
    sor_with_guess,
};
