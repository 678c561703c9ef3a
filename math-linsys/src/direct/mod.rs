//! Direct solvers for dense linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`gauss_elimination`]: Gaussian elimination with partial pivoting
//! - [`lu_decomposition`]: Doolittle LU factorization without pivoting
//! - [`lu_solve_pivoted`]: LU factorization with partial pivoting, for
//!   matrices the Doolittle path rejects

mod gauss;
mod lu;
mod pivoted_lu;

pub use gauss::{gauss_elimination, gauss_elimination_with_config};
pub use lu::{LuFactors, lu_decomposition, lu_decomposition_with_config, lu_factorize};
pub use pivoted_lu::{PivotedLu, lu_factorize_pivoted, lu_solve_pivoted};

/// Configuration shared by the direct solvers
#[derive(Debug, Clone)]
pub struct DirectConfig<R> {
    /// Pivots with magnitude below this value are treated as zero
    pub pivot_threshold: R,
}

impl Default for DirectConfig<f64> {
    fn default() -> Self {
        Self {
            pivot_threshold: 1e-10,
        }
    }
}

impl Default for DirectConfig<f32> {
    fn default() -> Self {
        Self {
            pivot_threshold: 1e-6,
        }
    }
}

impl<R> DirectConfig<R> {
    /// Create config with a specific pivot threshold
    pub fn with_pivot_threshold(pivot_threshold: R) -> Self {
        Self { pivot_threshold }
    }
}
