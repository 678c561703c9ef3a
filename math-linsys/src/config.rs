//! JSON configuration for a linear system and its solver settings

use crate::direct::DirectConfig;
use crate::iterative::{GaussSeidelConfig, SorConfig};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from loading or validating a [`SystemConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read or write config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid system: {0}")]
    Invalid(String),
}

/// A linear system Ax = b loaded from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Coefficient matrix, one inner vector per row
    pub matrix: Vec<Vec<f64>>,
    /// Right-hand side
    pub rhs: Vec<f64>,
    /// Known solution, used to report errors
    #[serde(default)]
    pub exact: Option<Vec<f64>>,
    /// Starting point for the iterative solvers (zeros if absent)
    #[serde(default)]
    pub initial_guess: Option<Vec<f64>>,
    /// Solver settings
    #[serde(default)]
    pub solver: SolverSettings,
}

/// Solver settings shared by all methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Convergence tolerance for Gauss-Seidel and SOR
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Sweep budget for Gauss-Seidel and SOR
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// SOR relaxation factor
    #[serde(default = "default_omega")]
    pub omega: f64,
    /// Zero-pivot threshold for the direct solvers
    #[serde(default = "default_threshold")]
    pub pivot_threshold: f64,
    /// Zero-diagonal threshold for the iterative solvers
    #[serde(default = "default_threshold")]
    pub diagonal_threshold: f64,
    /// Log progress every N sweeps (0 = quiet)
    #[serde(default)]
    pub print_interval: usize,
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_max_iterations() -> usize {
    100
}

fn default_omega() -> f64 {
    1.25
}

fn default_threshold() -> f64 {
    1e-10
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            omega: default_omega(),
            pivot_threshold: default_threshold(),
            diagonal_threshold: default_threshold(),
            print_interval: 0,
        }
    }
}

impl SolverSettings {
    /// Settings for the direct solvers
    pub fn direct(&self) -> DirectConfig<f64> {
        DirectConfig {
            pivot_threshold: self.pivot_threshold,
        }
    }

    /// Settings for Gauss-Seidel
    pub fn gauss_seidel(&self) -> GaussSeidelConfig<f64> {
        GaussSeidelConfig {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            diagonal_threshold: self.diagonal_threshold,
            print_interval: self.print_interval,
        }
    }

    /// Settings for SOR
    pub fn sor(&self) -> SorConfig<f64> {
        SorConfig {
            omega: self.omega,
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            diagonal_threshold: self.diagonal_threshold,
            print_interval: self.print_interval,
        }
    }
}

impl SystemConfig {
    /// The 3x3 demonstration system
    ///
    /// ```text
    /// 4x +  y +  z = 12
    ///  x + 5y + 2z = 13
    ///  x + 2y + 6z = 22
    /// ```
    ///
    /// with solution (2, 1, 3), solved to 1e-8 with ω = 1.1.
    pub fn example() -> Self {
        Self {
            matrix: vec![
                vec![4.0, 1.0, 1.0],
                vec![1.0, 5.0, 2.0],
                vec![1.0, 2.0, 6.0],
            ],
            rhs: vec![12.0, 13.0, 22.0],
            exact: Some(vec![2.0, 1.0, 3.0]),
            initial_guess: None,
            solver: SolverSettings {
                tolerance: 1e-8,
                omega: 1.1,
                ..Default::default()
            },
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SystemConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check that the matrix is square and every vector matches it
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.matrix.len();
        if n == 0 {
            return Err(ConfigError::Invalid("matrix has no rows".to_string()));
        }
        if let Some((i, row)) = self.matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(ConfigError::Invalid(format!(
                "row {} has {} entries, expected {}",
                i,
                row.len(),
                n
            )));
        }

        let vectors = [
            ("rhs", Some(&self.rhs)),
            ("exact", self.exact.as_ref()),
            ("initial_guess", self.initial_guess.as_ref()),
        ];
        for (name, v) in vectors {
            if let Some(v) = v
                && v.len() != n
            {
                return Err(ConfigError::Invalid(format!(
                    "{} has {} entries, expected {}",
                    name,
                    v.len(),
                    n
                )));
            }
        }
        Ok(())
    }

    /// Dimension of the system
    pub fn dim(&self) -> usize {
        self.matrix.len()
    }

    /// Coefficient matrix as an ndarray
    pub fn matrix(&self) -> Result<Array2<f64>, ConfigError> {
        let n = self.dim();
        let flat: Vec<f64> = self.matrix.iter().flatten().copied().collect();
        Array2::from_shape_vec((n, n), flat).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Right-hand side as an ndarray
    pub fn rhs(&self) -> Array1<f64> {
        Array1::from_vec(self.rhs.clone())
    }

    /// Known solution, if given
    pub fn exact(&self) -> Option<Array1<f64>> {
        self.exact.clone().map(Array1::from_vec)
    }

    /// Initial guess, if given
    pub fn initial_guess(&self) -> Option<Array1<f64>> {
        self.initial_guess.clone().map(Array1::from_vec)
    }
}
