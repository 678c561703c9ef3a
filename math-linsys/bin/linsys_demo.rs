//! Linear system solver demo
//!
//! Solves one system with Gaussian elimination, LU decomposition,
//! Gauss-Seidel and SOR, printing each solution and its error against the
//! known solution. A JSON report with the per-iteration error history and the
//! LU factors can be written for plotting.
//!
//! Usage:
//!   cargo run --bin linsys-demo
//!   cargo run --bin linsys-demo -- --config system.json --output report.json
//!   cargo run --bin linsys-demo -- --method sor --verbose

use anyhow::Context;
use clap::{Parser, ValueEnum};
use math_linsys::config::SystemConfig;
use math_linsys::dense::{diff_norm2, residual, vector_norm};
use math_linsys::{
    SolveResult, gauss_elimination_with_config, gauss_seidel_with_guess,
    lu_decomposition_with_config, lu_factorize_pivoted, sor_with_guess,
};
use ndarray::{Array1, Array2};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linsys-demo")]
#[command(
    about = "Solve a dense linear system with direct and iterative methods",
    long_about = None
)]
struct Args {
    /// Path to JSON system configuration (default: built-in 3x3 example)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a JSON report to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run a single method instead of all of them
    #[arg(short, long, value_enum)]
    method: Option<Method>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Gaussian elimination with partial pivoting
    Gauss,
    /// Doolittle LU decomposition
    Lu,
    /// LU decomposition with partial pivoting
    PivotedLu,
    /// Gauss-Seidel iteration
    GaussSeidel,
    /// Successive over-relaxation
    Sor,
}

impl Method {
    fn label(self) -> &'static str {
        match self {
            Method::Gauss => "Gauss Elimination (Direct)",
            Method::Lu => "LU Decomposition (Direct)",
            Method::PivotedLu => "Pivoted LU Decomposition (Direct)",
            Method::GaussSeidel => "Gauss-Seidel Method (Iterative)",
            Method::Sor => "SOR Method (Iterative)",
        }
    }
}

/// Outcome of one method, as written to the JSON report
#[derive(Debug, Clone, Serialize)]
struct MethodReport {
    method: String,
    solution: Option<Vec<f64>>,
    residual_norm: Option<f64>,
    l2_error: Option<f64>,
    iterations: Option<usize>,
    converged: Option<bool>,
    error_history: Vec<f64>,
    lower: Option<Vec<Vec<f64>>>,
    upper: Option<Vec<Vec<f64>>>,
    failure: Option<String>,
}

impl MethodReport {
    fn new(method: Method) -> Self {
        Self {
            method: method.label().to_string(),
            solution: None,
            residual_norm: None,
            l2_error: None,
            iterations: None,
            converged: None,
            error_history: Vec::new(),
            lower: None,
            upper: None,
            failure: None,
        }
    }

    fn with_solution(
        mut self,
        a: &Array2<f64>,
        b: &Array1<f64>,
        exact: Option<&Array1<f64>>,
        x: &Array1<f64>,
    ) -> Self {
        self.residual_norm = Some(vector_norm(&residual(a, x, b)));
        self.l2_error = exact.map(|e| diff_norm2(x, e));
        self.solution = Some(x.to_vec());
        self
    }

    fn with_iterations(mut self, result: &SolveResult<f64>, exact: Option<&Array1<f64>>) -> Self {
        self.iterations = Some(result.iterations);
        self.converged = Some(result.converged);
        if let Some(exact) = exact {
            self.error_history = result.error_history(exact);
        }
        self
    }

    fn with_factors(mut self, l: &Array2<f64>, u: &Array2<f64>) -> Self {
        self.lower = Some(rows(l));
        self.upper = Some(rows(u));
        self
    }

    fn failed(mut self, err: impl std::fmt::Display) -> Self {
        self.failure = Some(err.to_string());
        self
    }
}

#[derive(Debug, Serialize)]
struct Report {
    system: SystemConfig,
    results: Vec<MethodReport>,
}

fn rows(m: &Array2<f64>) -> Vec<Vec<f64>> {
    m.rows().into_iter().map(|r| r.to_vec()).collect()
}

fn run_method(method: Method, config: &SystemConfig) -> anyhow::Result<MethodReport> {
    let a = config.matrix()?;
    let b = config.rhs();
    let exact = config.exact();
    let x0 = config.initial_guess();
    let settings = &config.solver;
    let report = MethodReport::new(method);

    let report = match method {
        Method::Gauss => match gauss_elimination_with_config(&a, &b, &settings.direct()) {
            Ok(x) => report.with_solution(&a, &b, exact.as_ref(), &x),
            Err(e) => report.failed(e),
        },
        Method::Lu => match lu_decomposition_with_config(&a, &b, &settings.direct()) {
            Ok((x, factors)) => report
                .with_solution(&a, &b, exact.as_ref(), &x)
                .with_factors(&factors.l, &factors.u),
            Err(e) => report.failed(e),
        },
        Method::PivotedLu => match lu_factorize_pivoted(&a, &settings.direct())
            .and_then(|f| f.solve(&b).map(|x| (x, f)))
        {
            Ok((x, factors)) => report
                .with_solution(&a, &b, exact.as_ref(), &x)
                .with_factors(&factors.lower(), &factors.upper()),
            Err(e) => report.failed(e),
        },
        Method::GaussSeidel => {
            match gauss_seidel_with_guess(&a, &b, x0.as_ref(), &settings.gauss_seidel()) {
                Ok(result) => report
                    .with_solution(&a, &b, exact.as_ref(), &result.x)
                    .with_iterations(&result, exact.as_ref()),
                Err(e) => report.failed(e),
            }
        }
        Method::Sor => match sor_with_guess(&a, &b, x0.as_ref(), &settings.sor()) {
            Ok(result) => report
                .with_solution(&a, &b, exact.as_ref(), &result.x)
                .with_iterations(&result, exact.as_ref()),
            Err(e) => report.failed(e),
        },
    };

    Ok(report)
}

fn print_report(report: &MethodReport) {
    println!("\n--- {} ---", report.method);
    if let Some(failure) = &report.failure {
        println!("Failed: {}", failure);
        return;
    }
    if let Some(x) = &report.solution {
        println!("Solution: {:?}", x);
    }
    if let (Some(iterations), Some(converged)) = (report.iterations, report.converged) {
        println!("Info: iterations = {}, converged = {}", iterations, converged);
    }
    if let Some(r) = report.residual_norm {
        println!("Residual: {:.2e}", r);
    }
    if let Some(e) = report.l2_error {
        println!("L2 Error: {:.2e}", e);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &args.config {
        Some(path) => {
            println!("Loading system from: {}", path.display());
            SystemConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => SystemConfig::example(),
    };

    println!("Linear Equations Solver Demo");
    println!("System ({}x{}):", config.dim(), config.dim());
    for (row, rhs) in config.matrix.iter().zip(config.rhs.iter()) {
        println!("  {:?} = {}", row, rhs);
    }
    if let Some(exact) = &config.exact {
        println!("Expected: {:?}", exact);
    }

    let methods = match args.method {
        Some(method) => vec![method],
        None => vec![Method::Gauss, Method::Lu, Method::GaussSeidel, Method::Sor],
    };

    let mut results = Vec::with_capacity(methods.len());
    for method in methods {
        let report = run_method(method, &config)?;
        if let Some(failure) = &report.failure {
            log::warn!("{} failed: {}", report.method, failure);
        }
        print_report(&report);
        results.push(report);
    }

    if let Some(output) = &args.output {
        let report = Report {
            system: config,
            results,
        };
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(output, json).with_context(|| format!("writing {}", output.display()))?;
        println!("\nSaved report to {}", output.display());
    }

    println!("\nDemo Completed.");
    Ok(())
}
