//! # linbench-core
//!
//! Core library for the linbench sequential-vs-pooled solve benchmark.
//! Provides the dense system model, the LU solver seam, run configuration,
//! and the progress observer types consumed by the harness.

pub mod config;
pub mod constants;
pub mod error;
pub mod observer;
pub mod progress;
pub mod solver;
pub mod system;

// Re-exports
pub use config::RunConfig;
pub use constants::{
    DEFAULT_DIMENSION, DEFAULT_REPETITIONS, DEFAULT_WORKER_THREADS, MAX_DIMENSION,
    MAX_REPETITIONS, MIN_DIMENSION, MIN_REPETITIONS, RESIDUAL_TOLERANCE,
};
pub use error::BenchError;
pub use observer::{BatchObserver, NoOpObserver, ProgressSubject};
pub use progress::{BatchProgress, ExecutionMode};
pub use solver::{residual_norm, LinearSolver, LuSolver};
pub use system::LinearSystem;

use nalgebra::{DMatrix, DVector};

/// Solve `A x = b` with the default LU solver.
///
/// Convenience for simple use cases; returns `None` when `a` is singular or
/// the shapes do not form a square system. For benchmark runs, construct a
/// [`LinearSystem`] and go through the [`LinearSolver`] trait instead.
///
/// # Example
/// ```
/// use nalgebra::{DMatrix, DVector};
///
/// let a = DMatrix::identity(2, 2);
/// let b = DVector::from_vec(vec![3.0, 4.0]);
/// let x = linbench_core::solve(a, b).unwrap();
/// assert!((x[0] - 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn solve(a: DMatrix<f64>, b: DVector<f64>) -> Option<DVector<f64>> {
    let system = LinearSystem::new(a, b).ok()?;
    LuSolver::new().solve(&system)
}
