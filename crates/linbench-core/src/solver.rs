//! Direct dense solver behind the harness-facing trait seam.

use nalgebra::DVector;

use crate::system::LinearSystem;

/// Solver contract consumed by the benchmark harness.
///
/// Implementations are pure functions of their inputs (up to floating-point
/// rounding) and must be callable concurrently from pool workers.
pub trait LinearSolver: Send + Sync {
    /// Solve `A x = b`, returning `None` when the system is singular or
    /// numerically non-invertible.
    fn solve(&self, system: &LinearSystem) -> Option<DVector<f64>>;

    /// Name of this solver.
    fn name(&self) -> &'static str;
}

/// LU-decomposition-based exact solver.
pub struct LuSolver;

impl LuSolver {
    /// Create a new LU solver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LuSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearSolver for LuSolver {
    fn solve(&self, system: &LinearSystem) -> Option<DVector<f64>> {
        // Partial-pivot LU; a zero pivot during substitution surfaces as None.
        // The factorization consumes its input, so each call pays for one
        // matrix copy. That copy is part of the measured work.
        system.coefficients().clone().lu().solve(system.rhs())
    }

    fn name(&self) -> &'static str {
        "LU"
    }
}

/// Euclidean norm of the residual `A x - b`.
#[must_use]
pub fn residual_norm(system: &LinearSystem, x: &DVector<f64>) -> f64 {
    (system.coefficients() * x - system.rhs()).norm()
}
