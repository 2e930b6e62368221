//! Dense linear system `A x = b` and random generation.

use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::BenchError;

/// A dense square system `A x = b`.
///
/// Immutable for the duration of one benchmark run; both batches read the
/// same instance.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    coefficients: DMatrix<f64>,
    rhs: DVector<f64>,
}

impl LinearSystem {
    /// Build a system from parts, validating the shape.
    pub fn new(coefficients: DMatrix<f64>, rhs: DVector<f64>) -> Result<Self, BenchError> {
        if coefficients.nrows() != coefficients.ncols() || coefficients.nrows() != rhs.len() {
            return Err(BenchError::Dimension {
                rows: coefficients.nrows(),
                cols: coefficients.ncols(),
                rhs: rhs.len(),
            });
        }
        Ok(Self { coefficients, rhs })
    }

    /// Generate an `n x n` system with entries uniform in [0, 1).
    #[must_use]
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let coefficients = DMatrix::from_fn(n, n, |_, _| rng.gen::<f64>());
        let rhs = DVector::from_fn(n, |_, _| rng.gen::<f64>());
        tracing::debug!(dimension = n, "generated random system");
        Self { coefficients, rhs }
    }

    /// Deterministic random system for tests and benchmarks.
    #[must_use]
    pub fn random_seeded(n: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(n, &mut rng)
    }

    /// Matrix dimension `n`.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.rhs.len()
    }

    /// Coefficient matrix `A`.
    #[must_use]
    pub fn coefficients(&self) -> &DMatrix<f64> {
        &self.coefficients
    }

    /// Right-hand side `b`.
    #[must_use]
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }
}
