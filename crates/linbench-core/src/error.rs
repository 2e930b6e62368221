//! Error types for configuration and harness failures.
//!
//! A singular matrix is deliberately NOT represented here: the solver
//! reports it as an absent solution, not as an error.

/// Error type for benchmark runs.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Configuration outside the allowed ranges.
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed linear system.
    #[error("dimension mismatch: {rows}x{cols} matrix with rhs of length {rhs}")]
    Dimension {
        /// Matrix row count.
        rows: usize,
        /// Matrix column count.
        cols: usize,
        /// Right-hand-side length.
        rhs: usize,
    },

    /// Worker pool could not be built.
    #[error("worker pool error: {0}")]
    Pool(String),
}
