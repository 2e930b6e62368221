//! Harness interfaces and timing reports.

use std::time::Duration;

use linbench_core::progress::ExecutionMode;
use linbench_core::system::LinearSystem;
use linbench_core::RunConfig;

/// Timing summary for one execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeReport {
    /// Strategy that produced this report.
    pub mode: ExecutionMode,
    /// Wall clock for the whole batch.
    pub total: Duration,
    /// `total / repetitions`, exact in integer nanoseconds.
    pub average: Duration,
    /// Solve calls that produced a solution.
    pub solved: usize,
    /// Solve calls that hit a singular system.
    pub failed: usize,
}

impl ModeReport {
    /// Number of solve attempts in the batch.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.solved + self.failed
    }
}

/// Reports for both modes over the same `(A, b, k)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchReport {
    /// Configuration the run was triggered with.
    pub config: RunConfig,
    /// Sequential-mode timing.
    pub sequential: ModeReport,
    /// Parallel-mode timing.
    pub parallel: ModeReport,
}

/// Sink for presenting benchmark output to the user.
pub trait ReportSink: Send + Sync {
    /// Present the generated system before the batches run.
    fn present_system(&self, system: &LinearSystem);

    /// Present a completed mode report.
    fn present_mode(&self, report: &ModeReport);

    /// Present the full comparison once both modes finished.
    fn present_comparison(&self, report: &BenchReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Sink that discards everything.
pub struct NullReportSink;

impl ReportSink for NullReportSink {
    fn present_system(&self, _system: &LinearSystem) {}
    fn present_mode(&self, _report: &ModeReport) {}
    fn present_comparison(&self, _report: &BenchReport) {}
    fn present_error(&self, _error: &str) {}
}
