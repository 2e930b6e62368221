//! # linbench-orchestration
//!
//! The benchmark harness: runs the same solve workload sequentially and on a
//! bounded worker pool, and produces timing reports for both.

pub mod harness;
pub mod interfaces;

pub use harness::{run_benchmark, run_parallel, run_sequential};
pub use interfaces::{BenchReport, ModeReport, NullReportSink, ReportSink};
