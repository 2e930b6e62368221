//! Bridge between the harness and TUI messages.

use crossbeam_channel::Sender;

use linbench_core::observer::BatchObserver;
use linbench_core::progress::BatchProgress;
use linbench_core::system::LinearSystem;
use linbench_orchestration::interfaces::{BenchReport, ModeReport, ReportSink};

use crate::format::format_duration;
use crate::messages::TuiMessage;

/// Forwards per-solve progress into the TUI channel.
///
/// Implements the core `BatchObserver` trait so it can be handed straight to
/// the harness; sends are best-effort and dropped if the UI has exited.
pub struct HarnessObserverBridge {
    tx: Sender<TuiMessage>,
}

impl HarnessObserverBridge {
    /// Create a new bridge observer.
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl BatchObserver for HarnessObserverBridge {
    fn on_progress(&self, update: &BatchProgress) {
        let _ = self.tx.try_send(TuiMessage::Progress(*update));
    }
}

/// Presents benchmark output as TUI messages.
pub struct TuiReportSink {
    tx: Sender<TuiMessage>,
}

impl TuiReportSink {
    /// Create a new report sink.
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl ReportSink for TuiReportSink {
    fn present_system(&self, system: &LinearSystem) {
        let _ = self
            .tx
            .try_send(TuiMessage::SystemGenerated(system.clone()));
    }

    fn present_mode(&self, report: &ModeReport) {
        let _ = self.tx.try_send(TuiMessage::ModeComplete(*report));
        let _ = self.tx.try_send(TuiMessage::Log(format!(
            "{}: {} attempts in {} (avg {})",
            report.mode.label(),
            report.attempts(),
            format_duration(report.total),
            format_duration(report.average),
        )));
    }

    fn present_comparison(&self, report: &BenchReport) {
        let _ = self.tx.try_send(TuiMessage::Log(format!(
            "Run complete: sequential {} vs pooled {} ({} workers)",
            format_duration(report.sequential.total),
            format_duration(report.parallel.total),
            report.config.workers,
        )));
    }

    fn present_error(&self, error: &str) {
        let _ = self.tx.try_send(TuiMessage::Error(error.to_string()));
    }
}
