//! TUI message types (Elm Messages).

use linbench_core::progress::BatchProgress;
use linbench_core::system::LinearSystem;
use linbench_core::RunConfig;
use linbench_orchestration::interfaces::ModeReport;

/// System metrics snapshot.
#[derive(Debug, Clone)]
pub struct SystemMetrics {
    /// CPU usage as a percentage (0.0 - 100.0).
    pub cpu_percent: f64,
    /// Memory usage in megabytes.
    pub memory_mb: f64,
}

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// A benchmark run began with this configuration.
    RunStarted(RunConfig),
    /// The random system generated for the current run.
    SystemGenerated(LinearSystem),
    /// A solve attempt completed.
    Progress(BatchProgress),
    /// One execution mode finished.
    ModeComplete(ModeReport),
    /// Both modes finished — freezes the elapsed timer.
    RunFinished,
    /// Log message.
    Log(String),
    /// Error message.
    Error(String),
    /// System metrics update (CPU, memory).
    SystemMetrics(SystemMetrics),
    /// Tick event for periodic re-render.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
    /// Quit the application.
    Quit,
}
