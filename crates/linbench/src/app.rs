//! Application wiring: channels, worker threads, TUI event loop.

use anyhow::Result;

use linbench_core::RunConfig;
use linbench_tui::{MetricsCollector, TuiApp, TuiMessage};

/// Run the application.
///
/// The main thread owns the TUI event loop. A metrics thread samples
/// sysinfo once per second and a controller thread executes one benchmark
/// run per trigger; both exit once the TUI drops its channel end.
pub fn run() -> Result<()> {
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();
    let (run_tx, run_rx) = crossbeam_channel::unbounded::<RunConfig>();

    let mut app = TuiApp::new(rx, run_tx);

    // Metrics collection thread
    let metrics_tx = tx.clone();
    std::thread::spawn(move || {
        let mut collector = MetricsCollector::new();
        loop {
            collector.refresh();
            if metrics_tx
                .send(TuiMessage::SystemMetrics(collector.snapshot()))
                .is_err()
            {
                break; // channel closed, TUI exited
            }
            std::thread::sleep(std::time::Duration::from_secs(1));
        }
    });

    // Benchmark controller thread
    crate::controller::spawn(run_rx, tx);

    // TUI event loop on the main thread
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}
