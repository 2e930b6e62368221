//! Background benchmark controller: one full run per trigger.

use crossbeam_channel::{Receiver, Sender};

use linbench_core::solver::LuSolver;
use linbench_core::system::LinearSystem;
use linbench_core::RunConfig;
use linbench_orchestration::harness::run_benchmark;
use linbench_orchestration::interfaces::ReportSink;
use linbench_tui::{HarnessObserverBridge, TuiMessage, TuiReportSink};

/// Spawn the controller thread.
///
/// The thread exits when the trigger channel closes (the TUI, which owns
/// the sender, has shut down).
pub fn spawn(
    run_rx: Receiver<RunConfig>,
    tx: Sender<TuiMessage>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let solver = LuSolver::new();
        while let Ok(config) = run_rx.recv() {
            run_once(&solver, config.clamped(), &tx);
        }
    })
}

fn run_once(solver: &LuSolver, config: RunConfig, tx: &Sender<TuiMessage>) {
    let _ = tx.send(TuiMessage::RunStarted(config));
    tracing::info!(
        dimension = config.dimension,
        repetitions = config.repetitions,
        "benchmark run triggered"
    );

    let mut rng = rand::thread_rng();
    let system = LinearSystem::random(config.dimension, &mut rng);

    let sink = TuiReportSink::new(tx.clone());
    sink.present_system(&system);

    let observer = HarnessObserverBridge::new(tx.clone());
    match run_benchmark(solver, &system, &config, &observer) {
        Ok(report) => {
            sink.present_mode(&report.sequential);
            sink.present_mode(&report.parallel);
            sink.present_comparison(&report);
        }
        Err(e) => sink.present_error(&e.to_string()),
    }
    let _ = tx.send(TuiMessage::RunFinished);
}
