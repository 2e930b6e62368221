//! Benchmark harness: timed sequential and pooled solve batches.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use linbench_core::error::BenchError;
use linbench_core::observer::BatchObserver;
use linbench_core::progress::{BatchProgress, ExecutionMode};
use linbench_core::solver::LinearSolver;
use linbench_core::system::LinearSystem;
use linbench_core::RunConfig;

use crate::interfaces::{BenchReport, ModeReport};

/// Run `repetitions` solve attempts one after another on the calling thread.
///
/// The wall clock covers the whole loop; a singular outcome is tallied and
/// never aborts the batch.
pub fn run_sequential(
    solver: &dyn LinearSolver,
    system: &LinearSystem,
    repetitions: usize,
    observer: &dyn BatchObserver,
) -> ModeReport {
    let start = Instant::now();
    let mut solved = 0;
    let mut failed = 0;
    for i in 0..repetitions {
        if solver.solve(system).is_some() {
            solved += 1;
        } else {
            failed += 1;
        }
        observer.on_progress(&BatchProgress::new(
            ExecutionMode::Sequential,
            i + 1,
            repetitions,
        ));
    }
    finish(ExecutionMode::Sequential, start.elapsed(), repetitions, solved, failed)
}

/// Run `repetitions` independent solve attempts on a fresh bounded pool.
///
/// The wall clock covers pool construction, submission, the barrier join,
/// and teardown. The pool lives only for this call; its worker threads are
/// released before the report is built, on every exit path.
pub fn run_parallel(
    solver: &dyn LinearSolver,
    system: &LinearSystem,
    repetitions: usize,
    workers: usize,
    observer: &dyn BatchObserver,
) -> Result<ModeReport, BenchError> {
    let start = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| BenchError::Pool(e.to_string()))?;

    let completed = AtomicUsize::new(0);
    let outcomes: Vec<bool> = pool.install(|| {
        (0..repetitions)
            .into_par_iter()
            .map(|_| {
                let ok = solver.solve(system).is_some();
                // Completion order is irrelevant; only the count is reported.
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                observer.on_progress(&BatchProgress::new(
                    ExecutionMode::Parallel,
                    done,
                    repetitions,
                ));
                ok
            })
            .collect()
    });
    drop(pool);

    let total = start.elapsed();
    let solved = outcomes.iter().filter(|ok| **ok).count();
    Ok(finish(
        ExecutionMode::Parallel,
        total,
        repetitions,
        solved,
        repetitions - solved,
    ))
}

/// Run both modes over the same `(A, b, k)` with one immutable configuration.
pub fn run_benchmark(
    solver: &dyn LinearSolver,
    system: &LinearSystem,
    config: &RunConfig,
    observer: &dyn BatchObserver,
) -> Result<BenchReport, BenchError> {
    config.validate()?;
    if system.dimension() != config.dimension {
        return Err(BenchError::Config(format!(
            "system dimension {} does not match configured dimension {}",
            system.dimension(),
            config.dimension
        )));
    }

    tracing::debug!(
        dimension = config.dimension,
        repetitions = config.repetitions,
        workers = config.workers,
        solver = solver.name(),
        "starting benchmark run"
    );

    let sequential = run_sequential(solver, system, config.repetitions, observer);
    let parallel = run_parallel(
        solver,
        system,
        config.repetitions,
        config.workers,
        observer,
    )?;

    Ok(BenchReport {
        config: *config,
        sequential,
        parallel,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn finish(
    mode: ExecutionMode,
    total: Duration,
    repetitions: usize,
    solved: usize,
    failed: usize,
) -> ModeReport {
    let average = if repetitions == 0 {
        Duration::ZERO
    } else {
        total / repetitions as u32
    };
    tracing::debug!(%mode, ?total, solved, failed, "batch complete");
    ModeReport {
        mode,
        total,
        average,
        solved,
        failed,
    }
}
