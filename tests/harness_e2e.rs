//! Workspace-level end-to-end tests for the benchmark harness.
//!
//! Exercises a full run with a fixed seed and checks the timing identities,
//! per-mode counts, and cross-mode solution equality.

use std::time::Duration;

use nalgebra::DVector;

use linbench_core::observer::NoOpObserver;
use linbench_core::solver::{residual_norm, LinearSolver, LuSolver};
use linbench_core::system::LinearSystem;
use linbench_core::{RunConfig, RESIDUAL_TOLERANCE};
use linbench_orchestration::harness::{run_benchmark, run_parallel, run_sequential};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const SCENARIO_SEED: u64 = 20_240;

fn scenario_system() -> LinearSystem {
    LinearSystem::random_seeded(3, SCENARIO_SEED)
}

fn singular_system(n: usize) -> LinearSystem {
    let mut m = LinearSystem::random_seeded(n, 5).coefficients().clone();
    m.row_mut(0).fill(0.0);
    LinearSystem::new(m, DVector::from_element(n, 1.0)).unwrap()
}

// ---------------------------------------------------------------------------
// End-to-end scenario: n=3, fixed seed, k=5
// ---------------------------------------------------------------------------

#[test]
fn fixed_seed_scenario_reports_full_counts() {
    let system = scenario_system();
    let config = RunConfig::new(3, 5);
    let report = run_benchmark(&LuSolver::new(), &system, &config, &NoOpObserver::new()).unwrap();

    assert_eq!(report.sequential.solved, 5);
    assert_eq!(report.sequential.failed, 0);
    assert_eq!(report.parallel.solved, 5);
    assert_eq!(report.parallel.failed, 0);

    assert!(report.sequential.average > Duration::ZERO);
    assert!(report.parallel.average > Duration::ZERO);

    // Definitional identity: average is exactly total / k in both modes.
    assert_eq!(report.sequential.average, report.sequential.total / 5);
    assert_eq!(report.parallel.average, report.parallel.total / 5);
}

#[test]
fn fixed_seed_scenario_solutions_agree_across_all_invocations() {
    let system = scenario_system();
    let solver = LuSolver::new();
    let baseline = solver.solve(&system).expect("scenario system is non-singular");
    assert!(residual_norm(&system, &baseline) < RESIDUAL_TOLERANCE);

    // Five sequential invocations.
    let mut solutions: Vec<DVector<f64>> = (0..5)
        .map(|_| solver.solve(&system).expect("non-singular"))
        .collect();

    // Five concurrent invocations against the same shared system.
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..5)
            .map(|_| scope.spawn(|| solver.solve(&system).expect("non-singular")))
            .collect();
        for handle in handles {
            solutions.push(handle.join().unwrap());
        }
    });

    assert_eq!(solutions.len(), 10);
    for x in &solutions {
        assert!((x - &baseline).norm() < RESIDUAL_TOLERANCE);
    }
}

// ---------------------------------------------------------------------------
// Boundaries and failure policy
// ---------------------------------------------------------------------------

#[test]
fn single_repetition_average_equals_total_in_both_modes() {
    let system = LinearSystem::random_seeded(8, 3);
    let observer = NoOpObserver::new();
    let solver = LuSolver::new();

    let sequential = run_sequential(&solver, &system, 1, &observer);
    assert_eq!(sequential.average, sequential.total);

    let parallel = run_parallel(&solver, &system, 1, 4, &observer).unwrap();
    assert_eq!(parallel.average, parallel.total);
}

#[test]
fn smallest_dimension_completes() {
    let system = LinearSystem::random_seeded(2, 8);
    let config = RunConfig::new(2, 3);
    let report = run_benchmark(&LuSolver::new(), &system, &config, &NoOpObserver::new()).unwrap();
    assert_eq!(report.sequential.solved, 3);
    assert_eq!(report.parallel.solved, 3);
}

#[test]
fn largest_dimension_completes() {
    let system = LinearSystem::random_seeded(1000, 8);
    let config = RunConfig::new(1000, 1);
    let report = run_benchmark(&LuSolver::new(), &system, &config, &NoOpObserver::new()).unwrap();
    assert_eq!(report.sequential.solved, 1);
    assert_eq!(report.parallel.solved, 1);
}

#[test]
fn singular_system_is_tolerated_by_both_modes() {
    let system = singular_system(4);
    let config = RunConfig::new(4, 3);
    let report = run_benchmark(&LuSolver::new(), &system, &config, &NoOpObserver::new()).unwrap();

    // Every attempt fails, nothing aborts, counts and timing still reported.
    assert_eq!(report.sequential.failed, 3);
    assert_eq!(report.parallel.failed, 3);
    assert_eq!(report.sequential.attempts(), 3);
    assert_eq!(report.parallel.attempts(), 3);
    assert_eq!(report.sequential.average, report.sequential.total / 3);
}
