#![no_main]

use libfuzzer_sys::fuzz_target;
use nalgebra::{DMatrix, DVector};

use linbench_core::solver::{LinearSolver, LuSolver};
use linbench_core::system::LinearSystem;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks n in 2..=9; remaining bytes fill A and b.
    let n = 2 + (data[0] % 8) as usize;
    let needed = n * n + n;

    let mut values: Vec<f64> = data[1..]
        .chunks(8)
        .map(|chunk| {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            let v = f64::from_le_bytes(buf);
            if v.is_finite() { v } else { 0.0 }
        })
        .collect();
    values.resize(needed, 0.0);

    let a = DMatrix::from_fn(n, n, |r, c| values[r * n + c]);
    let b = DVector::from_fn(n, |i, _| values[n * n + i]);
    let Ok(system) = LinearSystem::new(a, b) else {
        return;
    };

    // Must never panic; singular inputs yield None.
    let _ = LuSolver::new().solve(&system);
});
