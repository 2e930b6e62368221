//! linbench library — application wiring for the solve benchmark.

pub mod app;
pub mod controller;
