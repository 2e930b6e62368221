//! # linbench-tui
//!
//! Interactive TUI dashboard using ratatui with Elm architecture: numeric
//! controls for the run parameters, in-run progress gauges, and the two
//! duration comparison charts.

pub mod bridge;
pub mod chart;
pub mod controls;
pub mod footer;
pub mod format;
pub mod gauges;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod metrics;
pub mod model;
pub mod report;
pub mod styles;
pub mod system_view;

pub use bridge::{HarnessObserverBridge, TuiReportSink};
pub use controls::{ControlField, Controls};
pub use logs::LogScrollState;
pub use messages::{SystemMetrics, TuiMessage};
pub use metrics::MetricsCollector;
pub use model::TuiApp;
