//! linbench — sequential vs thread-pooled dense solve benchmark.

use anyhow::Result;
use linbench_lib::app;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    app::run()
}
