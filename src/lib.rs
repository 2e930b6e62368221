//! Workspace test root. The actual crates live under `crates/`; this
//! package only hosts the workspace-level integration tests in `tests/`.
