//! # Observability
//!
//! Structured logging for every process that hosts resource actors.
//!
//! Actors log their lifecycle (`Actor started`, `Shutdown`) at `info`, every
//! request at `debug` with its payload, and failures at `warn` with the entity id.
//! Log lines carry an `entity_type` field instead of a module path, so the target
//! is hidden.
//!
//! ```bash
//! RUST_LOG=info cargo run      # state changes only
//! RUST_LOG=debug cargo run     # full payloads
//! RUST_LOG=vending_machine::session=debug,info cargo run
//! ```

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Calling it again (for example from several tests) leaves the first
/// subscriber in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
