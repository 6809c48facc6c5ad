//! Logging bootstrap shared by binaries and integration tests.

/// Installs the global tracing subscriber.
///
/// Filtering comes from `RUST_LOG`, so verbosity is chosen per run:
///
/// - `RUST_LOG=info` for lifecycle events
/// - `RUST_LOG=debug` for every request an actor handles
/// - `RUST_LOG=order_simulator=debug` to scope to one crate
///
/// Call once, before any actor is spawned. A second call panics because
/// the global subscriber is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
