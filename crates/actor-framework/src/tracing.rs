//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for any
//! binary built on this framework.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); actors identify themselves through the `state_type` field instead.
//! Verbosity comes from the `RUST_LOG` environment variable.
//!
//! ```bash
//! RUST_LOG=info cargo run     # Lifecycle events and successful mutations
//! RUST_LOG=debug cargo run    # Every request with its full payload
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, and shutdown with the number of handled requests
//! - **Requests**: every Snapshot and Action (`debug`), failed actions (`warn`)
//! - **Client calls**: `#[instrument]` spans around each typed client method

/// Initializes the tracing/logging infrastructure for the application.
///
/// Must be called at most once per process; a second call panics inside
/// `tracing_subscriber` because the global subscriber is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
