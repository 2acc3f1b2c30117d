//! # Diagnostics
//!
//! Diagnostics and the event log are two separate streams. The event log is
//! the numbered output of the simulation itself; diagnostics are `tracing`
//! events written to stderr and filtered with `RUST_LOG`:
//!
//! ```bash
//! # Coordinator milestones and the final report
//! RUST_LOG=info post-office 20 3 100 10 500
//!
//! # Per-actor decisions (queue joins, shift summaries)
//! RUST_LOG=debug post-office 20 3 100 10 500
//!
//! # Every logged line and every unit a clerk takes
//! RUST_LOG=post_office=trace post-office 20 3 100 10 500
//! ```
//!
//! Each actor task runs inside a span carrying its role and id, so a debug
//! line reads like `actor{role=U id=2}: shift over services=7 breaks=3`.

/// Installs the stderr subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
