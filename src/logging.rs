//! Structured logging setup.
//!
//! Levels come from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info hotel_ops stats
//! RUST_LOG=debug hotel_ops rooms "status=occupied"
//! ```
//!
//! Loads and reports log at `info`; the pure filter/aggregate functions only
//! log at `debug`.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
