//! Diagnostic tracing for the generator.
//!
//! Every produced value is emitted as a `trace` event by
//! [`crate::core::sequence`]; run summaries are logged at `info`. Output goes
//! to stderr so stdout stays reserved for answers.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=chronal=trace cargo run -- solve
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
