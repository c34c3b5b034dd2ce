//! Logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber
///
/// Filtering follows `RUST_LOG`. Returns `false` when a subscriber was
/// already installed, so hosts and tests may call this more than once.
pub fn init_logging() -> bool {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .is_ok()
}
