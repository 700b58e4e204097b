use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging system
/// - Console logging on stderr is ONLY enabled when RUST_LOG is set
pub fn init_logging() {
    let rust_log_present = env::var("RUST_LOG").is_ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Only add console layer if RUST_LOG is set
    if rust_log_present {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
    } else {
        // Initialize with just the filter, no output layers
        tracing_subscriber::registry().with(env_filter).init();
    }
}
