//! Logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging from the `RUST_LOG` environment variable,
/// defaulting to info for our crates and warn elsewhere.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "warn,terbium_cli=info,terbium_vsac_client=info,terbium_convert=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
