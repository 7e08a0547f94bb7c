//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "MOMENTO_LOG";

const DEFAULT_FILTER: &str = "momento_mori=info,tower_http=info";

static INIT: Once = Once::new();

/// Initialize the logging system.
///
/// Reads `MOMENTO_LOG` for filter directives, e.g.
/// `MOMENTO_LOG=momento_mori=debug,tower_http=debug`.
/// Falls back to `momento_mori=info,tower_http=info` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber already installed by an embedding application wins
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
