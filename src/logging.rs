//! Logging setup
//!
//! Log output goes to stderr so it never interleaves with menu output on
//! stdout. The filter is read from `LEDGER_LOG` (e.g. `LEDGER_LOG=debug`) and
//! defaults to `warn`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "LEDGER_LOG";

/// Install the global tracing subscriber
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_log = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_log)
        .try_init();
}
