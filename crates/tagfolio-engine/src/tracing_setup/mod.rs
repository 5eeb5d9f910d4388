//! Subscriber installation and span helpers.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "TAGFOLIO_LOG";

static INIT: Once = Once::new();

/// Install a `fmt` subscriber filtered by `TAGFOLIO_LOG` (default `info`).
///
/// Idempotent. If the host application already installed a global
/// subscriber, that one is kept.
pub fn init(json: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        let installed = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
