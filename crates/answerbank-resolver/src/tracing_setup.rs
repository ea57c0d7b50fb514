//! Tracing initialization.

use std::sync::Once;

use answerbank_core::config::defaults::LOG_FILTER_ENV;
use answerbank_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `ANSWERBANK_LOG` overrides `config.log_level`. Idempotent; a subscriber
/// installed elsewhere first is left alone.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_names(true)
            .with_writer(std::io::stderr);

        let _ = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
