//! Logger setup.
//!
//! Standard output belongs to the chat echo, so log records go to stderr.
//! The logger is installed lazily on the first host callback.

use std::sync::Once;

/// Environment variable holding an `env_logger` filter, e.g. `debug`.
pub const LOG_ENV: &str = "PWN3_TRAINER_LOG";

const DEFAULT_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Install the logger if nothing has yet. Cheap after the first call.
pub fn init() {
    INIT.call_once(|| {
        let env = env_logger::Env::new().filter_or(LOG_ENV, DEFAULT_FILTER);
        // Another logger may already be installed by the test harness.
        let _ = env_logger::Builder::from_env(env)
            .target(env_logger::Target::Stderr)
            .format_timestamp_millis()
            .try_init();

        log::info!(
            "{} {} loaded into pid {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            std::process::id()
        );
    });
}
