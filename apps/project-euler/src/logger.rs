use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the stderr logger.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks `debug` over `warn`.
pub fn setup_logger(verbose: bool) {
    INIT.call_once(|| {
        let default_level = if verbose { "debug" } else { "warn" };
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        tracing_subscriber::fmt()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .init();
    });
}
