use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "HEFT_LOG";

/// Install a stderr subscriber. `HEFT_LOG` takes precedence; otherwise `--verbose`
/// selects `debug` and the default is `warn`.
pub(crate) fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = std::env::var(LOG_ENV).map_or_else(
        |_| EnvFilter::new(default_level),
        |directive| EnvFilter::new(&directive),
    );

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
