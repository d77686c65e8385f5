use tracing_subscriber::EnvFilter;

/// Initialize logging for a verification session.
///
/// Respects `RUST_LOG` for filtering (default `info`). Set
/// `SPYGLASS_LOG_FORMAT=json` for machine-readable output; the default
/// is human-readable compact output on stderr.
///
/// Safe to call once per process; subsequent calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var("SPYGLASS_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    // A subscriber may already be installed (embedding test runner);
    // that is not an error worth surfacing.
    let _ = result;
}
