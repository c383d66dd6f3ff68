//! Shared helpers for CLI commands

use crate::Result;

/// Set up structured logging for a command
///
/// Honors `RUST_LOG` when set; otherwise defaults to the given level for this
/// crate. Logs go to stderr so command output stays pipeable.
pub fn setup_logging(verbose: bool, quiet: bool) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("windfarm_registry={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}
