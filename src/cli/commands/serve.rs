//! Serve command: run the REST backend

use crate::app::http::server;
use crate::cli::args::ServeArgs;
use crate::cli::commands::shared::setup_logging;
use crate::{Config, Result};
use tracing::info;

/// Run the REST backend until shutdown
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    setup_logging(args.verbose, false)?;

    let mut config = Config::default();
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(database) = args.database {
        config = config.with_database_path(database);
    }

    info!("Using database at {}", config.database_path.display());
    server::run(config).await
}
