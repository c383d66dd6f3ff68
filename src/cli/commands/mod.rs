//! Command implementations for the registry CLI
//!
//! Each subcommand is implemented in its own module; `shared` holds the
//! logging setup and summary formatting they have in common.

pub mod check;
pub mod import;
pub mod serve;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Dispatch to the appropriate subcommand handler
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Serve(serve_args)) => serve::run_serve(serve_args).await,
        Some(Commands::Import(import_args)) => import::run_import(import_args),
        Some(Commands::Check(check_args)) => check::run_check(check_args),
        None => Err(Error::configuration("no subcommand provided".to_string())),
    }
}
