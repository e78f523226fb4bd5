//! hgsync CLI - mirror HGS model runs between a compute host and this machine
//!
//! Usage: hgsync <COMMAND>
//!
//! Commands:
//!   pull    Bring model output back from the host
//!   push    Send forcing data to the host

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use hgsync::domain::value_objects::SyncDirection;
use hgsync::error::HgsyncError;

use cli::{Cli, Commands};
use commands::sync::cmd_sync;

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "HGSYNC_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            ui::output::print_error(&e);
            exit_code(&e)
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Pull { sync, archive } => {
            cmd_sync(SyncDirection::Pull, &sync, archive, config, cli.json)
        }
        Commands::Push { sync } => cmd_sync(SyncDirection::Push, &sync, None, config, cli.json),
    }
}

/// Tool exit codes pass through; everything else is a plain failure
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<HgsyncError>()
        .map_or(1, HgsyncError::exit_code)
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
