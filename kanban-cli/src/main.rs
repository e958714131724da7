//! Kanban CLI - render a kanban board and replay drag-and-drop sessions.
//!
//! Commands:
//! - `kanban show`: Render the initial board
//! - `kanban replay <script>`: Apply drag, create, update and delete events
//!
//! Environment variables:
//! - KANBAN_ACTIVATION_DISTANCE: Pointer travel before a press becomes a drag
//! - KANBAN_ACTIVITY_CAPACITY: Activity entries kept during a replay
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kanban::{replay, show, Cli, Commands};
use kanban_board::BoardConfig;

fn run(cli: Cli) -> anyhow::Result<()> {
    let config =
        BoardConfig::load(cli.config.as_deref()).context("loading board configuration")?;

    match cli.command {
        Commands::Show { json } => show::run_show(&config, json),
        Commands::Replay {
            script,
            json,
            log,
            actor,
        } => replay::run_replay(&config, &script, json, log, actor.as_deref()),
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("kanban=debug,kanban_board=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };
    std::process::exit(exit_code);
}
