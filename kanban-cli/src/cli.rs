//! CLI definition for the kanban command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kanban - render a board and replay drag-and-drop sessions.
///
/// The board starts from configuration (columns and seed tasks) and lives
/// only for the duration of the command.
#[derive(Parser, Debug)]
#[command(name = "kanban")]
#[command(version)]
#[command(about = "Render a kanban board and replay drag-and-drop sessions")]
#[command(
    long_about = "Render a kanban board and replay drag-and-drop sessions.\n\n\
    The board is built from configuration: built-in defaults, then kanban.yaml \
    in the working directory (or --config), then KANBAN_* environment variables.\n\n\
    Environment variables:\n  \
    KANBAN_ACTIVATION_DISTANCE  Pointer travel in pixels before a press becomes a drag\n  \
    KANBAN_ACTIVITY_CAPACITY    Activity entries kept during a replay"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file (defaults to ./kanban.yaml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the initial board
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a script of drag, create, update and delete events
    Replay {
        /// YAML script file
        script: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Also print the activity log
        #[arg(long)]
        log: bool,
        /// Attribute activity to this actor (overrides the script's actor)
        #[arg(long, value_name = "NAME")]
        actor: Option<String>,
    },
}
