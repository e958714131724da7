//! Kanban CLI: renders a board and replays drag-and-drop sessions against it.

pub mod cli;
pub mod render;
pub mod replay;
pub mod script;
pub mod show;
pub mod table;

pub use cli::{Cli, Commands};
