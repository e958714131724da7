//! `kanban show`

use kanban_board::{Board, BoardConfig};

use crate::render::{board_json, board_table};

/// Print the initial board built from configuration.
pub fn run_show(config: &BoardConfig, json: bool) -> anyhow::Result<()> {
    let board = Board::from_config(config)?;
    if json {
        println!("{}", board_json(&board, None)?);
    } else {
        println!("{}", board_table(&board));
    }
    Ok(())
}
