//! Board and activity rendering

use comfy_table::{Cell, Table};
use kanban_board::{Board, LogEntry, Task};
use serde::Serialize;

use crate::table::{count_label, new_table, truncate_str};

const TITLE_WIDTH: usize = 40;
const RESULT_WIDTH: usize = 60;

/// Card text: title, then id/priority/date, then the counters
pub fn card(task: &Task) -> String {
    format!(
        "{}\n#{}  {}  {}\n{}, {}",
        truncate_str(&task.title, TITLE_WIDTH),
        task.id,
        task.priority,
        task.date,
        count_label(task.comments, "comment"),
        count_label(task.attachments, "attachment"),
    )
}

/// One table column per board column, cards stacked top to bottom.
pub fn board_table(board: &Board) -> Table {
    let mut table = new_table();
    table.set_header(
        board
            .iter()
            .map(|(column, tasks)| Cell::new(format!("{} ({})", column, tasks.len()))),
    );

    let depth = board.iter().map(|(_, tasks)| tasks.len()).max().unwrap_or(0);
    for row in 0..depth {
        table.add_row(
            board
                .iter()
                .map(|(_, tasks)| Cell::new(tasks.get(row).map(card).unwrap_or_default())),
        );
    }
    table
}

/// Activity log, newest first
pub fn activity_table<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Actor", "Operation", "Result"]);
    for entry in entries {
        table.add_row(vec![
            entry.timestamp.format("%H:%M:%S%.3f").to_string(),
            entry.actor.clone().unwrap_or_else(|| "-".to_string()),
            entry.op.clone(),
            truncate_str(&entry.output.to_string(), RESULT_WIDTH),
        ]);
    }
    table
}

#[derive(Serialize)]
struct Report<'a> {
    board: &'a Board,
    activity: Vec<&'a LogEntry>,
}

/// Pretty JSON for `--json`: the board as an ordered map of columns, or
/// `{board, activity}` when an activity log is included.
pub fn board_json(board: &Board, activity: Option<Vec<&LogEntry>>) -> anyhow::Result<String> {
    let rendered = match activity {
        Some(activity) => serde_json::to_string_pretty(&Report { board, activity })?,
        None => serde_json::to_string_pretty(board)?,
    };
    Ok(rendered)
}
