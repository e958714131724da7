//! DeleteTask command

use crate::error::{KanbanError, Result};
use crate::operation::{run_logged, Applied, Execute, ExecutionResult, Operation};
use crate::types::{Board, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Delete a task from a column.
///
/// Deleting a task that is already gone succeeds without changing anything:
/// two delete clicks racing each other must not fail.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteTask {
    pub column: ColumnId,
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(column: impl Into<ColumnId>, id: impl Into<TaskId>) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
        }
    }

    /// The new board, or `None` when the task was not in the column
    fn remove(&self, board: &Board) -> Result<Option<Board>> {
        let tasks = board.require_column(&self.column)?;
        if !tasks.iter().any(|t| t.id == self.id) {
            debug!(task = %self.id, column = %self.column, "task already gone");
            return Ok(None);
        }
        let remaining = tasks.iter().filter(|t| t.id != self.id).cloned().collect();
        Ok(Some(board.replace_columns([(self.column.clone(), remaining)])))
    }

    pub fn apply(&self, board: &Board) -> Result<Board> {
        Ok(self.remove(board)?.unwrap_or_else(|| board.clone()))
    }
}

impl Operation for DeleteTask {
    fn verb(&self) -> &'static str {
        "delete"
    }
}

impl Execute for DeleteTask {
    fn execute(&self, board: &Board) -> ExecutionResult<Board, KanbanError> {
        run_logged(self, || {
            Ok(match self.remove(board)? {
                Some(next) => Applied::Changed(next, serde_json::json!({ "deleted": self.id })),
                None => Applied::Unchanged(board.clone()),
            })
        })
    }
}
