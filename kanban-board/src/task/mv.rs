//! MoveTask command

use crate::error::{KanbanError, Result};
use crate::operation::{run_logged, Applied, Execute, ExecutionResult, Operation};
use crate::reorder::{reorder, resolve_drop};
use crate::types::{Board, DragEnd, DropTarget, TaskId};
use serde::{Deserialize, Serialize};

/// Move a task in response to a drag-end event
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveTask {
    /// The dragged task
    pub id: TaskId,
    /// What it was released over, if anything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over: Option<DropTarget>,
}

impl MoveTask {
    pub fn new(id: impl Into<TaskId>, over: DropTarget) -> Self {
        Self {
            id: id.into(),
            over: Some(over),
        }
    }

    /// Move to the end of a column
    pub fn to_column(id: impl Into<TaskId>, column: &str) -> Self {
        Self::new(id, DropTarget::column(column))
    }

    /// Move into the slot currently held by another task
    pub fn onto_task(id: impl Into<TaskId>, other: &str) -> Self {
        Self::new(id, DropTarget::task(other))
    }

    pub fn apply(&self, board: &Board) -> Result<Board> {
        reorder(board, &self.id, self.over.as_ref())
    }
}

impl From<DragEnd> for MoveTask {
    fn from(drag: DragEnd) -> Self {
        Self {
            id: drag.active,
            over: drag.over,
        }
    }
}

impl Operation for MoveTask {
    fn verb(&self) -> &'static str {
        "move"
    }
}

impl Execute for MoveTask {
    fn execute(&self, board: &Board) -> ExecutionResult<Board, KanbanError> {
        run_logged(self, || {
            let Some(plan) = resolve_drop(board, &self.id, self.over.as_ref())? else {
                return Ok(Applied::Unchanged(board.clone()));
            };
            let output = serde_json::json!({
                "id": plan.task.id,
                "from": plan.source,
                "to": plan.destination,
                "index": plan.insert_index,
            });
            Ok(Applied::Changed(board.apply_move(&plan), output))
        })
    }
}
