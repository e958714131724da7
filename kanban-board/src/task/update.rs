//! UpdateTask command

use crate::error::{KanbanError, Result};
use crate::operation::{run_logged, Applied, Execute, ExecutionResult, Operation};
use crate::types::{Board, ColumnId, Priority, TaskId, TaskPatch};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Update an existing task in place
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateTask {
    /// Column the task is expected in
    pub column: ColumnId,
    /// The task ID to update
    pub id: TaskId,
    #[serde(flatten)]
    pub patch: TaskPatch,
}

impl UpdateTask {
    pub fn new(column: impl Into<ColumnId>, id: impl Into<TaskId>) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
            patch: TaskPatch::default(),
        }
    }

    pub fn with_patch(mut self, patch: TaskPatch) -> Self {
        self.patch = patch;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.patch.title = Some(title.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.patch.priority = Some(priority);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.patch.date = Some(date);
        self
    }

    pub fn with_comments(mut self, comments: u32) -> Self {
        self.patch.comments = Some(comments);
        self
    }

    pub fn with_attachments(mut self, attachments: u32) -> Self {
        self.patch.attachments = Some(attachments);
        self
    }

    /// Merge the patch into the task; its position does not change.
    pub fn apply(&self, board: &Board) -> Result<Board> {
        let tasks = board.require_column(&self.column)?;
        let index = tasks
            .iter()
            .position(|t| t.id == self.id)
            .ok_or_else(|| KanbanError::task_not_found(&self.id))?;

        let updated = self.patch.apply_to(&tasks[index])?;
        let mut tasks = tasks.to_vec();
        tasks[index] = updated;
        Ok(board.replace_columns([(self.column.clone(), tasks)]))
    }
}

impl Operation for UpdateTask {
    fn verb(&self) -> &'static str {
        "update"
    }
}

impl Execute for UpdateTask {
    fn execute(&self, board: &Board) -> ExecutionResult<Board, KanbanError> {
        run_logged(self, || {
            let next = self.apply(board)?;
            let output = next
                .find_task(&self.id)
                .map(|loc| serde_json::to_value(loc.task))
                .transpose()?
                .unwrap_or_default();
            Ok(Applied::Changed(next, output))
        })
    }
}
