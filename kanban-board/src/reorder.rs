//! Reorder engine: turns a drag-end event into the next board.
//!
//! Resolution happens in two steps. `resolve_move` reads the board and
//! produces a [`MovePlan`] (source column, destination column, insertion
//! index). `Board::apply_move` commits the plan, rebuilding only the one or
//! two columns involved.

use crate::error::{KanbanError, Result};
use crate::types::{Board, ColumnId, DropTarget, Task, TaskId};
use serde::Serialize;
use tracing::{debug, trace};

/// A fully resolved move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovePlan {
    /// The dragged task
    pub task: Task,
    pub source: ColumnId,
    /// Index of the task in the source column before the move
    pub source_index: usize,
    pub destination: ColumnId,
    /// Index in the destination column after the task was removed from its
    /// source
    pub insert_index: usize,
}

impl MovePlan {
    pub fn is_same_column(&self) -> bool {
        self.source == self.destination
    }

    /// True when applying the plan would put the task back where it was
    pub fn is_identity(&self) -> bool {
        self.is_same_column() && self.source_index == self.insert_index
    }
}

/// Resolve where `active` lands when released over `over`.
///
/// Fails with `TaskNotFound` when `active` is not on the board and with
/// `DropTargetNotFound` when `over` names neither a board column nor a task on
/// the board.
pub fn resolve_move(board: &Board, active: &TaskId, over: &DropTarget) -> Result<MovePlan> {
    let source = board
        .find_task(active)
        .ok_or_else(|| KanbanError::task_not_found(active))?;

    let destination = match over {
        DropTarget::Column(column) if board.contains_column(column) => column.clone(),
        DropTarget::Task(task) => board
            .find_task(task)
            .map(|loc| loc.column.clone())
            .ok_or_else(|| KanbanError::DropTargetNotFound {
                id: task.to_string(),
            })?,
        DropTarget::Column(column) => {
            return Err(KanbanError::DropTargetNotFound {
                id: column.to_string(),
            })
        }
    };

    // Destination sequence as it looks once the task left its source
    let remaining = board
        .tasks(&destination)
        .unwrap_or_default()
        .iter()
        .filter(|t| &t.id != active);

    let insert_index = match over {
        DropTarget::Column(_) => remaining.count(),
        DropTarget::Task(over_id) => {
            let tasks: Vec<&Task> = remaining.collect();
            tasks
                .iter()
                .position(|t| &t.id == over_id)
                // Stale target: keep the task, append it
                .unwrap_or(tasks.len())
        }
    };

    trace!(
        task = %active,
        source = %source.column,
        destination = %destination,
        insert_index,
        "resolved move"
    );

    Ok(MovePlan {
        task: source.task.clone(),
        source: source.column.clone(),
        source_index: source.index,
        destination,
        insert_index,
    })
}

impl Board {
    /// Commit a plan produced by [`resolve_move`] against this board.
    pub(crate) fn apply_move(&self, plan: &MovePlan) -> Board {
        if plan.is_identity() {
            return self.clone();
        }

        let mut source: Vec<Task> = self
            .tasks(&plan.source)
            .unwrap_or_default()
            .iter()
            .filter(|t| t.id != plan.task.id)
            .cloned()
            .collect();

        if plan.is_same_column() {
            let index = plan.insert_index.min(source.len());
            source.insert(index, plan.task.clone());
            return self.replace_columns([(plan.source.clone(), source)]);
        }

        let mut destination = self.tasks(&plan.destination).unwrap_or_default().to_vec();
        let index = plan.insert_index.min(destination.len());
        destination.insert(index, plan.task.clone());

        self.replace_columns([
            (plan.source.clone(), source),
            (plan.destination.clone(), destination),
        ])
    }
}

/// Resolve a drag-end event to the move it calls for.
///
/// `None` means the board stays as it is: released outside any target
/// (`over` is `None`), onto the dragged task itself, onto something that no
/// longer exists, or back into the slot the task already holds. Only a
/// dragged task missing from the board is an error.
pub fn resolve_drop(
    board: &Board,
    active: &TaskId,
    over: Option<&DropTarget>,
) -> Result<Option<MovePlan>> {
    let Some(over) = over else {
        debug!(task = %active, "drag ended outside any target");
        return Ok(None);
    };
    if over.is_task(active) {
        debug!(task = %active, "drag ended on itself");
        return Ok(None);
    }

    match resolve_move(board, active, over) {
        Ok(plan) if plan.is_identity() => {
            debug!(task = %active, target = %over, "drag ended where it started");
            Ok(None)
        }
        Ok(plan) => Ok(Some(plan)),
        Err(err) if err.is_benign() => {
            debug!(task = %active, target = %over, "ignoring drag: {}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Compute the board after `active` is released over `over`.
///
/// Every case [`resolve_drop`] treats as a no-op returns the board unchanged.
pub fn reorder(board: &Board, active: &TaskId, over: Option<&DropTarget>) -> Result<Board> {
    Ok(match resolve_drop(board, active, over)? {
        Some(plan) => board.apply_move(&plan),
        None => board.clone(),
    })
}
