//! Board state: the fixed column set and each column's ordered tasks.

use super::ids::{ColumnId, TaskId};
use super::target::DropTarget;
use super::task::{validate_title, Task};
use crate::config::BoardConfig;
use crate::error::{KanbanError, Result};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;
use std::sync::Arc;

/// An immutable snapshot of the whole board.
///
/// Column sequences are reference counted. Deriving a new board only
/// allocates the columns that changed, so `shares_column` can tell a renderer
/// which columns it may skip.
#[derive(Debug, Clone)]
pub struct Board {
    columns: IndexMap<ColumnId, Arc<Vec<Task>>>,
}

/// Where a task lives on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLocation<'a> {
    pub column: &'a ColumnId,
    pub index: usize,
    pub task: &'a Task,
}

impl Board {
    /// Create an empty board with the given columns, in display order.
    pub fn new<I>(columns: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<ColumnId>,
    {
        let mut map = IndexMap::new();
        for column in columns {
            let column = column.into();
            if column.as_str().trim().is_empty() {
                return Err(KanbanError::validation("columns", "column name must not be empty"));
            }
            if map.contains_key(&column) {
                return Err(KanbanError::duplicate_id("column", column.as_str()));
            }
            map.insert(column, Arc::new(Vec::new()));
        }
        if map.is_empty() {
            return Err(KanbanError::validation("columns", "board needs at least one column"));
        }
        Ok(Self { columns: map })
    }

    /// Build the initial board from configuration: columns plus seed tasks.
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        let mut board = Self::new(config.columns.iter().map(String::as_str))?;
        for seed in &config.seed {
            board = board.with_task(&ColumnId::from_string(&seed.column), seed.to_task())?;
        }
        tracing::debug!(
            columns = board.columns.len(),
            tasks = board.len(),
            "initialized board"
        );
        Ok(board)
    }

    /// Seed a task at the end of `column`, validating the board invariants.
    pub fn with_task(self, column: &ColumnId, task: Task) -> Result<Self> {
        validate_title(&task.title)?;
        if self.contains_task(&task.id) {
            return Err(KanbanError::duplicate_id("task", task.id.as_str()));
        }
        let mut tasks = self.require_column(column)?.to_vec();
        tasks.push(task);
        Ok(self.replace_columns([(column.clone(), tasks)]))
    }

    /// Column identifiers in fixed display order
    pub fn columns(&self) -> impl Iterator<Item = &ColumnId> {
        self.columns.keys()
    }

    pub fn contains_column(&self, column: &ColumnId) -> bool {
        self.columns.contains_key(column)
    }

    /// Tasks of a column in display order, or `None` for an unknown column
    pub fn tasks(&self, column: &ColumnId) -> Option<&[Task]> {
        self.columns.get(column).map(|tasks| tasks.as_slice())
    }

    /// Every column with its tasks, in display order
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &[Task])> {
        self.columns.iter().map(|(id, tasks)| (id, tasks.as_slice()))
    }

    /// Total number of tasks on the board
    pub fn len(&self) -> usize {
        self.columns.values().map(|tasks| tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of tasks in one column (0 for an unknown column)
    pub fn column_len(&self, column: &ColumnId) -> usize {
        self.tasks(column).map_or(0, <[Task]>::len)
    }

    pub fn find_task(&self, id: &TaskId) -> Option<TaskLocation<'_>> {
        self.columns.iter().find_map(|(column, tasks)| {
            tasks
                .iter()
                .position(|t| &t.id == id)
                .map(|index| TaskLocation {
                    column,
                    index,
                    task: &tasks[index],
                })
        })
    }

    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.find_task(id).is_some()
    }

    /// All task IDs, column by column
    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.columns.values().flat_map(|tasks| tasks.iter().map(|t| &t.id))
    }

    /// Map a raw drop ID to a target: a column when it names one of the
    /// board's columns, otherwise a task.
    pub fn classify_target(&self, raw: &str) -> DropTarget {
        if self.columns.contains_key(raw) {
            DropTarget::column(raw)
        } else {
            DropTarget::task(raw)
        }
    }

    /// True when both boards hold the very same allocation for `column`.
    pub fn shares_column(&self, other: &Board, column: &ColumnId) -> bool {
        match (self.columns.get(column), other.columns.get(column)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Check that task IDs are unique across the board and titles non-empty.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (_, tasks) in self.iter() {
            for task in tasks {
                if !seen.insert(&task.id) {
                    return Err(KanbanError::duplicate_id("task", task.id.as_str()));
                }
                validate_title(&task.title)?;
            }
        }
        Ok(())
    }

    pub(crate) fn require_column(&self, column: &ColumnId) -> Result<&[Task]> {
        self.tasks(column)
            .ok_or_else(|| KanbanError::column_not_found(column))
    }

    /// Derive a new board with some column sequences replaced. Every other
    /// column keeps its allocation.
    pub(crate) fn replace_columns<I>(&self, updates: I) -> Board
    where
        I: IntoIterator<Item = (ColumnId, Vec<Task>)>,
    {
        let mut columns = self.columns.clone();
        for (column, tasks) in updates {
            if let Some(slot) = columns.get_mut(&column) {
                *slot = Arc::new(tasks);
            }
        }
        Board { columns }
    }
}

impl PartialEq for Board {
    /// Equal when the columns, their order and every task sequence match.
    fn eq(&self, other: &Self) -> bool {
        self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(other.columns.iter())
                .all(|((ca, ta), (cb, tb))| ca == cb && (Arc::ptr_eq(ta, tb) || ta == tb))
    }
}

impl Eq for Board {}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, tasks) in self.iter() {
            map.serialize_entry(column, tasks)?;
        }
        map.end()
    }
}
