//! Operation traits and execution results.
//!
//! Every board mutation is a struct whose fields are its parameters. The
//! struct knows its verb/noun, how to apply itself to a board (`apply`), and
//! how to report the outcome for the activity log (`execute`).

use crate::error::{KanbanError, Result};
use crate::types::{Board, LogEntry};
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use tracing::warn;

/// Result of executing an operation
///
/// Distinguishes between:
/// - Logged: the board changed and the change should be recorded
/// - Unlogged: nothing changed (e.g. a drag released outside any column)
/// - Failed: the operation was rejected; the board stays as it was
pub enum ExecutionResult<T, E> {
    Logged { value: T, log_entry: LogEntry },
    Unlogged { value: T },
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Extract the result (Ok or Err)
    pub fn into_result(self) -> std::result::Result<T, E> {
        match self {
            Self::Logged { value, .. } => Ok(value),
            Self::Unlogged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Get the value and log entry separately
    pub fn split(self) -> (std::result::Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Logged { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }
}

/// Static description of an operation
pub trait Operation {
    fn verb(&self) -> &'static str;

    fn noun(&self) -> &'static str {
        "task"
    }

    /// Canonical op string, e.g. "add task"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// An operation that derives a new board from the current one
pub trait Execute: Operation {
    fn execute(&self, board: &Board) -> ExecutionResult<Board, KanbanError>;
}

/// Outcome of a pure `apply`, before it is turned into an `ExecutionResult`
pub(crate) enum Applied {
    /// New board plus a JSON summary for the log
    Changed(Board, Value),
    /// Nothing to do; the board is returned as-is
    Unchanged(Board),
}

/// Time `apply`, then wrap its outcome with a log entry.
pub(crate) fn run_logged<O, F>(op: &O, apply: F) -> ExecutionResult<Board, KanbanError>
where
    O: Operation + Serialize,
    F: FnOnce() -> Result<Applied>,
{
    let start = Instant::now();
    let input = match serde_json::to_value(op) {
        Ok(input) => input,
        Err(error) => {
            warn!(op = %op.op_string(), "operation input not serializable: {}", error);
            return ExecutionResult::Failed {
                error: error.into(),
                log_entry: None,
            };
        }
    };
    let result = apply();
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(Applied::Changed(value, output)) => ExecutionResult::Logged {
            value,
            log_entry: LogEntry::new(op.op_string(), input, output, duration_ms),
        },
        Ok(Applied::Unchanged(value)) => ExecutionResult::Unlogged { value },
        Err(error) => {
            let message = error.to_string();
            ExecutionResult::Failed {
                error,
                log_entry: Some(LogEntry::failure(
                    op.op_string(),
                    input,
                    &message,
                    duration_ms,
                )),
            }
        }
    }
}
