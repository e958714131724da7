//! Task types: Task, Priority

use super::ids::TaskId;
use crate::error::{KanbanError, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priorities, lowest first
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                KanbanError::validation("priority", format!("unknown priority '{}'", s))
            })
    }
}

/// A task/card on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Informational counter, never computed
    #[serde(default)]
    pub comments: u32,
    /// Informational counter, never computed
    #[serde(default)]
    pub attachments: u32,
}

impl Task {
    /// Create a new task with a fresh ID, medium priority and today's date
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            priority: Priority::default(),
            date: today(),
            comments: 0,
            attachments: 0,
        }
    }

    /// Replace the generated ID (seed data carries its own IDs)
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_comments(mut self, comments: u32) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_attachments(mut self, attachments: u32) -> Self {
        self.attachments = attachments;
        self
    }
}

/// The current calendar date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Reject titles that are empty or only whitespace.
pub(crate) fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(KanbanError::validation("title", "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let before = today();
        let task = Task::new("Test task");
        assert_eq!(task.title, "Test task");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.comments, 0);
        assert_eq!(task.attachments, 0);
        assert!(task.date >= before && task.date <= today());
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" low ".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("MEDIUM".parse::<Priority>().unwrap(), Priority::Medium);
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(KanbanError::Validation { .. })
        ));
    }

    #[test]
    fn test_task_serialization() {
        let task = Task::new("Mockup")
            .with_id("done-1")
            .with_priority(Priority::High)
            .with_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], "done-1");
        assert_eq!(json["priority"], "High");
        assert_eq!(json["date"], "2024-03-10");

        let parsed: Task = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, task);
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Write docs").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   \t").is_err());
    }
}
