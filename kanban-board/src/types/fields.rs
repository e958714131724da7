//! Field sets submitted by a presentation layer for create and update.

use super::task::{today, validate_title, Priority, Task};
use super::TaskId;
use crate::error::{KanbanError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields for a new task. Unset fields take defaults at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Defaults to the current date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<u32>,
}

impl TaskFields {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_comments(mut self, comments: u32) -> Self {
        self.comments = Some(comments);
        self
    }

    pub fn with_attachments(mut self, attachments: u32) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// Parse raw form input. An empty date means "today"; counters that are
    /// not non-negative integers read as zero.
    pub fn from_form(
        title: &str,
        priority: &str,
        date: &str,
        comments: &str,
        attachments: &str,
    ) -> Result<Self> {
        Ok(Self {
            title: title.to_string(),
            priority: parse_priority(priority)?,
            date: parse_date(date)?,
            comments: Some(parse_counter(comments)),
            attachments: Some(parse_counter(attachments)),
        })
    }

    /// Validate and build the task under the given ID.
    pub(crate) fn into_task(self, id: TaskId) -> Result<Task> {
        validate_title(&self.title)?;
        Ok(Task {
            id,
            title: self.title,
            priority: self.priority.unwrap_or_default(),
            date: self.date.unwrap_or_else(today),
            comments: self.comments.unwrap_or(0),
            attachments: self.attachments.unwrap_or(0),
        })
    }
}

/// Partial update. `None` leaves the existing value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<u32>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_comments(mut self, comments: u32) -> Self {
        self.comments = Some(comments);
        self
    }

    pub fn with_attachments(mut self, attachments: u32) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// Parse raw edit-form input. Every field of the edit form is submitted,
    /// so all of them are set; an empty date keeps the current one.
    pub fn from_form(
        title: &str,
        priority: &str,
        date: &str,
        comments: &str,
        attachments: &str,
    ) -> Result<Self> {
        Ok(Self {
            title: Some(title.to_string()),
            priority: parse_priority(priority)?,
            date: parse_date(date)?,
            comments: Some(parse_counter(comments)),
            attachments: Some(parse_counter(attachments)),
        })
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merge supplied fields over `task`. The ID never changes.
    pub(crate) fn apply_to(&self, task: &Task) -> Result<Task> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }

        let mut updated = task.clone();
        if let Some(title) = &self.title {
            updated.title = title.clone();
        }
        if let Some(priority) = self.priority {
            updated.priority = priority;
        }
        if let Some(date) = self.date {
            updated.date = date;
        }
        if let Some(comments) = self.comments {
            updated.comments = comments;
        }
        if let Some(attachments) = self.attachments {
            updated.attachments = attachments;
        }
        Ok(updated)
    }
}

fn parse_priority(raw: &str) -> Result<Option<Priority>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some)
}

fn parse_date(raw: &str) -> Result<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| KanbanError::validation("date", format!("'{}': {}", raw, e)))
}

fn parse_counter(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}
