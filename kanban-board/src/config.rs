//! Board configuration using Figment
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults (the three standard columns)
//! 2. A YAML file: an explicit path, or `kanban.yaml` in the working directory
//! 3. Environment variables prefixed `KANBAN_` (e.g. `KANBAN_ACTIVATION_DISTANCE=12`)
//!
//! Without a `seed` from any source, the default columns get the demo tasks
//! and a custom column set starts empty.

use crate::drag::{DragSensor, DEFAULT_ACTIVATION_DISTANCE};
use crate::error::{KanbanError, Result};
use crate::processor::DEFAULT_ACTIVITY_CAPACITY;
use crate::types::{today, Priority, Task, TaskId};
use chrono::NaiveDate;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "kanban.yaml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "KANBAN_";

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Fixed column set, in display order
    pub columns: Vec<String>,
    /// Tasks present when the board is created. When no source sets it, the
    /// demo tasks are used for the default column set and none otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seed: Vec<SeedTask>,
    /// Pointer travel in pixels before a press becomes a drag
    pub activation_distance: f64,
    /// Activity entries kept by the processor
    pub activity_capacity: usize,
}

/// A task declared in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTask {
    pub column: String,
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
    /// Defaults to today
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub attachments: u32,
}

impl SeedTask {
    pub fn to_task(&self) -> Task {
        Task {
            id: TaskId::from_string(&self.id),
            title: self.title.clone(),
            priority: self.priority,
            date: self.date.unwrap_or_else(today),
            comments: self.comments,
            attachments: self.attachments,
        }
    }
}

fn seed_task(
    column: &str,
    id: &str,
    title: &str,
    priority: Priority,
    date: NaiveDate,
    comments: u32,
    attachments: u32,
) -> SeedTask {
    SeedTask {
        column: column.into(),
        id: id.into(),
        title: title.into(),
        priority,
        date: Some(date),
        comments,
        attachments,
    }
}

/// The demo board's tasks, dated as they were first entered
fn demo_seed() -> Vec<SeedTask> {
    let march = |day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap_or_default();
    vec![
        seed_task(
            "To-do",
            "todo-1",
            "Review UX Feedback",
            Priority::High,
            march(13),
            1,
            2,
        ),
        seed_task(
            "To-do",
            "todo-2",
            "Research Best Practices",
            Priority::Low,
            march(10),
            2,
            2,
        ),
        seed_task(
            "In Progress",
            "progress-1",
            "Create Wireframe",
            Priority::Medium,
            march(12),
            1,
            0,
        ),
        seed_task("Done", "done-1", "Mockup", Priority::High, march(10), 0, 0),
    ]
}

fn default_columns() -> Vec<String> {
    vec!["To-do".into(), "In Progress".into(), "Done".into()]
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            seed: demo_seed(),
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
            activity_capacity: DEFAULT_ACTIVITY_CAPACITY,
        }
    }
}

impl BoardConfig {
    /// Load configuration from all sources.
    ///
    /// An explicit `path` must exist; the implicit `kanban.yaml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(KanbanError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
        }
        let figment = Self::figment(path);
        let mut config: Self = figment.extract()?;
        if !figment.contains("seed") {
            config.seed = Self::seed_for(&config.columns);
        }
        debug!(
            columns = config.columns.len(),
            seed = config.seed.len(),
            "loaded board configuration"
        );
        Ok(config)
    }

    /// The layered figment behind `load`.
    ///
    /// Seed tasks name columns, so the demo seed is not part of the defaults
    /// layer; `load` fills it in once the column set is known.
    pub fn figment(path: Option<&Path>) -> Figment {
        let defaults = Self {
            seed: Vec::new(),
            ..Self::default()
        };
        let mut figment = Figment::from(Serialized::defaults(defaults));

        match path {
            Some(path) => figment = figment.merge(Yaml::file(path)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                figment = figment.merge(Yaml::file(DEFAULT_CONFIG_FILE))
            }
            None => {}
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Seed used when no source sets one
    fn seed_for(columns: &[String]) -> Vec<SeedTask> {
        if columns == default_columns().as_slice() {
            demo_seed()
        } else {
            Vec::new()
        }
    }

    pub fn drag_sensor(&self) -> DragSensor {
        DragSensor::new(self.activation_distance)
    }
}
