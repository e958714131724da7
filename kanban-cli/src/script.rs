//! Replay scripts: a YAML list of board events
//!
//! ```yaml
//! actor: alice
//! events:
//!   - event: drag
//!     active: todo-1
//!     over: Done
//!   - event: create
//!     column: To-do
//!     title: Write release notes
//!     priority: High
//!   - event: update
//!     column: To-do
//!     id: todo-2
//!     title: Research patterns
//!   - event: delete
//!     column: Done
//!     id: done-1
//! ```
//!
//! Create and update events carry their task fields inline, so a misspelled
//! field name is ignored rather than rejected. An update must set at least
//! one field.

use std::fs;
use std::path::Path;

use anyhow::Context;
use kanban_board::{
    AddTask, Board, BoardProcessor, DeleteTask, DragEnd, DragSensor, MoveTask, UpdateTask,
};
use serde::Deserialize;
use tracing::debug;

/// A parsed replay script
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Actor recorded on every activity entry
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// One user interaction
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Drag(DragStep),
    Create(AddTask),
    Update(UpdateTask),
    Delete(DeleteTask),
}

/// A drag gesture as the pointer layer reports it: raw IDs plus, optionally,
/// how far the pointer travelled.
#[derive(Debug, Clone, Deserialize)]
pub struct DragStep {
    pub active: String,
    /// Column name or task ID under the release point
    #[serde(default)]
    pub over: Option<String>,
    #[serde(default)]
    pub dx: Option<f64>,
    #[serde(default)]
    pub dy: Option<f64>,
}

impl DragStep {
    /// `None` when the pointer never travelled far enough to start a drag
    pub fn drag_end(&self, board: &Board, sensor: &DragSensor) -> Option<DragEnd> {
        if let (Some(dx), Some(dy)) = (self.dx, self.dy) {
            if !sensor.activates(dx, dy) {
                return None;
            }
        }
        Some(DragEnd::from_raw(board, &self.active, self.over.as_deref()))
    }
}

impl Script {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing script {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml_ng::from_str(text)?)
    }
}

impl ScriptEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Drag(_) => "drag",
            Self::Create(_) => "create",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }

    /// Run the event through the processor.
    pub fn apply(
        &self,
        processor: &mut BoardProcessor,
        sensor: &DragSensor,
    ) -> anyhow::Result<()> {
        match self {
            Self::Drag(step) => match step.drag_end(processor.board(), sensor) {
                Some(drag) => {
                    processor.process(&MoveTask::from(drag))?;
                }
                None => debug!(
                    task = %step.active,
                    "pointer below activation distance, treated as a click"
                ),
            },
            Self::Create(op) => {
                processor.process(op)?;
            }
            Self::Update(op) => {
                if op.patch.is_empty() {
                    anyhow::bail!("update of {} in {} sets no fields", op.id, op.column);
                }
                processor.process(op)?;
            }
            Self::Delete(op) => {
                processor.process(op)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_board::{BoardConfig, ColumnId, DropTarget, Priority, TaskId};

    fn seeded() -> Board {
        Board::from_config(&BoardConfig::default()).unwrap()
    }

    #[test]
    fn test_parse_all_event_kinds() {
        let script = Script::parse(
            r#"
actor: alice
events:
  - event: drag
    active: todo-1
    over: Done
  - event: drag
    active: todo-2
  - event: create
    column: To-do
    title: Write release notes
    priority: High
    date: 2024-04-01
  - event: update
    column: To-do
    id: todo-2
    comments: 5
  - event: delete
    column: Done
    id: done-1
"#,
        )
        .unwrap();

        assert_eq!(script.actor.as_deref(), Some("alice"));
        let names: Vec<&str> = script.events.iter().map(ScriptEvent::name).collect();
        assert_eq!(names, ["drag", "drag", "create", "update", "delete"]);

        match &script.events[2] {
            ScriptEvent::Create(op) => {
                assert_eq!(op.column, ColumnId::from("To-do"));
                assert_eq!(op.fields.title, "Write release notes");
                assert_eq!(op.fields.priority, Some(Priority::High));
            }
            other => panic!("unexpected event: {:?}", other),
        }
        match &script.events[3] {
            ScriptEvent::Update(op) => {
                assert_eq!(op.id, TaskId::from("todo-2"));
                assert_eq!(op.patch.comments, Some(5));
                assert!(op.patch.title.is_none());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_event_rejected() {
        let result = Script::parse("events:\n  - event: archive\n    id: todo-1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_drag_step_classifies_target() {
        let board = seeded();
        let sensor = DragSensor::default();
        let step = |over: &str| DragStep {
            active: "todo-1".into(),
            over: Some(over.into()),
            dx: None,
            dy: None,
        };

        let drag = step("Done").drag_end(&board, &sensor).unwrap();
        assert_eq!(drag.over, Some(DropTarget::column("Done")));
        let drag = step("done-1").drag_end(&board, &sensor).unwrap();
        assert_eq!(drag.over, Some(DropTarget::task("done-1")));
    }

    #[test]
    fn test_short_pointer_travel_is_a_click() {
        let board = seeded();
        let sensor = DragSensor::default();
        let mut step = DragStep {
            active: "todo-1".into(),
            over: Some("Done".into()),
            dx: Some(3.0),
            dy: Some(2.0),
        };
        assert!(step.drag_end(&board, &sensor).is_none());

        step.dx = Some(30.0);
        assert!(step.drag_end(&board, &sensor).is_some());
    }

    #[test]
    fn test_update_without_fields_rejected() {
        let mut processor = BoardProcessor::new(seeded());
        let script = Script::parse(
            "events:\n  - event: update\n    column: To-do\n    id: todo-1\n    titel: Typo\n",
        )
        .unwrap();

        let error = script.events[0]
            .apply(&mut processor, &DragSensor::default())
            .unwrap_err();
        assert!(error.to_string().contains("sets no fields"), "{}", error);
        assert_eq!(processor.activity().count(), 0);
        assert_eq!(processor.board(), &seeded());
    }

    #[test]
    fn test_apply_events() {
        let mut processor = BoardProcessor::new(seeded());
        let sensor = DragSensor::default();
        let script = Script::parse(
            r#"
events:
  - event: drag
    active: todo-1
    over: Done
  - event: update
    column: To-do
    id: ghost
    title: Nope
"#,
        )
        .unwrap();

        assert!(script.events[0].apply(&mut processor, &sensor).is_ok());
        assert!(script.events[1].apply(&mut processor, &sensor).is_err());
        assert_eq!(processor.board().column_len(&ColumnId::from("Done")), 2);
    }
}
