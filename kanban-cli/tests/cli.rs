//! End-to-end tests for the `kanban` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Run `kanban` inside `dir` so no stray kanban.yaml is picked up
fn kanban(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kanban").unwrap();
    cmd.current_dir(dir)
        .env_remove("KANBAN_ACTIVATION_DISTANCE")
        .env_remove("KANBAN_ACTIVITY_CAPACITY")
        .env_remove("RUST_LOG");
    cmd
}

fn column_ids(value: &serde_json::Value, column: &str) -> Vec<String> {
    value[column]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_show_default_board() {
    let temp = TempDir::new().unwrap();
    kanban(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("To-do (2)"))
        .stdout(predicate::str::contains("In Progress (1)"))
        .stdout(predicate::str::contains("Done (1)"))
        .stdout(predicate::str::contains("Review UX Feedback"));
}

#[test]
fn test_show_json() {
    let temp = TempDir::new().unwrap();
    let output = kanban(temp.path())
        .args(["show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(column_ids(&value, "To-do"), ["todo-1", "todo-2"]);
    assert_eq!(value["In Progress"][0]["title"], "Create Wireframe");
    assert_eq!(value["Done"][0]["priority"], "High");
}

#[test]
fn test_replay_applies_events_and_reports_failures() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("session.yaml");
    fs::write(
        &script,
        r#"
events:
  - event: drag
    active: todo-1
    over: Done
  - event: update
    column: To-do
    id: ghost
    title: X
  - event: create
    column: In Progress
    title: Pair review
  - event: drag
    active: done-1
    over: todo-1
"#,
    )
    .unwrap();

    let output = kanban(temp.path())
        .args(["replay", "session.yaml", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("event 2 (update)"), "stderr: {}", stderr);
    assert!(stderr.contains("task not found: ghost"), "stderr: {}", stderr);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(column_ids(&value, "To-do"), ["todo-2"]);
    assert_eq!(column_ids(&value, "Done"), ["done-1", "todo-1"]);
    assert_eq!(value["In Progress"].as_array().unwrap().len(), 2);
}

#[test]
fn test_replay_with_activity_log() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("session.yaml");
    fs::write(
        &script,
        "actor: alice\nevents:\n  - event: delete\n    column: Done\n    id: done-1\n",
    )
    .unwrap();

    let output = kanban(temp.path())
        .args(["replay", "session.yaml", "--json", "--log"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["board"]["Done"].as_array().unwrap().is_empty());
    assert_eq!(value["activity"][0]["op"], "delete task");
    assert_eq!(value["activity"][0]["actor"], "alice");

    kanban(temp.path())
        .args(["replay", "session.yaml", "--log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("delete task"))
        .stdout(predicate::str::contains("Done (0)"));
}

#[test]
fn test_config_file_in_working_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("kanban.yaml"),
        r#"
columns: [Backlog, Shipped]
seed:
  - column: Backlog
    id: b-1
    title: Draft roadmap
"#,
    )
    .unwrap();

    kanban(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backlog (1)"))
        .stdout(predicate::str::contains("Shipped (0)"))
        .stdout(predicate::str::contains("Draft roadmap"));
}

#[test]
fn test_config_with_only_columns() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("lanes.yaml"),
        "columns: [Backlog, Doing, Shipped]\n",
    )
    .unwrap();

    let output = kanban(temp.path())
        .args(["--config", "lanes.yaml", "show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for column in ["Backlog", "Doing", "Shipped"] {
        assert!(column_ids(&value, column).is_empty());
    }
    assert!(value.get("To-do").is_none());
}

#[test]
fn test_env_overrides_activation_distance() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("session.yaml"),
        "events:\n  - event: drag\n    active: todo-1\n    over: Done\n    dx: 10\n    dy: 0\n",
    )
    .unwrap();

    // 10px clears the default 8px threshold but not 20px
    let output = kanban(temp.path())
        .env("KANBAN_ACTIVATION_DISTANCE", "20")
        .args(["replay", "session.yaml", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(column_ids(&value, "Done"), ["done-1"]);

    let output = kanban(temp.path())
        .args(["replay", "session.yaml", "--json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(column_ids(&value, "Done"), ["done-1", "todo-1"]);
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    kanban(temp.path())
        .args(["--config", "nope.yaml", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn test_missing_script_fails() {
    let temp = TempDir::new().unwrap();
    kanban(temp.path())
        .args(["replay", "absent.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading script"));
}
