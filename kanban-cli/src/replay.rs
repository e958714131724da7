//! `kanban replay`

use std::path::Path;

use kanban_board::{Board, BoardConfig, BoardProcessor};
use tracing::info;

use crate::render::{activity_table, board_json, board_table};
use crate::script::Script;

/// Outcome of a replay run
#[derive(Debug)]
pub struct ReplaySummary {
    pub board: Board,
    pub applied: usize,
    pub failed: usize,
}

/// Apply every event in order. A failing event is reported on stderr and
/// skipped; the remaining events still run.
pub fn replay(
    config: &BoardConfig,
    script: &Script,
    actor: Option<&str>,
) -> anyhow::Result<(ReplaySummary, BoardProcessor)> {
    let mut processor =
        BoardProcessor::new(Board::from_config(config)?).with_capacity(config.activity_capacity);
    if let Some(actor) = actor.or(script.actor.as_deref()) {
        processor = processor.with_actor(actor);
    }
    let sensor = config.drag_sensor();

    let mut failed = 0;
    for (index, event) in script.events.iter().enumerate() {
        if let Err(error) = event.apply(&mut processor, &sensor) {
            failed += 1;
            eprintln!("event {} ({}): {}", index + 1, event.name(), error);
        }
    }

    let applied = script.events.len() - failed;
    info!(applied, failed, "replay finished");
    let summary = ReplaySummary {
        board: processor.board().clone(),
        applied,
        failed,
    };
    Ok((summary, processor))
}

/// Load `script`, replay it, and print the final board (and activity log).
pub fn run_replay(
    config: &BoardConfig,
    script: &Path,
    json: bool,
    log: bool,
    actor: Option<&str>,
) -> anyhow::Result<()> {
    let script = Script::load(script)?;
    let (summary, processor) = replay(config, &script, actor)?;

    if json {
        let activity = log.then(|| processor.activity().collect());
        println!("{}", board_json(&summary.board, activity)?);
        return Ok(());
    }

    println!("{}", board_table(&summary.board));
    if log {
        println!("{}", activity_table(processor.activity()));
    }
    if summary.failed > 0 {
        eprintln!(
            "{} of {} events failed",
            summary.failed,
            summary.applied + summary.failed
        );
    }
    Ok(())
}
