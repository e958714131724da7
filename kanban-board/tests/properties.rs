//! Property-based tests for the reorder engine and mutation API.

use kanban_board::{
    create, remove, reorder, update, Board, ColumnId, DropTarget, TaskFields, TaskId, TaskPatch,
};
use proptest::prelude::*;
use std::collections::HashSet;

const COLUMNS: [&str; 3] = ["To-do", "In Progress", "Done"];

#[derive(Debug, Clone)]
enum Op {
    Create { column: String, title: String },
    Update { column: String, id: String, title: String },
    Remove { column: String, id: String },
    Drag { id: String, over: Option<DropTarget> },
}

fn column_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(COLUMNS.to_vec()).prop_map(String::from),
        Just("Archive".to_string()),
    ]
}

/// IDs of seeded tasks plus one that never exists
fn id_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["s0", "s1", "s2", "s3", "s4", "ghost"]).prop_map(String::from)
}

fn title_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z][a-zA-Z ]{0,12}",
        1 => Just(String::new()),
        1 => Just("   ".to_string()),
    ]
}

fn target_strategy() -> impl Strategy<Value = Option<DropTarget>> {
    prop::option::of(prop_oneof![
        column_strategy().prop_map(DropTarget::column),
        id_strategy().prop_map(DropTarget::task),
    ])
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (column_strategy(), title_strategy())
            .prop_map(|(column, title)| Op::Create { column, title }),
        (column_strategy(), id_strategy(), title_strategy())
            .prop_map(|(column, id, title)| Op::Update { column, id, title }),
        (column_strategy(), id_strategy()).prop_map(|(column, id)| Op::Remove { column, id }),
        (id_strategy(), target_strategy()).prop_map(|(id, over)| Op::Drag { id, over }),
    ]
}

/// Seeded board with the five tasks spread over the columns by `layout`
fn seeded_board(layout: &[usize]) -> Board {
    let mut board = Board::new(COLUMNS).unwrap();
    for (i, column) in layout.iter().enumerate() {
        let id = format!("s{i}");
        board = board
            .with_task(
                &ColumnId::from(COLUMNS[*column]),
                kanban_board::Task::new(format!("Task {i}")).with_id(id),
            )
            .unwrap();
    }
    board
}

fn layout_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..COLUMNS.len(), 5)
}

fn apply(board: &Board, op: &Op) -> kanban_board::Result<Board> {
    match op {
        Op::Create { column, title } => {
            create(board, &ColumnId::from(column.as_str()), TaskFields::new(title.as_str()))
        }
        Op::Update { column, id, title } => update(
            board,
            &ColumnId::from(column.as_str()),
            &TaskId::from(id.as_str()),
            TaskPatch::new().with_title(title.as_str()),
        ),
        Op::Remove { column, id } => remove(
            board,
            &ColumnId::from(column.as_str()),
            &TaskId::from(id.as_str()),
        ),
        Op::Drag { id, over } => reorder(board, &TaskId::from(id.as_str()), over.as_ref()),
    }
}

fn column_set(board: &Board) -> Vec<String> {
    board.columns().map(|c| c.to_string()).collect()
}

proptest! {
    #[test]
    fn test_invariants_hold_across_operations(
        layout in layout_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut board = seeded_board(&layout);
        let columns = column_set(&board);

        for op in &ops {
            match apply(&board, op) {
                Ok(next) => board = next,
                // A rejected operation leaves the previous board in place
                Err(_) => continue,
            }
            prop_assert!(board.validate().is_ok());
            prop_assert_eq!(column_set(&board), columns.clone());

            let ids: Vec<&TaskId> = board.task_ids().collect();
            let unique: HashSet<&TaskId> = ids.iter().copied().collect();
            prop_assert_eq!(ids.len(), unique.len());
        }
    }

    #[test]
    fn test_noop_drags_return_same_board(
        layout in layout_strategy(),
        id in id_strategy(),
    ) {
        let board = seeded_board(&layout);
        let id = TaskId::from(id.as_str());

        let onto_self = reorder(&board, &id, Some(&DropTarget::Task(id.clone())));
        let outside = reorder(&board, &id, None);
        prop_assert_eq!(onto_self.unwrap(), board.clone());
        prop_assert_eq!(outside.unwrap(), board);
    }

    #[test]
    fn test_reorder_conserves_task_count(
        layout in layout_strategy(),
        id in id_strategy(),
        over in target_strategy(),
    ) {
        let board = seeded_board(&layout);
        if let Ok(next) = reorder(&board, &TaskId::from(id.as_str()), over.as_ref()) {
            prop_assert_eq!(next.len(), board.len());
        }
    }

    #[test]
    fn test_same_column_move_lands_at_resolved_index(
        layout in layout_strategy(),
        active in 0usize..5,
        over in 0usize..5,
    ) {
        prop_assume!(active != over);
        let board = seeded_board(&layout);
        let active = TaskId::from(format!("s{active}"));
        let target = DropTarget::task(format!("s{over}"));

        let plan = match kanban_board::resolve_move(&board, &active, &target) {
            Ok(plan) if plan.is_same_column() => plan,
            _ => return Ok(()),
        };
        let next = reorder(&board, &active, Some(&target)).unwrap();
        let location = next.find_task(&active).unwrap();

        prop_assert_eq!(next.column_len(&plan.source), board.column_len(&plan.source));
        prop_assert_eq!(location.column, &plan.destination);
        prop_assert_eq!(location.index, plan.insert_index);
    }

    #[test]
    fn test_remove_is_idempotent(
        layout in layout_strategy(),
        column in prop::sample::select(COLUMNS.to_vec()),
        id in id_strategy(),
    ) {
        let board = seeded_board(&layout);
        let column = ColumnId::from(column);
        let id = TaskId::from(id.as_str());

        let once = remove(&board, &column, &id).unwrap();
        let twice = remove(&once, &column, &id).unwrap();
        prop_assert_eq!(once, twice);
    }
}
