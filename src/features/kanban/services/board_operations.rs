use chrono::Utc;
use leptos::prelude::*;

use crate::core::models::{Board, DragLocation, DragResult, TaskDraft};

// Apply the task form to the board. Returns false when the draft was rejected
// so the form can stay open.
pub fn save_task(
    editing: Option<String>,
    draft: TaskDraft,
    board_signal: RwSignal<Board>,
) -> bool {
    if draft.trimmed_content().is_none() {
        log::debug!("Ignoring task form submitted without content");
        return false;
    }

    let now = Utc::now().timestamp_millis();
    let next = board_signal.with_untracked(|board| board.save_task(editing.as_deref(), &draft, now));
    match &editing {
        Some(task_id) => log::info!("Updated task {}", task_id),
        None => log::info!("Created task in first column"),
    }
    board_signal.set(next);
    true
}

// Apply a finished drag gesture to the board
pub fn drop_task(result: DragResult, board_signal: RwSignal<Board>) {
    if result.destination.is_none() {
        log::debug!("Drag of {:?} cancelled", result.source);
        return;
    }

    let next = board_signal.with_untracked(|board| board.apply_drop(&result));
    board_signal.set(next);
}

/// Final index for a card dropped on the card currently at `hovered_index`
/// of `column_id`, i.e. the dragged card ends up right before it.
///
/// Within one column the dragged card is removed first, which shifts every
/// later card up by one.
pub fn drop_index(source: &DragLocation, column_id: &str, hovered_index: usize) -> usize {
    if source.column_id == column_id && source.index < hovered_index {
        hovered_index - 1
    } else {
        hovered_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::DropTarget;

    fn drop_before(board: &Board, source: DragLocation, column_id: &str, hovered: usize) -> Board {
        let index = drop_index(&source, column_id, hovered);
        board.apply_drop(&DragResult {
            source,
            destination: Some(DropTarget::Column(DragLocation::new(column_id, index))),
        })
    }

    fn todo_ids(board: &Board) -> Vec<&str> {
        board.columns[0].tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn dropping_on_a_later_card_lands_before_it() {
        let board = Board::seed()
            .create_task(&TaskDraft::new("Third", Default::default(), None), 1);
        // todo: [t1, t2, task-1]; drag t1 onto task-1
        let next = drop_before(&board, DragLocation::new("todo", 0), "todo", 2);
        assert_eq!(todo_ids(&next), vec!["t2", "t1", "task-1"]);
    }

    #[test]
    fn dropping_on_an_earlier_card_lands_before_it() {
        let next = drop_before(&Board::seed(), DragLocation::new("todo", 1), "todo", 0);
        assert_eq!(todo_ids(&next), vec!["t2", "t1"]);
    }

    #[test]
    fn dropping_on_another_column_keeps_index() {
        assert_eq!(drop_index(&DragLocation::new("todo", 0), "done", 0), 0);
        assert_eq!(drop_index(&DragLocation::new("todo", 3), "done", 1), 1);
    }

    #[test]
    fn dropping_on_column_body_appends() {
        let board = Board::seed();
        let len = board.column("todo").map(|c| c.len()).unwrap_or_default();
        let next = drop_before(&board, DragLocation::new("todo", 0), "todo", len);
        assert_eq!(todo_ids(&next), vec!["t2", "t1"]);
    }
}
