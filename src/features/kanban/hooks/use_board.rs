use leptos::prelude::*;

use crate::core::models::{Board, DragResult, TaskDraft};
use crate::core::services::{persist_board, restore_board, LocalStorage};
use crate::features::kanban::services::{drop_task, save_task};

pub struct BoardHook {
    pub board: ReadSignal<Board>,
    /// `(editing task id, draft)`, returns whether the draft was accepted.
    pub save_task: Callback<(Option<String>, TaskDraft), bool>,
    pub drop_task: Callback<DragResult>,
}

pub fn use_board() -> BoardHook {
    // Restore once on mount; a missing or unreadable snapshot gives the seed board
    let board = RwSignal::new(restore_board(&LocalStorage));

    // Write the whole snapshot back after every change
    Effect::new(move |_| {
        board.with(|snapshot| {
            if let Err(e) = persist_board(&LocalStorage, snapshot) {
                log::error!("Failed to save tasks: {}", e);
            }
        });
    });

    let save_task_fn = Callback::new(move |(editing, draft): (Option<String>, TaskDraft)| {
        save_task(editing, draft, board)
    });

    let drop_task_fn = Callback::new(move |result: DragResult| {
        drop_task(result, board);
    });

    BoardHook {
        board: board.read_only(),
        save_task: save_task_fn,
        drop_task: drop_task_fn,
    }
}
