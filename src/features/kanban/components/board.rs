use leptos::prelude::*;

use super::column::KanbanColumn;
use crate::core::models::{Board, DragLocation, DragResult, Task};

// Renders every column again whenever the board snapshot is replaced
#[component]
pub fn KanbanBoard(
    board: ReadSignal<Board>,
    dragging: RwSignal<Option<DragLocation>>,
    on_drop: Callback<DragResult>,
    on_edit: Callback<Task>,
) -> impl IntoView {
    view! {
        <div class="kanban-board">
            {move || {
                board
                    .get()
                    .columns
                    .into_iter()
                    .map(|column| {
                        view! {
                            <KanbanColumn
                                column=column
                                dragging=dragging
                                on_drop=on_drop
                                on_edit=on_edit
                            />
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
