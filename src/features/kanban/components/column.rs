use leptos::prelude::*;

use super::task_card::TaskCard;
use crate::core::models::{Column, DragLocation, DragResult, DropTarget, Task};
use crate::features::kanban::services::drop_index;

#[component]
pub fn KanbanColumn(
    column: Column,
    dragging: RwSignal<Option<DragLocation>>,
    on_drop: Callback<DragResult>,
    on_edit: Callback<Task>,
) -> impl IntoView {
    let Column { id, title, tasks } = column;
    let (hovered, set_hovered) = signal(false);
    let count = tasks.len();

    // Drops on the empty part of a column append to it
    let handle_drop = {
        let id = id.clone();
        move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            set_hovered.set(false);
            if let Some(source) = dragging.get_untracked() {
                dragging.set(None);
                let index = drop_index(&source, &id, count);
                let destination = DropTarget::Column(DragLocation::new(id.clone(), index));
                on_drop.run(DragResult { source, destination: Some(destination) });
            }
        }
    };

    let cards = tasks
        .into_iter()
        .enumerate()
        .map(|(index, task)| {
            view! {
                <TaskCard
                    task=task
                    column_id=id.clone()
                    index=index
                    dragging=dragging
                    on_drop=on_drop
                    on_edit=on_edit
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="kanban-column">
            <div class="column-header">
                <h3>{title}</h3>
                <span class="task-count">{count}</span>
            </div>
            <div
                class="column-content"
                class:drag-over=move || hovered.get()
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_hovered.set(true);
                }
                on:dragleave=move |_| set_hovered.set(false)
                on:drop=handle_drop
            >
                {cards}
            </div>
        </div>
    }
}
