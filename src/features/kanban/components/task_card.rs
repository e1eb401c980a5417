use leptos::prelude::*;

use crate::core::models::{DragLocation, DragResult, DropTarget, Task};
use crate::features::kanban::services::drop_index;

#[component]
pub fn TaskCard(
    task: Task,
    #[prop(into)] column_id: String,
    index: usize,
    dragging: RwSignal<Option<DragLocation>>,
    on_drop: Callback<DragResult>,
    on_edit: Callback<Task>,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let location = DragLocation::new(column_id.clone(), index);
    let task_id = task.id.clone();
    let task_for_edit = task.clone();

    let handle_dragstart = move |ev: web_sys::DragEvent| {
        // Firefox refuses to start a drag without payload
        if let Some(data) = ev.data_transfer() {
            if let Err(e) = data.set_data("text/plain", &task_id) {
                log::debug!("Could not attach drag payload for {}: {:?}", task_id, e);
            }
        }
        dragging.set(Some(location.clone()));
    };

    // dragend fires after drop, so a source still tracked here was released
    // outside every drop target
    let handle_dragend = move |_: web_sys::DragEvent| {
        if let Some(source) = dragging.get_untracked() {
            dragging.set(None);
            on_drop.run(DragResult { source, destination: None });
        }
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_hovered.set(false);
        if let Some(source) = dragging.get_untracked() {
            dragging.set(None);
            let index = drop_index(&source, &column_id, index);
            let destination = DropTarget::Column(DragLocation::new(column_id.clone(), index));
            on_drop.run(DragResult { source, destination: Some(destination) });
        }
    };

    view! {
        <div
            class="task-card"
            draggable="true"
            class:drag-over=move || hovered.get()
            on:dragstart=handle_dragstart
            on:dragend=handle_dragend
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                set_hovered.set(true);
            }
            on:dragleave=move |_| set_hovered.set(false)
            on:drop=handle_drop
        >
            <div class="task-card-header">
                <span class={task.priority.badge_class()}>{task.priority.as_str()}</span>
                <button
                    class="task-edit-btn"
                    title="Edit task"
                    on:click=move |_| on_edit.run(task_for_edit.clone())
                >"✎"</button>
            </div>
            <p class="task-content">{task.content.clone()}</p>
            <div class="task-date">"📅 " {task.date.clone()}</div>
        </div>
    }
}
