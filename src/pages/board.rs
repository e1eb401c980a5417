use leptos::html::Dialog;
use leptos::prelude::*;

use crate::core::models::{DragLocation, Task};
use crate::features::kanban::{
    use_board, BoardHook, KanbanBoard, KanbanHeader, TaskModal, TrashZone,
};

#[component]
pub fn BoardPage() -> impl IntoView {
    let BoardHook { board, save_task, drop_task } = use_board();

    // Card currently being dragged, shared by every drop target
    let dragging = RwSignal::new(None::<DragLocation>);

    let dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let (editing_task, set_editing_task) = signal::<Option<Task>>(None);

    let open_new_task = Callback::new(move |_: ()| {
        set_editing_task.set(None);
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    let open_edit_task = Callback::new(move |task: Task| {
        set_editing_task.set(Some(task));
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    view! {
        <div class="board-page">
            <KanbanHeader
                title="Board"
                subtitle="Mobile App Development"
                on_new_task=open_new_task
            />

            <KanbanBoard
                board=board
                dragging=dragging
                on_drop=drop_task
                on_edit=open_edit_task
            />

            <TrashZone dragging=dragging on_drop=drop_task />

            <TaskModal editing=editing_task on_save=save_task dialog_ref=dialog_ref />
        </div>
    }
}
