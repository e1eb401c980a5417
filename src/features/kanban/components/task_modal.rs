use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::core::models::{Priority, Task, TaskDraft};

#[component]
pub fn TaskModal(
    editing: ReadSignal<Option<Task>>,
    on_save: Callback<(Option<String>, TaskDraft), bool>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (content, set_content) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());
    let (due_date, set_due_date) = signal(String::new());

    // Refill the form each time the modal is opened for a task (or blank for a new one)
    Effect::new(move |_| {
        let draft = editing.with(|task| task.as_ref().map(TaskDraft::from_task).unwrap_or_default());
        set_content.set(draft.content);
        set_priority.set(draft.priority);
        set_due_date.set(String::new());
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let due = due_date.get_untracked();
        let draft = TaskDraft::new(
            content.get_untracked(),
            priority.get_untracked(),
            (!due.is_empty()).then_some(due),
        );
        let editing_id = editing.with_untracked(|task| task.as_ref().map(|t| t.id.clone()));

        // Empty content keeps the dialog open
        if on_save.run((editing_id, draft)) {
            set_content.set(String::new());
            set_priority.set(Priority::default());
            set_due_date.set(String::new());
            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
        }
    };

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let is_editing = move || editing.with(Option::is_some);

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{move || if is_editing() { "Edit Task" } else { "Add New Task" }}</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label for="content">"Task Name"</label>
                        <input
                            id="content"
                            type="text"
                            placeholder="Enter task description..."
                            on:input=move |ev| set_content.set(event_target_value(&ev))
                            prop:value=move || content.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="priority">"Priority"</label>
                        <select
                            id="priority"
                            on:change=move |ev| {
                                if let Some(p) = Priority::from_value(&event_target_value(&ev)) {
                                    set_priority.set(p);
                                }
                            }
                            prop:value=move || priority.get().as_str()
                        >
                            {Priority::all()
                                .into_iter()
                                .map(|p| view! { <option value={p.as_str()}>{p.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="date">"Due Date"</label>
                        <input
                            id="date"
                            type="date"
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                            prop:value=move || due_date.get()
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"Cancel"</button>
                        <button type="submit" class="btn-primary">
                            {move || if is_editing() { "Save Changes" } else { "Add Task" }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
