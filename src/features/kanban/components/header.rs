use leptos::prelude::*;

#[component]
pub fn KanbanHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    on_new_task: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <div class="kanban-header-left">
                <h1>{title}</h1>
                <p class="kanban-subtitle">{subtitle}</p>
            </div>
            <div class="kanban-actions">
                <button class="btn-primary kanban-header-btn" on:click=move |_| on_new_task.run(())>
                    "+ New Task"
                </button>
            </div>
        </header>
    }
}
