use leptos::prelude::*;

use crate::core::models::{DragLocation, DragResult, DropTarget};

// Fixed drop target that deletes whatever card is released on it
#[component]
pub fn TrashZone(
    dragging: RwSignal<Option<DragLocation>>,
    on_drop: Callback<DragResult>,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_hovered.set(false);
        if let Some(source) = dragging.get_untracked() {
            dragging.set(None);
            on_drop.run(DragResult { source, destination: Some(DropTarget::Trash) });
        }
    };

    view! {
        <div
            class="trash-zone"
            class:dragging=move || dragging.with(Option::is_some)
            class:drag-over=move || hovered.get()
            title="Drop here to delete"
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                set_hovered.set(true);
            }
            on:dragleave=move |_| set_hovered.set(false)
            on:drop=handle_drop
        >
            "🗑"
        </div>
    }
}
