//! New Todo Form Component
//!
//! Text input bound to the draft plus the Add button.

use leptos::prelude::*;

use crate::context::TodoContext;
use crate::store::TodoStateStoreFields;

/// Form for creating todos; the button is disabled while a create is pending
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");
    let store = ctx.store;

    let pending = move || store.mutation_status().get().is_pending();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="new-todo-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || store.draft().get()
                on:input=move |ev| ctx.update_draft(event_target_value(&ev))
            />
            <button type="submit" disabled=pending>
                {move || if pending() { "Adding..." } else { "Add" }}
            </button>
        </form>
    }
}
