//! Toast Stack Component
//!
//! Non-blocking notifications; each toast expires on its own timer and can
//! be dismissed by clicking it.

use leptos::prelude::*;

use crate::context::TodoContext;
use crate::store::TodoStateStoreFields;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");
    let store = ctx.store;

    view! {
        <div class="toast-stack" role="status">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| ctx.dismiss_toast(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
