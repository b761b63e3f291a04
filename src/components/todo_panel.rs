//! Todo Panel Component
//!
//! Owns the view-model for its lifetime and switches between the loading,
//! error and list views.

use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::info;
use reactive_stores::Store;

use crate::api::HttpGateway;
use crate::components::{NewTodoForm, ToastStack, TodoList};
use crate::config::TodoConfig;
use crate::context::TodoContext;
use crate::store::{TodoState, TodoStateStoreFields};
use crate::view_model::TodoListModel;

#[component]
pub fn TodoPanel() -> impl IntoView {
    // jsonplaceholder drops writes, so created todos are merged locally
    let config = TodoConfig::jsonplaceholder();
    let gateway = HttpGateway::new(config.base_url.clone());
    let model = Rc::new(TodoListModel::new(gateway, config));
    let store = Store::new(TodoState::default());

    let ctx = TodoContext::new(model, store);
    provide_context(ctx);

    info!("[APP] Mounting todo panel");
    ctx.initialize();

    // Refetch a stale list when the tab regains focus
    let focus_listener = window_event_listener(ev::focus, move |_| ctx.refresh());
    on_cleanup(move || {
        focus_listener.remove();
        ctx.detach();
    });

    view! {
        <div class="todo-panel">
            {move || {
                let status = store.list_status().get();
                if let Some(msg) = status.error() {
                    view! {
                        <div class="panel-status error">"Error: " {msg.to_string()}</div>
                    }.into_any()
                } else if status.is_loading() {
                    view! {
                        <div class="panel-status loading">"Loading your todos..."</div>
                    }.into_any()
                } else {
                    view! {
                        <div class="panel-header">
                            <h2>"✅ Daily Tasks"</h2>
                            <button
                                class="refresh-btn"
                                title="Refresh"
                                disabled=move || store.is_fetching().get()
                                on:click=move |_| ctx.refresh()
                            >
                                "⟳"
                            </button>
                        </div>
                        <NewTodoForm />
                        <TodoList />
                        <p class="panel-footer">"Powered by Leptos"</p>
                    }.into_any()
                }
            }}
            <ToastStack />
        </div>
    }
}
