//! Todo List Component

use leptos::prelude::*;

use crate::context::TodoContext;
use crate::models::Todo;
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");
    let store = ctx.store;

    // Not keyed: the demo API hands every created todo the same id
    view! {
        <ul class="todo-list">
            {move || {
                store
                    .todos()
                    .get()
                    .into_iter()
                    .map(|todo| view! { <TodoRow todo=todo /> })
                    .collect_view()
            }}
        </ul>
    }
}

/// Single row: status dot + title, struck through when completed
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let (dot_class, title_class) = if todo.completed {
        ("status-dot done", "todo-title done")
    } else {
        ("status-dot open", "todo-title")
    };

    view! {
        <li class="todo-row">
            <span class=dot_class></span>
            <span class=title_class>{todo.title}</span>
        </li>
    }
}
