//! Daily Tasks App
//!
//! Root shell centering the todo panel.

use leptos::prelude::*;

use crate::components::TodoPanel;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TodoPanel />
        </div>
    }
}
