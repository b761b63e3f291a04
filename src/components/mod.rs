//! UI Components
//!
//! Leptos components for the todo panel.

mod new_todo_form;
mod toast_stack;
mod todo_list;
mod todo_panel;

pub use new_todo_form::NewTodoForm;
pub use toast_stack::ToastStack;
pub use todo_list::TodoList;
pub use todo_panel::TodoPanel;
