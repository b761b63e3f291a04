//! Todo UI Store
//!
//! Uses Leptos reactive_stores so each view only re-renders for the fields
//! it reads. Filled from view-model snapshots.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ListStatus, MutationStatus, Todo};
use crate::view_model::{Notification, TodoSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

/// A transient notification shown over the panel
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn from_notification(id: u32, notification: &Notification) -> Self {
        match notification {
            Notification::TodoAdded(_) => Self {
                id,
                kind: ToastKind::Success,
                message: "Todo added!".to_string(),
            },
            Notification::Failed(msg) => Self {
                id,
                kind: ToastKind::Error,
                message: format!("Could not add todo: {}", msg),
            },
        }
    }
}

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub list_status: ListStatus,
    pub is_fetching: bool,
    pub mutation_status: MutationStatus,
    pub draft: String,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Copy a snapshot into the store, touching only fields that changed
pub fn store_apply_snapshot(store: &TodoStore, snapshot: TodoSnapshot) {
    let TodoSnapshot {
        todos,
        list_status,
        is_fetching,
        mutation_status,
        draft,
    } = snapshot;

    if store.todos().with_untracked(|current| *current != todos) {
        *store.todos().write() = todos;
    }
    if store.list_status().with_untracked(|current| *current != list_status) {
        *store.list_status().write() = list_status;
    }
    if store.is_fetching().with_untracked(|current| *current != is_fetching) {
        *store.is_fetching().write() = is_fetching;
    }
    if store.mutation_status().with_untracked(|current| *current != mutation_status) {
        *store.mutation_status().write() = mutation_status;
    }
    if store.draft().with_untracked(|current| *current != draft) {
        *store.draft().write() = draft;
    }
}

/// Push a toast and return its id
pub fn store_push_toast(store: &TodoStore, notification: &Notification) -> u32 {
    let id = store.next_toast_id().get_untracked();
    *store.next_toast_id().write() = id.wrapping_add(1);
    store.toasts().write().push(Toast::from_notification(id, notification));
    id
}

/// Remove a toast by ID; no-op once the store is gone
pub fn store_remove_toast(store: &TodoStore, toast_id: u32) {
    store.toasts().try_update(|toasts| toasts.retain(|toast| toast.id != toast_id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_toast_message() {
        let todo = Todo { id: Some(201), title: "Buy milk".into(), user_id: 1, completed: false };
        let toast = Toast::from_notification(7, &Notification::TodoAdded(todo));
        assert_eq!(toast.id, 7);
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Todo added!");
    }

    #[test]
    fn test_error_toast_message() {
        let toast = Toast::from_notification(0, &Notification::Failed("Network error: offline".into()));
        assert_eq!(toast.kind.class(), "toast error");
        assert_eq!(toast.message, "Could not add todo: Network error: offline");
    }
}
