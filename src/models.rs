//! Frontend Models
//!
//! Data structures matching the todos REST resource.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches the remote resource)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned; absent until creation completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub title: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub completed: bool,
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub completed: bool,
}

impl NewTodo {
    /// Open todo owned by `user_id`
    pub fn open(title: impl Into<String>, user_id: u32) -> Self {
        Self {
            title: title.into(),
            user_id,
            completed: false,
        }
    }
}

/// Status of the list query
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl ListStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListStatus::Idle | ListStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Status of the create mutation
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error(String),
}

impl MutationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, MutationStatus::Pending)
    }
}
