//! REST API Bindings
//!
//! Gateway to the remote todos resource, organized as a trait plus an HTTP
//! implementation so the view-model can be driven by fakes in tests.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewTodo, Todo};

pub use http::HttpGateway;

/// Gateway failures surfaced to the view-model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// Request never completed (DNS, refused connection, aborted fetch)
    #[error("Network error: {0}")]
    Network(String),
    /// Server answered with a non-success status
    #[error("Request failed with status code {status}")]
    Remote { status: u16, body: String },
    /// Body was not the expected JSON shape
    #[error("Invalid response: {0}")]
    Decode(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Remote todo operations
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TodoGateway {
    /// Fetch the first `limit` todos in server order
    async fn list_todos(&self, limit: usize) -> GatewayResult<Vec<Todo>>;

    /// Create a todo; the server echoes it back with an assigned id
    async fn create_todo(&self, todo: &NewTodo) -> GatewayResult<Todo>;
}
