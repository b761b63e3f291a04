//! HTTP gateway backed by reqwest (fetch on wasm32).

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{GatewayError, GatewayResult, TodoGateway};
use crate::models::{NewTodo, Todo};

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }
}

#[async_trait(?Send)]
impl TodoGateway for HttpGateway {
    async fn list_todos(&self, limit: usize) -> GatewayResult<Vec<Todo>> {
        debug!("[API] GET {} _limit={}", self.todos_url(), limit);
        let response = self
            .client
            .get(self.todos_url())
            .query(&[("_limit", limit)])
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    async fn create_todo(&self, todo: &NewTodo) -> GatewayResult<Todo> {
        debug!("[API] POST {} title={:?}", self.todos_url(), todo.title);
        let response = self
            .client
            .post(self.todos_url())
            .json(todo)
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }
}

fn network_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Network(err.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;
    decode_body(status, &body)
}

/// Map a finished response to a value or a gateway error
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> GatewayResult<T> {
    if !status.is_success() {
        return Err(GatewayError::Remote {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list() {
        let body = r#"[
            {"userId":1,"id":1,"title":"delectus aut autem","completed":false},
            {"userId":1,"id":2,"title":"quis ut nam facilis","completed":true}
        ]"#;
        let todos: Vec<Todo> = decode_body(StatusCode::OK, body).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, Some(1));
        assert!(todos[1].completed);
    }

    #[test]
    fn test_created_echo_decodes() {
        let body = r#"{"title":"Buy milk","userId":1,"completed":false,"id":201}"#;
        let todo: Todo = decode_body(StatusCode::CREATED, body).unwrap();
        assert_eq!(todo.id, Some(201));
        assert_eq!(todo.title, "Buy milk");
    }

    #[test]
    fn test_non_success_is_remote_error() {
        let err = decode_body::<Vec<Todo>>(StatusCode::NOT_FOUND, "{}").unwrap_err();
        assert_eq!(err, GatewayError::Remote { status: 404, body: "{}".to_string() });
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }

    #[test]
    fn test_bad_shape_is_decode_error() {
        let err = decode_body::<Vec<Todo>>(StatusCode::OK, r#"{"oops":true}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let gateway = HttpGateway::new("https://example.test/");
        assert_eq!(gateway.todos_url(), "https://example.test/todos");
    }
}
