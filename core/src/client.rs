//! Request builder and response parser for the `/tasks` API.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Message, Todo, TodoData};

/// Stateless client for the todo API.
///
/// Holds only the base URL. The caller executes each `HttpRequest` and feeds
/// the result to the matching `parse_*` method.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/tasks".to_string())
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/tasks/{id}"))
    }

    pub fn build_create_todo(&self, input: &TodoData) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/tasks".to_string(), input)
    }

    pub fn build_update_todo(&self, id: u64, input: &TodoData) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, format!("/tasks/{id}"), input)
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/tasks/{id}"))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_body(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_body(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_body(response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_body(response, 200)
    }

    /// Returns the server's confirmation message.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        let message: Message = parse_body(response, 200)?;
        Ok(message.message)
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request(
        &self,
        method: HttpMethod,
        path: String,
        input: &TodoData,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let mut request = self.request(method, path);
        request
            .headers
            .push(("content-type".to_string(), "application/json".to_string()));
        request.body = Some(body);
        Ok(request)
    }
}

fn parse_body<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound(server_message(response))),
        400 => Err(ApiError::BadRequest(server_message(response))),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

/// The `message` field of an error body, or the raw body if it is not one.
fn server_message(response: &HttpResponse) -> String {
    serde_json::from_str::<Message>(&response.body)
        .map(|m| m.message)
        .unwrap_or_else(|_| response.body.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/tasks");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/tasks/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let req = client().build_create_todo(&TodoData::new("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/tasks");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"task": "Buy milk"}));
    }

    #[test]
    fn build_update_todo_produces_correct_request() {
        let req = client().build_update_todo(3, &TodoData::new("Updated")).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/tasks/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["task"], "Updated");
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/tasks/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let response = HttpResponse::new(200, r#"[{"id":1,"task":"Test"},{"id":3,"task":"Other"}]"#);
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(
            todos,
            vec![
                Todo {
                    id: 1,
                    task: "Test".to_string()
                },
                Todo {
                    id: 3,
                    task: "Other".to_string()
                },
            ]
        );
    }

    #[test]
    fn parse_get_todo_not_found_carries_server_message() {
        let response = HttpResponse::new(404, r#"{"message":"This id does not exist: [9]"}"#);
        let err = client().parse_get_todo(response).unwrap_err();
        assert_eq!(
            err,
            ApiError::NotFound("This id does not exist: [9]".to_string())
        );
    }

    #[test]
    fn parse_create_todo_success() {
        let response = HttpResponse::new(201, r#"{"id":1,"task":"New"}"#);
        let todo = client().parse_create_todo(response).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.task, "New");
    }

    #[test]
    fn parse_create_todo_bad_request() {
        let response = HttpResponse::new(400, r#"{"message":"This task was empty: []"}"#);
        let err = client().parse_create_todo(response).unwrap_err();
        assert_eq!(err, ApiError::BadRequest("This task was empty: []".to_string()));
    }

    #[test]
    fn bad_request_without_message_body_keeps_raw_text() {
        let response = HttpResponse::new(400, "oops");
        let err = client().parse_update_todo(response).unwrap_err();
        assert_eq!(err, ApiError::BadRequest("oops".to_string()));
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_todo_success() {
        let response = HttpResponse::new(200, r#"{"id":2,"task":"Updated"}"#);
        let todo = client().parse_update_todo(response).unwrap();
        assert_eq!(todo.task, "Updated");
    }

    #[test]
    fn parse_delete_todo_returns_message() {
        let response = HttpResponse::new(
            200,
            r#"{"message":"Successfully deleted Todo with id [1]"}"#,
        );
        let message = client().parse_delete_todo(response).unwrap();
        assert_eq!(message, "Successfully deleted Todo with id [1]");
    }

    #[test]
    fn parse_delete_todo_not_found() {
        let response = HttpResponse::new(404, r#"{"message":"nope"}"#);
        let err = client().parse_delete_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let req = TodoClient::new("http://localhost:3000/").build_list_todos();
        assert_eq!(req.path, "http://localhost:3000/tasks");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let response = HttpResponse::new(200, "not json");
        let err = client().parse_list_todos(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
