//! In-memory REST API for short text todos.
//!
//! # Overview
//! Three thin layers sit behind the axum router:
//! - `repository`: `InMemoryTodoRepository`, a mutex-guarded map that hands
//!   out sequential ids starting at 1 and never reuses them.
//! - `service`: rejects empty task text and re-types "not found".
//! - `controller`: converts between API models and domain types and maps
//!   failures to 400/404.
//!
//! The component graph is built explicitly by [`app`]; nothing is global.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;

pub use controller::TodoController;
pub use domain::{NewTodo, Todo, TodoId, TodoRepository};
pub use models::{Message, TodoData, TodoJson};
pub use repository::InMemoryTodoRepository;
pub use service::{ServiceError, TodoService};

/// Router wired to `repo` through a fresh service and controller.
pub fn app_with_repository(repo: Arc<dyn TodoRepository>) -> Router {
    let service = TodoService::new(repo);
    routes::router(TodoController::new(service))
}

/// Router backed by an empty in-memory repository.
pub fn app() -> Router {
    app_with_repository(Arc::new(InMemoryTodoRepository::new()))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Like [`run`], but stops accepting connections once `shutdown` resolves
/// and returns after in-flight requests finish.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}
