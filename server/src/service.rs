//! Business rules for todos.
//!
//! # Design
//! `TodoService` owns the repository it is given at construction; there is no
//! ambient store. It rejects empty task text before the repository is touched
//! and re-types repository misses as `ServiceError::NotFound`.

use std::sync::Arc;

use crate::domain::{NewTodo, Todo, TodoId, TodoRepository};

/// Errors surfaced by `TodoService`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The task text was empty.
    #[error("This task was empty: [{task}]")]
    EmptyTask { task: String },

    /// No todo exists with this id.
    #[error("This id does not exist: [{0}]")]
    NotFound(TodoId),
}

#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub fn create(&self, new_todo: NewTodo) -> Result<Todo, ServiceError> {
        validate_task(&new_todo.task)?;
        Ok(self.repo.create(new_todo))
    }

    #[tracing::instrument(skip(self))]
    pub fn get(&self, id: TodoId) -> Result<Todo, ServiceError> {
        self.repo
            .get(id)
            .map_err(|err| ServiceError::NotFound(err.id()))
    }

    pub fn list(&self) -> Vec<Todo> {
        self.repo.list()
    }

    #[tracing::instrument(skip(self))]
    pub fn update(&self, todo: Todo) -> Result<Todo, ServiceError> {
        validate_task(&todo.task)?;
        self.repo
            .update(todo)
            .map_err(|err| ServiceError::NotFound(err.id()))
    }

    #[tracing::instrument(skip(self))]
    pub fn delete(&self, id: TodoId) -> Result<bool, ServiceError> {
        self.repo
            .delete(id)
            .map_err(|err| ServiceError::NotFound(err.id()))
    }
}

fn validate_task(task: &str) -> Result<(), ServiceError> {
    if task.is_empty() {
        return Err(ServiceError::EmptyTask {
            task: task.to_string(),
        });
    }
    Ok(())
}
