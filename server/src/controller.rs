//! Translation between API models and the domain.
//!
//! # Design
//! The controller never inspects task text itself; it only reshapes values
//! and turns `ServiceError` into `ApiError` (empty task → 400, missing id →
//! 404). Request-shape failures are rejected by the router before they get
//! here.

use crate::domain::{NewTodo, Todo, TodoId};
use crate::error::ApiError;
use crate::models::{Message, TodoData, TodoJson};
use crate::service::TodoService;

#[derive(Clone)]
pub struct TodoController {
    service: TodoService,
}

impl TodoController {
    pub fn new(service: TodoService) -> Self {
        Self { service }
    }

    pub fn create(&self, data: TodoData) -> Result<TodoJson, ApiError> {
        let created = self.service.create(NewTodo { task: data.task })?;
        Ok(created.into())
    }

    pub fn get(&self, id: TodoId) -> Result<TodoJson, ApiError> {
        Ok(self.service.get(id)?.into())
    }

    pub fn list(&self) -> Vec<TodoJson> {
        self.service.list().into_iter().map(TodoJson::from).collect()
    }

    pub fn update(&self, id: TodoId, data: TodoData) -> Result<TodoJson, ApiError> {
        let updated = self.service.update(Todo {
            id,
            task: data.task,
        })?;
        Ok(updated.into())
    }

    pub fn delete(&self, id: TodoId) -> Result<Message, ApiError> {
        self.service.delete(id)?;
        Ok(Message::new(format!("Successfully deleted Todo with id [{id}]")))
    }
}
