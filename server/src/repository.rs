//! In-memory `TodoRepository`.
//!
//! # Design
//! One `parking_lot::Mutex` guards both the map and the id counter, and each
//! operation holds it from start to finish. There is no reader/writer split:
//! callers simply serialize. A `BTreeMap` keeps entries ordered by id so
//! `list` needs no extra sort.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::domain::{NewTodo, RepoError, Todo, TodoId, TodoRepository};

#[derive(Debug, Default)]
struct Store {
    tasks: BTreeMap<TodoId, String>,
    // Never decreases; every key in `tasks` is <= this.
    last_id: u64,
}

/// Process-lifetime storage for todos.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    store: Mutex<Store>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn create(&self, new_todo: NewTodo) -> Todo {
        let mut store = self.store.lock();
        let id = TodoId(store.last_id.checked_add(1).expect("todo id space exhausted"));
        store.last_id = id.0;
        store.tasks.insert(id, new_todo.task.clone());
        tracing::debug!(%id, "stored todo");
        Todo {
            id,
            task: new_todo.task,
        }
    }

    fn get(&self, id: TodoId) -> Result<Todo, RepoError> {
        let store = self.store.lock();
        store
            .tasks
            .get(&id)
            .map(|task| Todo {
                id,
                task: task.clone(),
            })
            .ok_or(RepoError::NotFound(id))
    }

    fn list(&self) -> Vec<Todo> {
        let store = self.store.lock();
        store
            .tasks
            .iter()
            .map(|(id, task)| Todo {
                id: *id,
                task: task.clone(),
            })
            .collect()
    }

    fn delete(&self, id: TodoId) -> Result<bool, RepoError> {
        let mut store = self.store.lock();
        store.tasks.remove(&id).ok_or(RepoError::NotFound(id))?;
        tracing::debug!(%id, "removed todo");
        Ok(true)
    }

    fn update(&self, todo: Todo) -> Result<Todo, RepoError> {
        let mut store = self.store.lock();
        let task = store.tasks.get_mut(&todo.id).ok_or(RepoError::NotFound(todo.id))?;
        *task = todo.task.clone();
        tracing::debug!(id = %todo.id, "replaced todo task");
        Ok(todo)
    }
}
