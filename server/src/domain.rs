//! Domain types and the storage abstraction for todos.
//!
//! # Design
//! `TodoRepository` is the single seam between the service layer and storage.
//! The production implementation lives in [`crate::repository`]; tests swap in
//! `MockTodoRepository`. Operations are synchronous: every call completes in
//! memory while holding one lock, so nothing here needs to be async.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a persisted todo. Assigned by the repository, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub task: String,
}

/// A persisted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub task: String,
}

/// Errors returned by a `TodoRepository`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("could not find todo [{0}] in repository")]
    NotFound(TodoId),
}

impl RepoError {
    /// The identifier the failed operation was looking for.
    pub fn id(&self) -> TodoId {
        match self {
            RepoError::NotFound(id) => *id,
        }
    }
}

/// Storage for todos.
///
/// Implementations must make each operation atomic with respect to every
/// other operation, and must never hand out the same identifier twice.
#[cfg_attr(test, mockall::automock)]
pub trait TodoRepository: Send + Sync {
    /// Stores `new_todo` under a freshly assigned identifier.
    fn create(&self, new_todo: NewTodo) -> Todo;

    fn get(&self, id: TodoId) -> Result<Todo, RepoError>;

    /// All stored todos in ascending identifier order.
    fn list(&self) -> Vec<Todo>;

    fn delete(&self, id: TodoId) -> Result<bool, RepoError>;

    /// Replaces the task text of an existing todo. Never inserts.
    fn update(&self, todo: Todo) -> Result<Todo, RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&TodoId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn todo_id_displays_inner_value() {
        assert_eq!(TodoId(7).to_string(), "7");
    }

    #[test]
    fn repo_error_reports_offending_id() {
        let err = RepoError::NotFound(TodoId(9));
        assert_eq!(err.id(), TodoId(9));
        assert_eq!(err.to_string(), "could not find todo [9] in repository");
    }
}
