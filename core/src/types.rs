//! Wire DTOs for the `/tasks` API.
//!
//! These mirror the server's JSON but are declared here independently, so the
//! client does not link against axum. The live-server integration test keeps
//! the two in step.

use serde::{Deserialize, Serialize};

/// A stored todo as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub task: String,
}

/// Request payload for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoData {
    pub task: String,
}

impl TodoData {
    pub fn new(task: impl Into<String>) -> Self {
        Self { task: task.into() }
    }
}

/// `{"message": ...}` body used for errors and delete confirmations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}
