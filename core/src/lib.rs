//! I/O-free client core for the `/tasks` todo API.
//!
//! # Overview
//! `TodoClient` turns each CRUD operation into a `build_*` method producing
//! an `HttpRequest` and a `parse_*` method consuming an `HttpResponse`. The
//! caller executes the round-trip, so this crate has no runtime or transport
//! dependency and every code path is testable with canned responses.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Message, Todo, TodoData};
