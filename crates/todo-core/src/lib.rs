//! Todos Core
//!
//! Layered like a tiny backend-plus-client:
//! - domain: entities and errors
//! - repository: data access abstraction and the in-memory store
//! - server: the mock HTTP server over that store
//! - api: the client-side data access boundary
//! - controller: optimistic list state and request tracking
//! - draft: per-row edit buffer

pub mod api;
pub mod controller;
pub mod domain;
pub mod draft;
pub mod repository;
pub mod server;

pub use api::{ApiError, HttpTodoApi, TodoApi};
pub use controller::{LoadState, TeardownHandle, TodoListController, TodoListState, ViewPhase};
pub use domain::{NewTodo, Todo, TodoId};
pub use draft::TodoDraft;
pub use server::{MockServer, MockServerConfig};
