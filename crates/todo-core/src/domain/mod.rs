//! Domain Layer
//!
//! Entities and core abstractions shared by the mock server and the client.

mod entity;
mod todo;

pub use entity::{DomainError, DomainResult, Entity};
pub use todo::{NewTodo, Todo, TodoId};
