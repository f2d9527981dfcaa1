//! Data Access Boundary
//!
//! HTTP-shaped client for the `/api/todos` collection, organized by concern.

mod client;
mod error;
mod http;

pub use client::{HttpTodoApi, TodoApi};
pub use error::{ApiError, ApiResult, UNREACHABLE_MESSAGE};
pub use http::{Method, Request, Response, Transport, CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT};
