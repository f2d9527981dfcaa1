//! Built-in route handlers for the todo collection.

use serde::de::DeserializeOwned;

use crate::api::Response;
use crate::domain::{DomainError, DomainResult, NewTodo, Todo, TodoId};
use crate::repository::Repository;

fn parse_body<T: DeserializeOwned>(body: Option<&str>) -> DomainResult<T> {
    let body = body.ok_or_else(|| DomainError::InvalidInput("missing request body".into()))?;
    serde_json::from_str(body).map_err(|e| DomainError::InvalidInput(e.to_string()))
}

fn error_response(err: DomainError) -> Response {
    let status = match &err {
        DomainError::NotFound(_) => 404,
        DomainError::InvalidInput(_) => 400,
    };
    Response::error(status, &err.to_string())
}

/// GET /todos
pub async fn list_todos(db: &dyn Repository<Todo>) -> Response {
    match db.list().await {
        Ok(todos) => Response::json(200, &todos),
        Err(e) => error_response(e),
    }
}

async fn insert(db: &dyn Repository<Todo>, body: Option<&str>) -> DomainResult<Todo> {
    let new_todo: NewTodo = parse_body(body)?;
    db.create(&new_todo.into_todo(TodoId::new(""))).await
}

async fn replace(db: &dyn Repository<Todo>, id: TodoId, body: Option<&str>) -> DomainResult<Todo> {
    let mut todo: Todo = parse_body(body)?;
    todo.id = id;
    db.update(&todo).await
}

/// POST /todos
pub async fn create_todo(db: &dyn Repository<Todo>, body: Option<&str>) -> Response {
    match insert(db, body).await {
        Ok(todo) => Response::json(201, &todo),
        Err(e) => error_response(e),
    }
}

/// PATCH /todos/:id. The path id wins over whatever id the body carries.
pub async fn update_todo(db: &dyn Repository<Todo>, id: TodoId, body: Option<&str>) -> Response {
    match replace(db, id, body).await {
        Ok(todo) => Response::json(200, &todo),
        Err(e) => error_response(e),
    }
}

/// DELETE /todos/:id
pub async fn delete_todo(db: &dyn Repository<Todo>, id: TodoId) -> Response {
    match db.delete(&id).await {
        Ok(()) => Response::no_content(),
        Err(e) => error_response(e),
    }
}
