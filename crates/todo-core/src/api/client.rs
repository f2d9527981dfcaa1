//! Data access boundary for the todo collection.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{ApiError, ApiResult};
use super::http::{Method, Request, Response, Transport};
use crate::domain::{NewTodo, Todo, TodoId};

/// The four operations the list controller needs from a backend
#[async_trait(?Send)]
pub trait TodoApi {
    /// GET the whole collection
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// POST a partial item, get back the stored one with its server id
    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo>;

    /// PATCH a full item
    async fn update(&self, id: &TodoId, todo: &Todo) -> ApiResult<Todo>;

    /// DELETE by id
    async fn delete(&self, id: &TodoId) -> ApiResult<()>;
}

/// `TodoApi` over an HTTP-like transport, rooted at `/<namespace>/todos`
pub struct HttpTodoApi<T> {
    transport: T,
    collection: String,
}

impl<T: Transport> HttpTodoApi<T> {
    pub fn new(transport: T) -> Self {
        Self::with_namespace(transport, "api")
    }

    pub fn with_namespace(transport: T, namespace: &str) -> Self {
        let namespace = namespace.trim_matches('/');
        Self {
            transport,
            collection: format!("/{namespace}/todos"),
        }
    }

    fn member(&self, id: &TodoId) -> String {
        format!("{}/{}", self.collection, id)
    }

    async fn exchange(&self, request: Request) -> ApiResult<Response> {
        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(&response))
        }
    }
}

fn encode<B: Serialize>(body: &B) -> ApiResult<String> {
    Ok(serde_json::to_string(body)?)
}

fn decode<R: DeserializeOwned>(response: Response) -> ApiResult<R> {
    let body = response.body.unwrap_or_default();
    Ok(serde_json::from_str(&body)?)
}

#[async_trait(?Send)]
impl<T: Transport> TodoApi for HttpTodoApi<T> {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        let response = self.exchange(Request::get(self.collection.clone())).await?;
        decode(response)
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
        let request = Request::new(Method::Post, self.collection.clone()).with_body(encode(todo)?);
        decode(self.exchange(request).await?)
    }

    async fn update(&self, id: &TodoId, todo: &Todo) -> ApiResult<Todo> {
        let request = Request::new(Method::Patch, self.member(id)).with_body(encode(todo)?);
        decode(self.exchange(request).await?)
    }

    async fn delete(&self, id: &TodoId) -> ApiResult<()> {
        self.exchange(Request::delete(self.member(id))).await?;
        Ok(())
    }
}
