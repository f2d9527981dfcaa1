//! HTTP-like request/response shapes and the transport seam.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outgoing request. Bodies are JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// A response as seen by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Option<String>,
}

impl Response {
    /// Serialize `value` as a JSON body. Falls back to a 500 if encoding fails.
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                content_type: Some(CONTENT_TYPE_JSON.to_string()),
                body: Some(body),
            },
            Err(e) => Self::error(500, &e.to_string()),
        }
    }

    /// JSON error payload of the form `{"error": "..."}`
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: Some(CONTENT_TYPE_JSON.to_string()),
            body: Some(serde_json::json!({ "error": message }).to_string()),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some(CONTENT_TYPE_TEXT.to_string()),
            body: Some(body.into()),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            content_type: None,
            body: None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can carry a request to a server and bring back its response.
///
/// `Err` means the server was never reached; any answer, successful or not,
/// is an `Ok(Response)`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: Request) -> ApiResult<Response>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: Request) -> ApiResult<Response> {
        (**self).send(request).await
    }
}
