//! Mock Server
//!
//! In-memory stand-in for the todo backend. It speaks the same request and
//! response shapes a real server would, so the client code cannot tell the
//! difference. State lives only as long as the server value.

mod config;
mod handlers;
mod latency;
mod router;

#[cfg(test)]
mod tests;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use futures::FutureExt;

pub use config::{Environment, MockServerConfig};
pub use router::Params;

use crate::api::{ApiError, ApiResult, Method, Request, Response, Transport};
use crate::domain::{NewTodo, Todo, TodoId};
use crate::repository::MemoryRepository;

/// Replacement handler installed with [`MockServer::override_route`]
pub type RouteHandler = Rc<dyn Fn(Request, Params) -> LocalBoxFuture<'static, Response>>;

const COLLECTION: &str = "/todos";
const MEMBER: &str = "/todos/:id";

const SEEDS: &[&str] = &["Buy groceries", "Walk the dog", "Do laundry"];

struct RouteOverride {
    method: Method,
    pattern: String,
    handler: RouteHandler,
}

struct Inner {
    config: MockServerConfig,
    db: MemoryRepository<Todo>,
    overrides: RefCell<Vec<RouteOverride>>,
    handled: RefCell<Vec<Request>>,
    factory_seq: Cell<u64>,
    shut_down: Cell<bool>,
}

/// Cheaply cloneable handle; clones share one store
#[derive(Clone)]
pub struct MockServer {
    inner: Rc<Inner>,
}

impl Default for MockServer {
    fn default() -> Self {
        Self::new(MockServerConfig::default())
    }
}

impl MockServer {
    pub fn new(config: MockServerConfig) -> Self {
        let server = Self {
            inner: Rc::new(Inner {
                config,
                db: MemoryRepository::new(),
                overrides: RefCell::new(Vec::new()),
                handled: RefCell::new(Vec::new()),
                factory_seq: Cell::new(0),
                shut_down: Cell::new(false),
            }),
        };

        if server.inner.config.loads_seeds() {
            for text in SEEDS {
                server.create(NewTodo::new(*text));
            }
        }

        tracing::info!(
            environment = ?server.inner.config.environment,
            seeded = server.inner.db.len(),
            "mock server started"
        );
        server
    }

    pub fn config(&self) -> &MockServerConfig {
        &self.inner.config
    }

    /// The backing store, for seeding and assertions
    pub fn db(&self) -> &MemoryRepository<Todo> {
        &self.inner.db
    }

    /// Insert one todo directly into the store
    pub fn create(&self, todo: NewTodo) -> Todo {
        self.inner.db.insert(todo.into_todo(TodoId::new("")))
    }

    /// Insert `count` factory todos named `Todo 1`, `Todo 2`, ...
    ///
    /// The numbering continues across calls.
    pub fn create_list(&self, count: usize) -> Vec<Todo> {
        (0..count)
            .map(|_| {
                let seq = self.inner.factory_seq.get();
                self.inner.factory_seq.set(seq + 1);
                self.create(NewTodo::new(format!("Todo {}", seq + 1)))
            })
            .collect()
    }

    /// Replace the handler for `method` on a namespace-relative `pattern`
    /// such as `/todos/:id`. The most recent override wins.
    pub fn override_route<F, Fut>(&self, method: Method, pattern: &str, handler: F)
    where
        F: Fn(Request, Params) -> Fut + 'static,
        Fut: Future<Output = Response> + 'static,
    {
        let handler: RouteHandler = Rc::new(move |request: Request, params: Params| handler(request, params).boxed_local());
        self.inner.overrides.borrow_mut().push(RouteOverride {
            method,
            pattern: pattern.to_string(),
            handler,
        });
    }

    /// Every request that reached the server, in arrival order
    pub fn handled_requests(&self) -> Vec<Request> {
        self.inner.handled.borrow().clone()
    }

    /// Count of handled requests with this method
    pub fn handled_count(&self, method: Method) -> usize {
        self.inner.handled.borrow().iter().filter(|r| r.method == method).count()
    }

    /// Stop answering. Later requests fail at the transport level.
    pub fn shutdown(&self) {
        tracing::info!("mock server shut down");
        self.inner.shut_down.set(true);
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.shut_down.get()
    }

    fn find_override(&self, method: Method, path: &str) -> Option<(RouteHandler, Params)> {
        self.inner
            .overrides
            .borrow()
            .iter()
            .rev()
            .filter(|o| o.method == method)
            .find_map(|o| router::match_path(&o.pattern, path).map(|params| (o.handler.clone(), params)))
    }

    async fn dispatch(&self, request: Request) -> Response {
        let Some(path) = router::strip_namespace(&self.inner.config.namespace, &request.path) else {
            return Response::error(404, &format!("no route for {}", request.path));
        };
        let path = path.to_string();

        if let Some((handler, params)) = self.find_override(request.method, &path) {
            return handler(request, params).await;
        }

        let db = &self.inner.db;
        let body = request.body.as_deref();
        if router::match_path(COLLECTION, &path).is_some() {
            match request.method {
                Method::Get => handlers::list_todos(db).await,
                Method::Post => handlers::create_todo(db, body).await,
                other => Response::error(405, &format!("{other} not allowed on {path}")),
            }
        } else if let Some(params) = router::match_path(MEMBER, &path) {
            let id = TodoId::new(params.get("id").cloned().unwrap_or_default());
            match request.method {
                Method::Patch => handlers::update_todo(db, id, body).await,
                Method::Delete => handlers::delete_todo(db, id).await,
                other => Response::error(405, &format!("{other} not allowed on {path}")),
            }
        } else {
            Response::error(404, &format!("no route for {}", request.path))
        }
    }
}

#[async_trait(?Send)]
impl Transport for MockServer {
    async fn send(&self, request: Request) -> ApiResult<Response> {
        if self.is_shut_down() {
            return Err(ApiError::Transport("mock server is shut down".into()));
        }

        self.inner.handled.borrow_mut().push(request.clone());
        latency::simulate(self.inner.config.latency_for(request.method)).await;

        let (method, path) = (request.method, request.path.clone());
        let response = self.dispatch(request).await;
        tracing::debug!(%method, %path, status = response.status, "mock server handled request");
        Ok(response)
    }
}
