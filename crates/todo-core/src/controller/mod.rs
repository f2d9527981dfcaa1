//! List Controller
//!
//! Owns the todo list and the set of in-flight writes. Every user action
//! mutates local state synchronously and hands back a future that performs
//! the remote call; whoever drives that future (`spawn_local` in the browser,
//! `.await` in tests) decides when the network work happens.
//!
//! Writes that target an item still carrying a temporary id wait for that
//! item's create to land, then go out under the server id. Awaiting such a
//! write on its own, without driving the create, never completes.
//!
//! Results are only applied while the controller's lifetime token is live.
//! Once torn down, in-flight requests still complete but their effects are
//! discarded.

mod pending;
mod state;


use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{join_all, Shared};
use futures::FutureExt;
use tokio_util::sync::CancellationToken;

pub use pending::{PendingRequests, RequestToken};
pub use state::{LoadState, TodoListState, ViewPhase};

use crate::api::{ApiResult, TodoApi};
use crate::domain::{NewTodo, Todo, TodoId};
use state::{reassign_id, replace_by_id};

type Observer = Rc<dyn Fn(&TodoListState)>;

/// Completes with the server id once a create lands; cancelled if it fails
type IdResolution = Shared<oneshot::Receiver<TodoId>>;

struct Inner<A> {
    api: A,
    state: RefCell<TodoListState>,
    pending: RefCell<PendingRequests>,
    temp_seq: Cell<u64>,
    resolutions: RefCell<HashMap<TodoId, IdResolution>>,
    lifetime: CancellationToken,
    observers: RefCell<Vec<Observer>>,
}

/// Send-safe handle that tears a controller down from outside its thread-local
/// world, e.g. a component cleanup
#[derive(Clone, Debug)]
pub struct TeardownHandle {
    lifetime: CancellationToken,
}

impl TeardownHandle {
    /// Stop applying results. In-flight requests are left to finish.
    pub fn teardown(&self) {
        tracing::debug!("todo list torn down");
        self.lifetime.cancel();
    }
}

pub struct TodoListController<A> {
    inner: Rc<Inner<A>>,
}

impl<A> Clone for TodoListController<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: TodoApi + 'static> TodoListController<A> {
    pub fn new(api: A) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                state: RefCell::new(TodoListState::default()),
                pending: RefCell::new(PendingRequests::new()),
                temp_seq: Cell::new(0),
                resolutions: RefCell::new(HashMap::new()),
                lifetime: CancellationToken::new(),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Called with a fresh snapshot after every state change. Observers may
    /// subscribe further observers; those hear from the next change on.
    pub fn subscribe(&self, observer: impl Fn(&TodoListState) + 'static) {
        self.inner.observers.borrow_mut().push(Rc::new(observer));
    }

    pub fn snapshot(&self) -> TodoListState {
        self.inner.state.borrow().clone()
    }

    pub fn is_saving(&self) -> bool {
        self.inner.pending.borrow().is_saving()
    }

    pub fn pending_count(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        TeardownHandle {
            lifetime: self.inner.lifetime.clone(),
        }
    }

    /// Stop applying results. In-flight requests are left to finish.
    pub fn teardown(&self) {
        self.teardown_handle().teardown();
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.lifetime.is_cancelled()
    }

    /// Fetch the collection once. Failures become a user-facing message.
    pub fn load(&self) -> impl Future<Output = ()> + 'static {
        self.mutate(|s| s.load = LoadState::Loading);

        let this = self.clone();
        async move {
            let result = this.inner.api.list().await;
            if this.is_torn_down() {
                return;
            }

            match result {
                Ok(todos) => {
                    tracing::info!(count = todos.len(), "loaded todos");
                    this.mutate(|s| {
                        s.todos = todos;
                        s.load = LoadState::Loaded;
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to load todos");
                    let message = e.user_message();
                    this.mutate(|s| s.load = LoadState::Failed(message));
                }
            }
        }
    }

    /// Append an optimistic todo and return the request that confirms it.
    ///
    /// Blank text is rejected with `None` and nothing changes.
    pub fn create(&self, text: &str) -> Option<impl Future<Output = ()> + 'static> {
        if text.trim().is_empty() {
            return None;
        }

        let seq = self.inner.temp_seq.get() + 1;
        self.inner.temp_seq.set(seq);
        let temp_id = TodoId::temporary(seq);
        let new_todo = NewTodo::new(text);

        let (resolved, resolution) = oneshot::channel();
        self.inner
            .resolutions
            .borrow_mut()
            .insert(temp_id.clone(), resolution.shared());

        let optimistic = new_todo.clone().into_todo(temp_id.clone());
        let token = self.start_write(|s| s.todos.push(optimistic));

        let this = self.clone();
        Some(async move {
            let result = this.inner.api.create(&new_todo).await;
            // Queued writes need the server id even after teardown
            if let Ok(created) = &result {
                let _ = resolved.send(created.id.clone());
            }
            this.settle(token, |s| match result {
                Ok(created) => {
                    // Local fields win: edits made in flight are still on their way
                    if !reassign_id(&mut s.todos, &temp_id, created.id) {
                        tracing::debug!(%temp_id, "optimistic todo is gone; dropping create response");
                    }
                }
                Err(e) => tracing::warn!(%temp_id, error = %e, "create failed; keeping optimistic todo"),
            });
        })
    }

    /// Replace the matching todo in place and send it to the server.
    /// Failures are logged and otherwise ignored.
    pub fn update(&self, mut todo: Todo) -> impl Future<Output = ()> + 'static {
        let resolution = self.resolution_for(&todo.id);
        if let Some(Ok(server_id)) = resolution.as_ref().and_then(|r| r.peek()) {
            todo.id = server_id.clone();
        }

        let local = todo.clone();
        let token = self.start_write(|s| {
            let id = local.id.clone();
            if !replace_by_id(&mut s.todos, &id, local) {
                tracing::debug!(%id, "updating a todo that is not in the list");
            }
        });

        let this = self.clone();
        async move {
            let result = match resolve(todo.id.clone(), resolution).await {
                Some(id) => {
                    todo.id = id;
                    Some(this.inner.api.update(&todo.id, &todo).await)
                }
                None => None,
            };
            this.settle(token, |_| match result {
                Some(Ok(_)) => {}
                Some(Err(e)) => tracing::warn!(id = %todo.id, error = %e, "update failed; local edit kept"),
                None => tracing::warn!(id = %todo.id, "todo was never created; update not sent"),
            });
        }
    }

    /// Drop every done todo locally, then delete each one on the server
    /// concurrently. `None` when nothing is done.
    pub fn delete_completed(&self) -> Option<impl Future<Output = ()> + 'static> {
        let done: Vec<TodoId> = self
            .inner
            .state
            .borrow()
            .todos
            .iter()
            .filter(|t| t.is_done)
            .map(|t| t.id.clone())
            .collect();
        if done.is_empty() {
            return None;
        }

        let targets: Vec<(TodoId, Option<IdResolution>)> = done
            .iter()
            .map(|id| (id.clone(), self.resolution_for(id)))
            .collect();
        let token = self.start_write(|s| s.todos.retain(|t| !done.contains(&t.id)));

        let this = self.clone();
        Some(async move {
            let results = join_all(targets.into_iter().map(|(id, resolution)| this.delete_on_server(id, resolution))).await;
            this.settle(token, |_| {
                for (id, result) in results {
                    match result {
                        Some(Ok(())) => {}
                        Some(Err(e)) => tracing::warn!(%id, error = %e, "delete failed; todo stays removed locally"),
                        None => tracing::debug!(%id, "todo was never created; nothing to delete"),
                    }
                }
            });
        })
    }

    async fn delete_on_server(
        &self,
        id: TodoId,
        resolution: Option<IdResolution>,
    ) -> (TodoId, Option<ApiResult<()>>) {
        match resolve(id.clone(), resolution).await {
            Some(server_id) => (id, Some(self.inner.api.delete(&server_id).await)),
            None => (id, None),
        }
    }

    /// The pending create behind a temporary id, if any
    fn resolution_for(&self, id: &TodoId) -> Option<IdResolution> {
        if !id.is_temporary() {
            return None;
        }
        self.inner.resolutions.borrow().get(id).cloned()
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let observers: Vec<Observer> = self.inner.observers.borrow().clone();
        for observer in observers {
            observer(&snapshot);
        }
    }

    fn mutate<R>(&self, apply: impl FnOnce(&mut TodoListState) -> R) -> R {
        let result = apply(&mut *self.inner.state.borrow_mut());
        self.notify();
        result
    }

    /// Apply an optimistic change and register a pending request, in one notification
    fn start_write(&self, apply: impl FnOnce(&mut TodoListState)) -> RequestToken {
        let token = self.inner.pending.borrow_mut().begin();
        self.mutate(|s| {
            apply(s);
            s.saving = true;
        });
        token
    }

    /// Apply a write's outcome and retire its token, unless torn down
    fn settle(&self, token: RequestToken, apply: impl FnOnce(&mut TodoListState)) {
        if self.is_torn_down() {
            tracing::debug!(?token, "dropping result after teardown");
            return;
        }

        let saving = {
            let mut pending = self.inner.pending.borrow_mut();
            pending.finish(token);
            pending.is_saving()
        };
        self.mutate(|s| {
            apply(s);
            s.saving = saving;
        });
    }
}

/// The id a write should target on the server. Temporary ids wait for their
/// create; `None` when that create failed or was never issued.
async fn resolve(id: TodoId, resolution: Option<IdResolution>) -> Option<TodoId> {
    match resolution {
        Some(resolution) => resolution.await.ok(),
        None if id.is_temporary() => None,
        None => Some(id),
    }
}
