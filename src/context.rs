//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::{HttpTodoApi, MockServer, TodoListController};

/// Controller type used by the todos page
pub type Controller = TodoListController<HttpTodoApi<MockServer>>;

/// The two pages of the app
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Todos,
    About,
}

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// In-memory backend, alive for the whole page session
    server: StoredValue<MockServer, LocalStorage>,
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(server: MockServer, page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            server: StoredValue::new_local(server),
            page: page.0,
            set_page: page.1,
        }
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Data access boundary wired to the shared mock server
    pub fn todo_api(&self) -> HttpTodoApi<MockServer> {
        let server = self.server.get_value();
        let namespace = server.config().namespace.clone();
        HttpTodoApi::with_namespace(server, &namespace)
    }
}
