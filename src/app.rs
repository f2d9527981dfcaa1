//! Todos Frontend App
//!
//! Starts the mock server and switches between the two pages.

use leptos::prelude::*;
use todo_core::{MockServer, MockServerConfig};

use crate::context::{AppContext, Page};
use crate::components::{AboutPage, NavBar, TodosPage};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Todos);

    // Lives as long as the page; a reload starts from the seeds again
    let server = MockServer::new(MockServerConfig::development());
    provide_context(AppContext::new(server, (page, set_page)));

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match page.get() {
                    Page::Todos => view! { <TodosPage /> }.into_any(),
                    Page::About => view! { <AboutPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
