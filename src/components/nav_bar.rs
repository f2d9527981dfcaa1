//! Navigation Bar Component
//!
//! Tab bar for switching between the Todos and About pages.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

const PAGES: &[(Page, &str)] = &[(Page::Todos, "Todos"), (Page::About, "About")];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="nav-bar">
            {PAGES.iter().map(move |(page, label)| {
                let page = *page;
                let tab_class = move || {
                    if ctx.page.get() == page { "nav-tab active" } else { "nav-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| ctx.navigate(page)>
                        {*label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
