//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About this app"</h1>
            <p>
                "A single-page todo list built with "
                <a href="https://leptos.dev">"Leptos"</a>
                ". It talks to an in-memory mock server, so fetching and saving behave \
                 like real network calls during a single session."
            </p>
            <p>"The mock server's data is reset whenever the page is reloaded."</p>
        </div>
    }
}
