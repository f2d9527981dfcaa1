//! New Todo Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::Controller;

/// Single text field; submitting appends an optimistic todo
#[component]
pub fn NewTodoForm(controller: StoredValue<Controller, LocalStorage>) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if let Some(request) = controller.with_value(|c| c.create(&text)) {
            set_new_text.set(String::new());
            spawn_local(request);
        }
    };

    view! {
        <form class="new-todo-form" data-testid="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="New todo"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
        </form>
    }
}
