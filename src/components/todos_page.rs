//! Todos Page
//!
//! Owns the list controller for as long as the page is mounted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_core::{LoadState, ViewPhase};

use crate::context::{AppContext, Controller};
use crate::store::{store_apply, TodoStore, TodoViewState, TodoViewStateStoreFields};
use crate::components::{NewTodoForm, SavingIndicator, TodoRow};

#[component]
pub fn TodosPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store: TodoStore = Store::new(TodoViewState::default());

    let controller = Controller::new(ctx.todo_api());
    controller.subscribe(move |state| store_apply(&store, state));
    spawn_local(controller.load());

    // Results arriving after unmount are dropped by the controller
    let teardown = controller.teardown_handle();
    on_cleanup(move || teardown.teardown());

    let controller = StoredValue::new_local(controller);

    let saving = Signal::derive(move || store.saving().get());

    view! {
        <div class="todos-card">
            <div class="todos-header">
                <h1>"Todos"</h1>
                <SavingIndicator saving=saving />
            </div>

            <div class="todos-body">
                // Keyed on the load state alone, so list edits don't rebuild the form
                {move || match store.load().get() {
                    LoadState::Loading => view! {
                        <p class="muted" data-testid="loading">"Loading..."</p>
                    }.into_any(),
                    LoadState::Failed(message) => view! {
                        <p class="error" data-testid="error">{message}</p>
                    }.into_any(),
                    LoadState::Loaded => view! {
                        <NewTodoForm controller=controller />
                        <TodoList store=store controller=controller />
                        <ListFooter store=store controller=controller />
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TodoList(store: TodoStore, controller: StoredValue<Controller, LocalStorage>) -> impl IntoView {
    let is_empty = Memo::new(move |_| store.phase().get() == ViewPhase::Empty);

    view! {
        <Show
            when=move || !is_empty.get()
            fallback=|| view! { <p class="muted" data-testid="no-todos">"Nothing to do yet."</p> }
        >
            <ul class="todo-list">
                <For
                    each=move || store.todos().get()
                    key=|todo| todo.id.clone()
                    children=move |todo| view! { <TodoRow todo=todo controller=controller /> }
                />
            </ul>
        </Show>
    }
}

#[component]
fn ListFooter(store: TodoStore, controller: StoredValue<Controller, LocalStorage>) -> impl IntoView {
    let has_completed = move || store.has_completed().get();

    let clear_completed = move |_| {
        if let Some(request) = controller.with_value(|c| c.delete_completed()) {
            spawn_local(request);
        }
    };

    view! {
        <div class="list-footer">
            {move || store.summary().get().map(|text| view! { <p>{text}</p> })}
            <Show when=has_completed>
                <button class="clear-btn" on:click=clear_completed>"Clear completed"</button>
            </Show>
        </div>
    }
}
