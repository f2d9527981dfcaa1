//! Todo List View Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! owns the truth; this store mirrors its snapshots for the view.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{LoadState, Todo, TodoListState, ViewPhase};

/// What the todos page renders, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoViewState {
    /// Loading / loaded / failed
    pub load: LoadState,
    /// Which list view to show once loaded
    pub phase: ViewPhase,
    /// Items in list order
    pub todos: Vec<Todo>,
    /// Any write in flight
    pub saving: bool,
    /// Footer text, absent for an empty list
    pub summary: Option<String>,
    /// At least one item is done
    pub has_completed: bool,
}

/// Type alias for the store
pub type TodoStore = Store<TodoViewState>;

// ========================
// Store Helper Functions
// ========================

/// Copy a controller snapshot into the store, touching only fields that changed
pub fn store_apply(store: &TodoStore, state: &TodoListState) {
    if store.load().with_untracked(|load| load != &state.load) {
        *store.load().write() = state.load.clone();
    }

    let phase = state.phase();
    if store.phase().with_untracked(|current| current != &phase) {
        *store.phase().write() = phase;
    }

    if store.todos().with_untracked(|todos| todos != &state.todos) {
        *store.todos().write() = state.todos.clone();
    }

    if store.saving().get_untracked() != state.saving {
        *store.saving().write() = state.saving;
    }

    let summary = state.summary();
    if store.summary().with_untracked(|current| current != &summary) {
        *store.summary().write() = summary;
    }

    let has_completed = state.has_completed();
    if store.has_completed().get_untracked() != has_completed {
        *store.has_completed().write() = has_completed;
    }
}
