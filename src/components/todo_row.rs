//! Todo Row Component
//!
//! One editable todo. Edits stay in a local draft until blur, submit or a
//! checkbox toggle, and only changed drafts are sent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{Todo, TodoDraft};

use crate::context::Controller;

fn row_class(is_done: bool, focused: bool) -> &'static str {
    match (focused, is_done) {
        (true, _) => "todo-row focused",
        (false, true) => "todo-row done",
        (false, false) => "todo-row",
    }
}

fn text_class(is_done: bool, focused: bool) -> &'static str {
    if is_done && !focused {
        "todo-text struck"
    } else {
        "todo-text"
    }
}

#[component]
pub fn TodoRow(todo: Todo, controller: StoredValue<Controller, LocalStorage>) -> impl IntoView {
    let draft = RwSignal::new(TodoDraft::new(todo));

    let commit = move || {
        let mut committed = None;
        draft.update(|d| committed = d.commit());
        if let Some(updated) = committed {
            spawn_local(controller.with_value(|c| c.update(updated)));
        }
    };

    let is_done = move || draft.with(|d| d.is_done());
    let focused = move || draft.with(|d| d.is_focused());

    view! {
        <li class=move || row_class(is_done(), focused()) data-testid="todo">
            <input
                type="checkbox"
                prop:checked=is_done
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    draft.update(|d| d.set_done(checked));
                    commit();
                }
            />

            <form
                class="todo-form"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    commit();
                }
            >
                <input
                    type="text"
                    placeholder="New Todo"
                    class=move || text_class(is_done(), focused())
                    prop:value=move || draft.with(|d| d.text().to_string())
                    on:input=move |ev| draft.update(|d| d.set_text(event_target_value(&ev)))
                    on:focus=move |_| draft.update(|d| d.focus())
                    on:blur=move |_| commit()
                />
            </form>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_row_is_never_dimmed() {
        assert_eq!(row_class(true, true), "todo-row focused");
        assert_eq!(row_class(false, true), "todo-row focused");
    }

    #[test]
    fn test_done_row_is_dimmed_and_struck() {
        assert_eq!(row_class(true, false), "todo-row done");
        assert_eq!(text_class(true, false), "todo-text struck");
    }

    #[test]
    fn test_editing_done_row_shows_plain_text() {
        assert_eq!(text_class(true, true), "todo-text");
        assert_eq!(text_class(false, false), "todo-text");
    }
}
