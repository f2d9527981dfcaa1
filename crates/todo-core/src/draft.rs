//! Item Editor Draft
//!
//! Local edits of a single todo, kept apart from the list until a commit
//! point (blur, checkbox toggle, submit). Committing an unchanged draft
//! produces nothing, so no-op edits never reach the server.

use crate::domain::Todo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    confirmed: Todo,
    text: String,
    is_done: bool,
    focused: bool,
}

impl TodoDraft {
    pub fn new(confirmed: Todo) -> Self {
        Self {
            text: confirmed.text.clone(),
            is_done: confirmed.is_done,
            confirmed,
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_done(&mut self, is_done: bool) {
        self.is_done = is_done;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn has_changes(&self) -> bool {
        self.text != self.confirmed.text || self.is_done != self.confirmed.is_done
    }

    /// End editing. Returns the todo to send when something changed, and
    /// takes it as the new confirmed value.
    pub fn commit(&mut self) -> Option<Todo> {
        self.focused = false;
        if !self.has_changes() {
            return None;
        }

        let updated = Todo {
            id: self.confirmed.id.clone(),
            text: self.text.clone(),
            is_done: self.is_done,
        };
        self.confirmed = updated.clone();
        Some(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TodoDraft {
        TodoDraft::new(Todo::new("1", "Walk the dog"))
    }

    #[test]
    fn test_unchanged_commit_is_noop() {
        let mut d = draft();
        d.focus();
        assert!(d.commit().is_none());
        assert!(!d.is_focused());
    }

    #[test]
    fn test_edit_back_to_original_is_noop() {
        let mut d = draft();
        d.set_text("Walk the cat");
        d.set_text("Walk the dog");
        assert!(d.commit().is_none());
    }

    #[test]
    fn test_text_change_commits_once() {
        let mut d = draft();
        d.set_text("Walk the cat");

        let committed = d.commit().expect("should commit");
        assert_eq!(committed.text, "Walk the cat");
        assert_eq!(committed.id.as_str(), "1");
        assert!(d.commit().is_none());
    }

    #[test]
    fn test_toggle_commits_done() {
        let mut d = draft();
        d.set_done(true);

        let committed = d.commit().unwrap();
        assert!(committed.is_done);
        assert!(!d.has_changes());
    }
}
