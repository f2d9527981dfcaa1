//! Snapshot of the list as the view sees it.

use crate::domain::{Todo, TodoId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    /// Carries the message to show the user
    Failed(String),
}

/// Which of the mutually exclusive list views to render
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Loading,
    Failed(String),
    Empty,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoListState {
    pub load: LoadState,
    pub todos: Vec<Todo>,
    /// True while any write is in flight
    pub saving: bool,
}

impl TodoListState {
    pub fn phase(&self) -> ViewPhase {
        match &self.load {
            LoadState::Loading => ViewPhase::Loading,
            LoadState::Failed(message) => ViewPhase::Failed(message.clone()),
            LoadState::Loaded if self.todos.is_empty() => ViewPhase::Empty,
            LoadState::Loaded => ViewPhase::List,
        }
    }

    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_done).count()
    }

    pub fn has_completed(&self) -> bool {
        self.todos.iter().any(|t| t.is_done)
    }

    /// "2 / 5 complete", or nothing when the list is empty
    pub fn summary(&self) -> Option<String> {
        if self.todos.is_empty() {
            return None;
        }
        Some(format!("{} / {} complete", self.done_count(), self.todos.len()))
    }
}

/// Swap the item with `id` for `replacement`, keeping its position.
/// Returns false when no such item exists.
pub(crate) fn replace_by_id(todos: &mut [Todo], id: &TodoId, replacement: Todo) -> bool {
    todos
        .iter_mut()
        .find(|todo| &todo.id == id)
        .map(|todo| *todo = replacement)
        .is_some()
}

/// Move the item with `from` over to the id `to`, keeping its local fields.
/// Returns false when no such item exists.
pub(crate) fn reassign_id(todos: &mut [Todo], from: &TodoId, to: TodoId) -> bool {
    todos
        .iter_mut()
        .find(|todo| &todo.id == from)
        .map(|todo| todo.id = to)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(todos: Vec<Todo>) -> TodoListState {
        TodoListState {
            load: LoadState::Loaded,
            todos,
            saving: false,
        }
    }

    #[test]
    fn test_phases() {
        assert_eq!(TodoListState::default().phase(), ViewPhase::Loading);
        assert_eq!(loaded(vec![]).phase(), ViewPhase::Empty);
        assert_eq!(loaded(vec![Todo::new("1", "a")]).phase(), ViewPhase::List);

        let failed = TodoListState {
            load: LoadState::Failed("nope".into()),
            ..Default::default()
        };
        assert_eq!(failed.phase(), ViewPhase::Failed("nope".into()));
    }

    #[test]
    fn test_summary_counts_done() {
        let state = loaded(vec![Todo::new("1", "a").done(), Todo::new("2", "b")]);
        assert_eq!(state.summary().as_deref(), Some("1 / 2 complete"));
        assert!(state.has_completed());
        assert_eq!(state.done_count(), 1);
        assert_eq!(loaded(vec![]).summary(), None);
        assert!(!loaded(vec![Todo::new("1", "a")]).has_completed());
    }

    #[test]
    fn test_replace_by_id_keeps_position() {
        let mut todos = vec![Todo::new("1", "a"), Todo::new("tmp-1", "b"), Todo::new("3", "c")];

        assert!(replace_by_id(&mut todos, &TodoId::new("tmp-1"), Todo::new("2", "b")));
        assert_eq!(todos[1].id, TodoId::new("2"));
        assert!(!replace_by_id(&mut todos, &TodoId::new("tmp-1"), Todo::new("9", "z")));
    }

    #[test]
    fn test_reassign_id_keeps_local_fields() {
        let mut todos = vec![Todo::new("1", "a"), Todo::new("tmp-1", "edited").done()];

        assert!(reassign_id(&mut todos, &TodoId::new("tmp-1"), TodoId::new("2")));
        assert_eq!(todos[1], Todo::new("2", "edited").done());
        assert!(!reassign_id(&mut todos, &TodoId::new("tmp-1"), TodoId::new("3")));
    }
}
