//! Todo Entity
//!
//! A single row of the todo list as it travels over the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::Entity;

/// Prefix of client-generated ids that the server has not confirmed yet
const TEMP_PREFIX: &str = "tmp-";

/// Opaque todo identifier.
///
/// Server ids are decimal strings; ids minted by the client before a create
/// resolves carry the `tmp-` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Client-side placeholder id for the `seq`-th optimistic create
    pub fn temporary(seq: u64) -> Self {
        Self(format!("{TEMP_PREFIX}{seq}"))
    }

    pub fn is_temporary(&self) -> bool {
        self.0.starts_with(TEMP_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for TodoId {
    fn from(seq: u64) -> Self {
        Self(seq.to_string())
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub is_done: bool,
}

impl Todo {
    pub fn new(id: impl Into<TodoId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_done: false,
        }
    }

    /// Same item with the done flag set
    pub fn done(mut self) -> Self {
        self.is_done = true;
        self
    }
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

/// Body of a create request: an item without an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub text: String,
    #[serde(default)]
    pub is_done: bool,
}

impl NewTodo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_done: false,
        }
    }

    /// Materialize with a placeholder id; the store replaces it on insert
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            text: self.text,
            is_done: self.is_done,
        }
    }
}
