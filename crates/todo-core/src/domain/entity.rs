//! Domain Layer - Core Entity Trait
//!
//! Basic contract for everything the mock store can hold.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone + 'static {
    /// The entity's unique identifier. Stores mint new ids from a sequence number.
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Display + From<u64>;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;

    /// Overwrite the identifier (used when the store assigns one)
    fn set_id(&mut self, id: Self::Id);
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
