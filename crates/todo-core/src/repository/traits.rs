//! Repository Layer - Core Traits
//!
//! Abstract interface for data access. The only implementation is in-memory,
//! but handlers are written against the trait.

use async_trait::async_trait;
use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Futures are not `Send`: everything runs on
/// the browser's single thread.
#[async_trait(?Send)]
pub trait Repository<T: Entity> {
    /// Create a new entity, assigning it a fresh id
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// List all entities in insertion order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: &T::Id) -> DomainResult<()>;
}
