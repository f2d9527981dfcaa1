//! In-Memory Repository
//!
//! A single collection held in a `RefCell`, reset whenever it is dropped.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Entity};

/// In-memory collection with a monotonic id sequence
pub struct MemoryRepository<T: Entity> {
    rows: RefCell<Vec<T>>,
    next_id: Cell<u64>,
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// Insert synchronously, assigning the next id. Used for seeding.
    pub fn insert(&self, entity: T) -> T {
        let mut entity = entity;
        let seq = self.next_id.get();
        self.next_id.set(seq + 1);
        entity.set_id(T::Id::from(seq));
        self.rows.borrow_mut().push(entity.clone());
        entity
    }

    /// Snapshot of every row
    pub fn all(&self) -> Vec<T> {
        self.rows.borrow().clone()
    }

    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.rows.borrow().iter().find(|row| &row.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }
}

#[async_trait(?Send)]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn create(&self, entity: &T) -> DomainResult<T> {
        Ok(self.insert(entity.clone()))
    }

    async fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>> {
        Ok(self.get(id))
    }

    async fn list(&self) -> DomainResult<Vec<T>> {
        Ok(self.all())
    }

    async fn update(&self, entity: &T) -> DomainResult<T> {
        let id = entity.id();
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("no record with id {}", id)))?;
        *row = entity.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: &T::Id) -> DomainResult<()> {
        let mut rows = self.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|row| &row.id() != id);
        if rows.len() == before {
            return Err(DomainError::NotFound(format!("no record with id {}", id)));
        }
        Ok(())
    }
}
