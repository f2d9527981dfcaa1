//! Repository Layer
//!
//! Data access abstraction and the in-memory implementation behind the mock server.

mod traits;
mod memory;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use memory::MemoryRepository;
