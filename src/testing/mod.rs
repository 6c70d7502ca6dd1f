//! Helpers shared by unit and integration tests.

pub mod memory_store;

pub use memory_store::InMemoryStore;
