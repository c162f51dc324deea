//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod memory_store;

// Re-exports
pub use aggregate_id::AggregateId;
pub use memory_store::{Entity, MemoryStore};
