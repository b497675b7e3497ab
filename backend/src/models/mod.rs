//! Domain models for the generated day

pub mod container;
pub mod ship;

// Re-exports
pub use container::{ContainerFields, ContainerRecord, NO_ZONE};
pub use ship::ShipRecord;
