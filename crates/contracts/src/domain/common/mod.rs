//! Common types and traits for all entities

pub mod entity;
pub mod list_envelope;

// Re-exports
pub use entity::Entity;
pub use list_envelope::ListEnvelope;
