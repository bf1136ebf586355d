//! Data models
//!
//! Shared between the client screens and the data source (via serde).
//! Field names serialize as camelCase to match the frontend wire shape.

pub mod order;

// Re-exports
pub use order::*;
