//! Shared types for the Zhizhen agency client
//!
//! Common types used across the client crates: order models,
//! error types, and the in-memory order query engine.

pub mod error;
pub mod models;
pub mod query;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Error re-exports
pub use error::{AppError, AppResult, ErrorCode};

// Query re-exports (for the list-screen pipeline)
pub use query::{DateWindow, QueryState, SortDirection};
