//! Unified error system for the agency client
//!
//! Error handling is split in two layers:
//! - [`ErrorCode`]: standardized numeric codes shared with the frontend
//! - [`AppError`]: rich error type carrying a code and a message
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderNotFound);
//! let err = AppError::validation("客户名称不能为空");
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
