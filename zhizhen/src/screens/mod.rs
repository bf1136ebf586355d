//! Screen state
//!
//! One module per screen; each owns its own state and exposes the actions
//! the rendering layer can trigger.

pub mod admin;
pub mod create_order;
pub mod order_detail;
pub mod order_list;
pub mod sheet;

// Re-exports
pub use admin::{AdminShell, AdminTab};
pub use create_order::{CreateOrderScreen, REQUIRED_FIELDS};
pub use order_detail::OrderDetailScreen;
pub use order_list::{FilterSelection, LoadState, OrderListScreen, SortSelection, COMMISSION_BUCKETS};
pub use sheet::SheetState;
