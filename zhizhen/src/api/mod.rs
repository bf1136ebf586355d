//! Order data source
//!
//! The screens only depend on the [`OrderSource`] seam: one asynchronous
//! call that resolves to a finite, well-formed order snapshot. The stub
//! fixture stands in until the booking server API is ready.

mod fetch_orders;

pub use fetch_orders::{fixture_orders, FixtureOrderSource};

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::Order;

/// Asynchronous order provider behind the list/detail screens
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch the full order snapshot for one screen activation
    async fn fetch_orders(&self) -> AppResult<Vec<Order>>;
}
