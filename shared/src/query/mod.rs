//! Order query engine
//!
//! Client-side query pipeline for the order list screen:
//! search → filter → sort, always recomputed in full over an immutable
//! snapshot of the fetched orders. No I/O, no incremental diffing.

pub mod filter;
pub mod search;
pub mod sort;

pub use filter::DateWindow;
pub use search::{FieldValue, Searchable};
pub use sort::SortDirection;

use chrono::NaiveDate;

use crate::models::Order;

/// Query state for one list-screen session
///
/// The base collection is the snapshot fetched at screen activation and is
/// never mutated afterwards. Everything else starts at "no filter / no sort /
/// empty search". The displayed collection is derived state: call
/// [`QueryState::recompute`] after every change.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    base: Vec<Order>,
    /// Free-text search input; blank means "keep all"
    pub search_text: String,
    /// Confirmed date-window selection
    pub date_window: DateWindow,
    /// Confirmed commission bucket, exact text match
    pub commission_filter: Option<String>,
    /// Confirmed event-date sort direction
    pub time_sort: SortDirection,
    /// Confirmed commission sort direction
    pub commission_sort: SortDirection,
}

impl QueryState {
    /// Wrap a fetched snapshot with all query criteria cleared
    pub fn new(base: Vec<Order>) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// The unfiltered, unsorted snapshot
    pub fn base(&self) -> &[Order] {
        &self.base
    }

    /// Clear date-window and commission selections
    pub fn clear_filters(&mut self) {
        self.date_window = DateWindow::None;
        self.commission_filter = None;
    }

    /// Clear both sort directions
    pub fn clear_sorts(&mut self) {
        self.time_sort = SortDirection::None;
        self.commission_sort = SortDirection::None;
    }

    /// Recompute the displayed collection from scratch.
    ///
    /// Pipeline order is fixed: search narrows first, filters narrow second,
    /// sorting reorders last and never changes membership. `today` anchors
    /// the date windows and is injected for testability.
    pub fn recompute(&self, today: NaiveDate) -> Vec<Order> {
        let trimmed = self.search_text.trim();
        let searched: Vec<Order> = if trimmed.is_empty() {
            // Blank search bypasses the matcher entirely
            self.base.clone()
        } else {
            let query_lower = trimmed.to_lowercase();
            self.base
                .iter()
                .filter(|order| search::matches(*order, &query_lower))
                .cloned()
                .collect()
        };

        let filtered = filter::apply(
            &searched,
            self.date_window,
            self.commission_filter.as_deref(),
            today,
        );

        let displayed = sort::sort(&filtered, self.time_sort, self.commission_sort);
        tracing::debug!(
            base = self.base.len(),
            searched = searched.len(),
            displayed = displayed.len(),
            "recomputed order list"
        );
        displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(client: &str, date: &str, commission: &str) -> Order {
        let mut o = Order::empty();
        o.client = client.to_string();
        o.event_date = date.to_string();
        o.pay.agent_commission = commission.to_string();
        o
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()
    }

    fn base() -> Vec<Order> {
        vec![
            order("施华蔻", "2025-08-04", "500"),
            order("香奈儿", "2025-08-05", "300"),
            order("欧莱雅", "2025-08-20", "500"),
        ]
    }

    #[test]
    fn test_blank_search_keeps_base_order() {
        let mut state = QueryState::new(base());
        state.search_text = "   ".to_string();
        let out = state.recompute(today());
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].client, "施华蔻");
        assert_eq!(out[2].client, "欧莱雅");
    }

    #[test]
    fn test_search_then_filter_conjunction() {
        let mut state = QueryState::new(base());
        state.commission_filter = Some("500".to_string());
        let out = state.recompute(today());
        assert_eq!(out.len(), 2);

        state.date_window = DateWindow::Today;
        let out = state.recompute(today());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].client, "施华蔻");
    }

    #[test]
    fn test_sort_runs_after_filter() {
        let mut state = QueryState::new(base());
        state.commission_filter = Some("500".to_string());
        state.time_sort = SortDirection::Descending;
        let out = state.recompute(today());
        let clients: Vec<&str> = out.iter().map(|o| o.client.as_str()).collect();
        assert_eq!(clients, vec!["欧莱雅", "施华蔻"]);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut state = QueryState::new(base());
        state.search_text = "500".to_string();
        state.time_sort = SortDirection::Ascending;
        state.commission_sort = SortDirection::Descending;
        let first = state.recompute(today());
        let second = state.recompute(today());
        assert_eq!(first, second);
    }

    #[test]
    fn test_clear_filters_restores_search_only_result() {
        let mut state = QueryState::new(base());
        state.search_text = "500".to_string();
        state.date_window = DateWindow::Today;
        assert_eq!(state.recompute(today()).len(), 1);

        state.clear_filters();
        let out = state.recompute(today());
        // back to the search-only narrowing, not the full base
        assert_eq!(out.len(), 2);
    }
}
