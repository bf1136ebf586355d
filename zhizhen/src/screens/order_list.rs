//! 订单列表 screen
//!
//! Owns the one-shot fetch, the query state, and the two bottom sheets.
//! Sheet selections are staged: edits go to a pending copy and only reach
//! the query engine on confirm. The displayed collection is recomputed in
//! full after every accepted action.

use chrono::NaiveDate;
use serde::Serialize;

use shared::error::{AppError, AppResult};
use shared::models::Order;
use shared::query::{DateWindow, QueryState, SortDirection};

use crate::api::OrderSource;

use super::sheet::SheetState;

/// Fixed commission buckets offered by the filter sheet
pub const COMMISSION_BUCKETS: [&str; 5] = ["200", "300", "500", "800", "1000"];

/// One-shot load lifecycle of the screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadState {
    /// Fetch in flight; the screen accepts no query input
    Loading,
    Loaded,
    /// Fetch failed; message is user-visible, list stays empty, no retry
    Failed { message: String },
}

/// Staged filter-sheet choices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub date_window: DateWindow,
    pub commission: Option<String>,
}

/// Staged sort-sheet choices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSelection {
    pub time: SortDirection,
    pub commission: SortDirection,
}

/// Order list screen state
#[derive(Debug)]
pub struct OrderListScreen {
    load_state: LoadState,
    query: QueryState,
    displayed: Vec<Order>,
    pending_filter: FilterSelection,
    pending_sort: SortSelection,
    filter_sheet: SheetState,
    sort_sheet: SheetState,
    /// Pinned date-window anchor; defaults to the current local date
    today_override: Option<NaiveDate>,
}

impl OrderListScreen {
    /// Fresh screen, fetch not yet resolved
    pub fn new() -> Self {
        Self {
            load_state: LoadState::Loading,
            query: QueryState::new(Vec::new()),
            displayed: Vec::new(),
            pending_filter: FilterSelection::default(),
            pending_sort: SortSelection::default(),
            filter_sheet: SheetState::default(),
            sort_sheet: SheetState::default(),
            today_override: None,
        }
    }

    /// Activate the screen: await the one-time fetch and build the snapshot.
    ///
    /// On failure the screen ends up in `Failed` with an empty list; the
    /// fetch is not retried automatically.
    pub async fn activate(source: &dyn OrderSource) -> Self {
        let mut screen = Self::new();
        match source.fetch_orders().await {
            Ok(orders) => {
                tracing::info!(count = orders.len(), "orders loaded");
                screen.displayed = orders.clone();
                screen.query = QueryState::new(orders);
                screen.load_state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch orders");
                screen.load_state = LoadState::Failed {
                    message: e.to_string(),
                };
            }
        }
        screen
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// The derived collection currently shown to the user
    pub fn displayed(&self) -> &[Order] {
        &self.displayed
    }

    pub fn filter_sheet(&self) -> SheetState {
        self.filter_sheet
    }

    pub fn sort_sheet(&self) -> SheetState {
        self.sort_sheet
    }

    pub fn pending_filter(&self) -> &FilterSelection {
        &self.pending_filter
    }

    pub fn pending_sort(&self) -> SortSelection {
        self.pending_sort
    }

    /// Pin the date-window anchor instead of reading the local clock.
    /// Used by tests and UI previews.
    pub fn anchor_date(&mut self, today: NaiveDate) {
        self.today_override = Some(today);
    }

    /// Resolve an order by its position in the displayed collection
    pub fn order_at(&self, index: usize) -> AppResult<&Order> {
        self.displayed
            .get(index)
            .ok_or_else(|| AppError::not_found(format!("Order at index {}", index)))
    }

    // ==================== Search ====================

    /// Update the search text and recompute immediately (keystroke
    /// semantics). Rejected while the fetch has not resolved.
    pub fn set_search_text(&mut self, text: &str) -> bool {
        if !self.is_loaded() {
            return false;
        }
        self.query.search_text = text.to_string();
        self.recompute();
        true
    }

    // ==================== Filter sheet ====================

    /// Open the filter sheet, staging the confirmed selections as pending
    pub fn open_filter_sheet(&mut self) -> bool {
        if !self.is_loaded() || !self.filter_sheet.open() {
            return false;
        }
        self.pending_filter = FilterSelection {
            date_window: self.query.date_window,
            commission: self.query.commission_filter.clone(),
        };
        true
    }

    pub fn finish_open_filter_sheet(&mut self) -> bool {
        self.filter_sheet.finish_open()
    }

    /// Stage a date-window choice; only possible while the sheet is open
    pub fn set_pending_date_window(&mut self, window: DateWindow) -> bool {
        if !self.filter_sheet.is_open() {
            return false;
        }
        self.pending_filter.date_window = window;
        true
    }

    /// Stage a commission bucket (or clear it); only while the sheet is open
    pub fn set_pending_commission(&mut self, commission: Option<String>) -> bool {
        if !self.filter_sheet.is_open() {
            return false;
        }
        self.pending_filter.commission = commission;
        true
    }

    /// Commit the pending filter selections and start closing the sheet
    pub fn confirm_filters(&mut self) -> bool {
        if !self.filter_sheet.is_open() {
            return false;
        }
        self.query.date_window = self.pending_filter.date_window;
        self.query.commission_filter = self.pending_filter.commission.clone();
        self.recompute();
        self.filter_sheet.close()
    }

    /// Clear pending *and* confirmed filter selections.
    ///
    /// The list falls back to the search-only result (not the raw base
    /// collection) when a search term is still active. The sheet stays open.
    pub fn reset_filters(&mut self) -> bool {
        if !self.filter_sheet.is_open() {
            return false;
        }
        self.pending_filter = FilterSelection::default();
        self.query.clear_filters();
        self.recompute();
        true
    }

    /// Discard pending edits and start closing the sheet
    pub fn cancel_filter_sheet(&mut self) -> bool {
        self.filter_sheet.close()
    }

    pub fn finish_close_filter_sheet(&mut self) -> bool {
        self.filter_sheet.finish_close()
    }

    // ==================== Sort sheet ====================

    pub fn open_sort_sheet(&mut self) -> bool {
        if !self.is_loaded() || !self.sort_sheet.open() {
            return false;
        }
        self.pending_sort = SortSelection {
            time: self.query.time_sort,
            commission: self.query.commission_sort,
        };
        true
    }

    pub fn finish_open_sort_sheet(&mut self) -> bool {
        self.sort_sheet.finish_open()
    }

    pub fn set_pending_time_sort(&mut self, direction: SortDirection) -> bool {
        if !self.sort_sheet.is_open() {
            return false;
        }
        self.pending_sort.time = direction;
        true
    }

    pub fn set_pending_commission_sort(&mut self, direction: SortDirection) -> bool {
        if !self.sort_sheet.is_open() {
            return false;
        }
        self.pending_sort.commission = direction;
        true
    }

    pub fn confirm_sorts(&mut self) -> bool {
        if !self.sort_sheet.is_open() {
            return false;
        }
        self.query.time_sort = self.pending_sort.time;
        self.query.commission_sort = self.pending_sort.commission;
        self.recompute();
        self.sort_sheet.close()
    }

    pub fn reset_sorts(&mut self) -> bool {
        if !self.sort_sheet.is_open() {
            return false;
        }
        self.pending_sort = SortSelection::default();
        self.query.clear_sorts();
        self.recompute();
        true
    }

    pub fn cancel_sort_sheet(&mut self) -> bool {
        self.sort_sheet.close()
    }

    pub fn finish_close_sort_sheet(&mut self) -> bool {
        self.sort_sheet.finish_close()
    }

    // ==================== Internals ====================

    fn is_loaded(&self) -> bool {
        self.load_state == LoadState::Loaded
    }

    fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    fn recompute(&mut self) {
        self.displayed = self.query.recompute(self.today());
    }
}

impl Default for OrderListScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FixtureOrderSource;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()
    }

    async fn loaded_screen() -> OrderListScreen {
        let mut screen = OrderListScreen::activate(&FixtureOrderSource).await;
        screen.anchor_date(today());
        screen
    }

    fn open_filter(screen: &mut OrderListScreen) {
        assert!(screen.open_filter_sheet());
        assert!(screen.finish_open_filter_sheet());
    }

    fn open_sort(screen: &mut OrderListScreen) {
        assert!(screen.open_sort_sheet());
        assert!(screen.finish_open_sort_sheet());
    }

    #[tokio::test]
    async fn test_activate_loads_snapshot() {
        let screen = loaded_screen().await;
        assert_eq!(*screen.load_state(), LoadState::Loaded);
        assert_eq!(screen.displayed().len(), 10);
    }

    #[tokio::test]
    async fn test_input_rejected_while_loading() {
        let mut screen = OrderListScreen::new();
        assert!(!screen.set_search_text("上海"));
        assert!(!screen.open_filter_sheet());
        assert!(!screen.open_sort_sheet());
        assert!(screen.displayed().is_empty());
    }

    #[tokio::test]
    async fn test_search_recomputes_immediately() {
        let mut screen = loaded_screen().await;
        assert!(screen.set_search_text("上海"));
        assert_eq!(screen.displayed().len(), 2);

        assert!(screen.set_search_text("  "));
        assert_eq!(screen.displayed().len(), 10);
    }

    #[tokio::test]
    async fn test_pending_edits_do_not_apply_until_confirm() {
        let mut screen = loaded_screen().await;
        open_filter(&mut screen);
        assert!(screen.set_pending_date_window(DateWindow::Today));
        assert_eq!(screen.displayed().len(), 10);

        assert!(screen.confirm_filters());
        assert_eq!(screen.displayed().len(), 2);
    }

    #[tokio::test]
    async fn test_cancel_discards_pending() {
        let mut screen = loaded_screen().await;
        open_filter(&mut screen);
        screen.set_pending_date_window(DateWindow::Today);
        assert!(screen.cancel_filter_sheet());
        assert!(screen.finish_close_filter_sheet());
        assert_eq!(screen.displayed().len(), 10);

        // reopening stages the confirmed (empty) selection again
        open_filter(&mut screen);
        assert_eq!(*screen.pending_filter(), FilterSelection::default());
    }

    #[tokio::test]
    async fn test_reset_restores_search_only_result() {
        let mut screen = loaded_screen().await;
        screen.set_search_text("上海");
        open_filter(&mut screen);
        screen.set_pending_commission(Some("500".to_string()));
        screen.confirm_filters();
        assert_eq!(screen.displayed().len(), 1);

        screen.finish_close_filter_sheet();
        open_filter(&mut screen);
        assert!(screen.reset_filters());
        // back to the search narrowing, not the full ten
        assert_eq!(screen.displayed().len(), 2);
    }

    #[tokio::test]
    async fn test_sort_sheet_staging() {
        let mut screen = loaded_screen().await;
        open_sort(&mut screen);
        assert!(screen.set_pending_time_sort(SortDirection::Ascending));
        assert_eq!(screen.displayed()[0].client, "施华蔻");

        assert!(screen.confirm_sorts());
        let first = &screen.displayed()[0];
        assert_eq!(first.event_date, "2025-08-04");
    }

    #[tokio::test]
    async fn test_order_at_bounds() {
        let screen = loaded_screen().await;
        assert!(screen.order_at(0).is_ok());
        assert!(screen.order_at(10).is_err());
    }

    #[tokio::test]
    async fn test_edits_rejected_while_sheet_closed() {
        let mut screen = loaded_screen().await;
        assert!(!screen.set_pending_date_window(DateWindow::Today));
        assert!(!screen.confirm_filters());
        assert!(!screen.reset_filters());
        assert!(!screen.set_pending_time_sort(SortDirection::Ascending));
    }
}
