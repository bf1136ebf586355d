//! Criteria filter
//!
//! Date-window and commission predicates applied conjunctively over the
//! search result. Order-preserving: the output is a stable subsequence of
//! the input.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::Order;

/// Named, now-relative inclusive range of calendar dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateWindow {
    /// No date constraint
    #[default]
    None,
    Today,
    Tomorrow,
    Next7Days,
    NextMonth,
}

impl DateWindow {
    /// Resolve the window to inclusive `YYYY-MM-DD` bounds, anchored to `today`.
    ///
    /// Bounds are compared lexicographically against `event_date`, which is
    /// valid because the format is fixed-width and zero-padded.
    pub fn bounds(self, today: NaiveDate) -> Option<(String, String)> {
        let fmt = |d: NaiveDate| d.format("%Y-%m-%d").to_string();
        match self {
            DateWindow::None => None,
            DateWindow::Today => Some((fmt(today), fmt(today))),
            DateWindow::Tomorrow => {
                let t = today + Days::new(1);
                Some((fmt(t), fmt(t)))
            }
            DateWindow::Next7Days => Some((fmt(today), fmt(today + Days::new(7)))),
            DateWindow::NextMonth => {
                // Calendar-month addition; day-of-month clamping is chrono's.
                let end = today
                    .checked_add_months(Months::new(1))
                    .unwrap_or(NaiveDate::MAX);
                Some((fmt(today), fmt(end)))
            }
        }
    }
}

/// Apply date-window and commission filters, both optional, AND-ed together.
///
/// The commission filter is exact string equality against
/// `pay.agent_commission`, never a numeric comparison.
pub fn apply(
    records: &[Order],
    window: DateWindow,
    commission: Option<&str>,
    today: NaiveDate,
) -> Vec<Order> {
    let bounds = window.bounds(today);
    records
        .iter()
        .filter(|order| {
            let date_ok = match &bounds {
                Some((start, end)) => order.event_date >= *start && order.event_date <= *end,
                None => true,
            };
            let commission_ok = match commission {
                Some(value) => order.pay.agent_commission == value,
                None => true,
            };
            date_ok && commission_ok
        })
        .cloned()
        .collect()
}
