//! Multi-key sort
//!
//! Sorting is two sequential, independent full passes rather than one
//! composite comparator: the date pass runs first, then the commission
//! pass re-sorts the entire intermediate result. With both keys active the
//! commission key therefore dominates, and the date order is only visible
//! between records that tie on commission (both passes are stable).
//! This reproduces the shipped list behavior; see DESIGN.md for the
//! product-intent question around it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Order;

/// Direction for one sort key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    /// Key not selected
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Descending => ordering.reverse(),
            _ => ordering,
        }
    }
}

/// Sort a snapshot by event date and/or agent commission.
///
/// Returns a new sequence; the input is not mutated. With both directions
/// `None` the input order is preserved unchanged.
pub fn sort(records: &[Order], time: SortDirection, commission: SortDirection) -> Vec<Order> {
    let mut out = records.to_vec();

    if time != SortDirection::None {
        // YYYY-MM-DD compares correctly as text
        out.sort_by(|a, b| time.orient(a.event_date.cmp(&b.event_date)));
    }

    if commission != SortDirection::None {
        out.sort_by(|a, b| compare_commission(a, b, commission));
    }

    out
}

/// Commission comparison with an explicit policy for malformed values:
/// a commission that does not parse as an integer sorts after every
/// parsable one, in either direction.
fn compare_commission(a: &Order, b: &Order, direction: SortDirection) -> Ordering {
    match (commission_key(a), commission_key(b)) {
        (Some(x), Some(y)) => direction.orient(x.cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn commission_key(order: &Order) -> Option<i64> {
    order.pay.agent_commission.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(date: &str, commission: &str) -> Order {
        let mut o = Order::empty();
        o.event_date = date.to_string();
        o.pay.agent_commission = commission.to_string();
        o
    }

    fn keys(records: &[Order]) -> Vec<(String, String)> {
        records
            .iter()
            .map(|o| (o.event_date.clone(), o.pay.agent_commission.clone()))
            .collect()
    }

    #[test]
    fn test_no_sort_preserves_input() {
        let records = vec![order("2025-08-05", "100"), order("2025-08-04", "50")];
        let out = sort(&records, SortDirection::None, SortDirection::None);
        assert_eq!(keys(&out), keys(&records));
    }

    #[test]
    fn test_time_ascending_only() {
        let records = vec![
            order("2025-08-06", "1"),
            order("2025-08-04", "2"),
            order("2025-08-05", "3"),
        ];
        let out = sort(&records, SortDirection::Ascending, SortDirection::None);
        let dates: Vec<&str> = out.iter().map(|o| o.event_date.as_str()).collect();
        assert_eq!(dates, vec!["2025-08-04", "2025-08-05", "2025-08-06"]);
    }

    #[test]
    fn test_time_descending_only() {
        let records = vec![order("2025-08-04", ""), order("2025-08-06", "")];
        let out = sort(&records, SortDirection::Descending, SortDirection::None);
        let dates: Vec<&str> = out.iter().map(|o| o.event_date.as_str()).collect();
        assert_eq!(dates, vec!["2025-08-06", "2025-08-04"]);
    }

    #[test]
    fn test_commission_numeric_not_lexicographic() {
        let records = vec![order("", "1000"), order("", "200"), order("", "30")];
        let out = sort(&records, SortDirection::None, SortDirection::Ascending);
        let comms: Vec<&str> = out.iter().map(|o| o.pay.agent_commission.as_str()).collect();
        // lexicographic would give ["1000", "200", "30"]
        assert_eq!(comms, vec!["30", "200", "1000"]);
    }

    #[test]
    fn test_commission_pass_dominates_time_pass() {
        // time-ascending then commission-ascending
        let records = vec![order("2025-08-05", "100"), order("2025-08-04", "50")];
        let out = sort(&records, SortDirection::Ascending, SortDirection::Ascending);
        assert_eq!(
            keys(&out),
            vec![
                ("2025-08-04".to_string(), "50".to_string()),
                ("2025-08-05".to_string(), "100".to_string()),
            ]
        );

        // Same two keys, but commission inverted relative to date: the
        // commission pass wins outright.
        let records = vec![order("2025-08-04", "100"), order("2025-08-05", "50")];
        let out = sort(&records, SortDirection::Ascending, SortDirection::Ascending);
        assert_eq!(
            keys(&out),
            vec![
                ("2025-08-05".to_string(), "50".to_string()),
                ("2025-08-04".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_time_order_survives_commission_ties() {
        let records = vec![
            order("2025-08-06", "500"),
            order("2025-08-04", "500"),
            order("2025-08-05", "500"),
        ];
        let out = sort(&records, SortDirection::Ascending, SortDirection::Ascending);
        let dates: Vec<&str> = out.iter().map(|o| o.event_date.as_str()).collect();
        assert_eq!(dates, vec!["2025-08-04", "2025-08-05", "2025-08-06"]);
    }

    #[test]
    fn test_unparsable_commission_sorts_last() {
        let records = vec![order("", "abc"), order("", "500"), order("", "")];
        let asc = sort(&records, SortDirection::None, SortDirection::Ascending);
        assert_eq!(asc[0].pay.agent_commission, "500");

        let desc = sort(&records, SortDirection::None, SortDirection::Descending);
        assert_eq!(desc[0].pay.agent_commission, "500");
    }
}
