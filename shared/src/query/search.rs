//! Recursive full-text search
//!
//! Deep substring search over a record's whole structure. Instead of
//! reflecting over arbitrary values, records expose a typed field tree
//! ([`FieldValue`]) and the matcher recurses over that closed variant.

use crate::models::{Order, OrderPay};

/// A node in a record's searchable field tree
#[derive(Debug)]
pub enum FieldValue<'a> {
    /// A text leaf, matched by lowercased substring containment
    Text(&'a str),
    /// An ordered sequence; matches if any element matches
    Sequence(Vec<FieldValue<'a>>),
    /// A keyed structure; matches if any of its values matches
    Composite(Vec<FieldValue<'a>>),
    /// Any other value kind; never matches
    Other,
}

/// Types that expose a searchable field tree
pub trait Searchable {
    fn field_tree(&self) -> FieldValue<'_>;
}

impl Searchable for Order {
    fn field_tree(&self) -> FieldValue<'_> {
        FieldValue::Composite(vec![
            FieldValue::Text(&self.client),
            FieldValue::Text(&self.contact),
            FieldValue::Text(&self.model_reviewer),
            FieldValue::Text(&self.event_date),
            FieldValue::Composite(vec![
                FieldValue::Text(&self.event_timeslot.start_time),
                FieldValue::Text(&self.event_timeslot.end_time),
            ]),
            FieldValue::Composite(vec![
                FieldValue::Text(&self.event_address.city),
                FieldValue::Text(&self.event_address.street),
            ]),
            self.pay.field_tree(),
            FieldValue::Text(&self.target_hair_style_description),
            FieldValue::Sequence(
                self.target_hair_style_photos
                    .iter()
                    .map(|p| FieldValue::Text(p))
                    .collect(),
            ),
            FieldValue::Text(&self.model_requirements),
            FieldValue::Text(&self.event_description),
        ])
    }
}

impl Searchable for OrderPay {
    fn field_tree(&self) -> FieldValue<'_> {
        FieldValue::Composite(vec![
            FieldValue::Text(&self.agent_commission),
            FieldValue::Text(&self.model_pay),
        ])
    }
}

/// Case-insensitive deep substring match.
///
/// `query_lower` must already be lowercased and non-blank; the caller is
/// responsible for the blank-search bypass (blank search means "keep all",
/// not "everything contains the empty string").
pub fn matches(record: &impl Searchable, query_lower: &str) -> bool {
    node_matches(&record.field_tree(), query_lower)
}

fn node_matches(node: &FieldValue<'_>, query_lower: &str) -> bool {
    match node {
        FieldValue::Text(s) => s.to_lowercase().contains(query_lower),
        FieldValue::Sequence(items) | FieldValue::Composite(items) => {
            items.iter().any(|item| node_matches(item, query_lower))
        }
        FieldValue::Other => false,
    }
}
