//! Order Model

use serde::{Deserialize, Serialize};

/// Event timeslot (display-only, never compared)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTimeslot {
    /// Start time in `HH:MM`
    pub start_time: String,
    /// End time in `HH:MM`
    pub end_time: String,
}

/// Event address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAddress {
    pub city: String,
    pub street: String,
}

/// Payment terms for a booking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPay {
    /// Agent commission as a numeric string (e.g. "500")
    pub agent_commission: String,
    /// Model pay, free-form (may be a range like "50-200")
    pub model_pay: String,
}

/// Booking order entity
///
/// Immutable once fetched. `event_date` is always `YYYY-MM-DD`, which keeps
/// lexicographic comparison equivalent to calendar comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Organization requesting the booking
    pub client: String,
    /// Human contact name
    pub contact: String,
    /// Person who approves model selection
    pub model_reviewer: String,
    /// Event date in `YYYY-MM-DD`
    pub event_date: String,
    pub event_timeslot: EventTimeslot,
    pub event_address: EventAddress,
    pub pay: OrderPay,
    pub target_hair_style_description: String,
    /// Photo filenames/URLs, display-only
    pub target_hair_style_photos: Vec<String>,
    pub model_requirements: String,
    pub event_description: String,
}

impl Order {
    /// All-blank order used as the create-form draft
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_camel_case_shape() {
        let order = Order {
            client: "施华蔻".to_string(),
            event_date: "2025-08-04".to_string(),
            pay: OrderPay {
                agent_commission: "500".to_string(),
                model_pay: "50-200".to_string(),
            },
            ..Order::empty()
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["client"], "施华蔻");
        assert_eq!(json["eventDate"], "2025-08-04");
        assert_eq!(json["pay"]["agentCommission"], "500");
        assert_eq!(json["eventTimeslot"]["startTime"], "");

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }
}
