//! 订单详情 screen
//!
//! View/edit round trip over one displayed order: entering edit mode
//! clones the record into a draft, saves commit the draft, cancel throws
//! it away. The record is addressed by its displayed-collection index.

use shared::error::{AppError, AppResult};
use shared::models::Order;

/// Order detail screen state
#[derive(Debug, Clone)]
pub struct OrderDetailScreen {
    /// Position in the displayed collection this screen was opened from
    index: usize,
    order: Order,
    /// Present iff edit mode is active
    draft: Option<Order>,
}

impl OrderDetailScreen {
    /// Open the detail screen for `index` into the displayed collection
    pub fn load(displayed: &[Order], index: usize) -> AppResult<Self> {
        let order = displayed
            .get(index)
            .cloned()
            .ok_or_else(|| AppError::with_message(
                shared::error::ErrorCode::OrderNotFound,
                format!("订单不存在 (index {})", index),
            ))?;
        Ok(Self {
            index,
            order,
            draft: None,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The record currently rendered: the draft while editing, the saved
    /// order otherwise
    pub fn current(&self) -> &Order {
        self.draft.as_ref().unwrap_or(&self.order)
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Enter edit mode, cloning the order into a draft
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.order.clone());
        }
    }

    /// Field-level access for the presentation layer while editing
    pub fn draft_mut(&mut self) -> Option<&mut Order> {
        self.draft.as_mut()
    }

    /// Commit the draft as the current order and leave edit mode
    pub fn save(&mut self) {
        if let Some(draft) = self.draft.take() {
            self.order = draft;
        }
    }

    /// Discard the draft and leave edit mode
    pub fn cancel(&mut self) {
        self.draft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixture_orders;

    #[test]
    fn test_load_by_index() {
        let orders = fixture_orders();
        let screen = OrderDetailScreen::load(&orders, 1).unwrap();
        assert_eq!(screen.current().client, "香奈儿");
        assert!(!screen.is_editing());
    }

    #[test]
    fn test_load_out_of_range() {
        let orders = fixture_orders();
        let err = OrderDetailScreen::load(&orders, 99).unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::OrderNotFound);
    }

    #[test]
    fn test_edit_save_round_trip() {
        let orders = fixture_orders();
        let mut screen = OrderDetailScreen::load(&orders, 0).unwrap();
        screen.begin_edit();
        screen.draft_mut().unwrap().contact = "新联系人".to_string();
        // draft is what renders while editing
        assert_eq!(screen.current().contact, "新联系人");

        screen.save();
        assert!(!screen.is_editing());
        assert_eq!(screen.current().contact, "新联系人");
    }

    #[test]
    fn test_cancel_discards_edits() {
        let orders = fixture_orders();
        let mut screen = OrderDetailScreen::load(&orders, 0).unwrap();
        screen.begin_edit();
        screen.draft_mut().unwrap().contact = "别人".to_string();
        screen.cancel();
        assert_eq!(screen.current().contact, "娃娃");
        assert!(!screen.is_editing());
    }
}
