//! Admin tab shell
//!
//! Bottom navigation between the four admin tabs. Only the order tab has
//! real functionality; the other three render a static placeholder.

use serde::Serialize;

/// Admin tabs, in display order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminTab {
    #[default]
    Orders,
    Finance,
    Models,
    Training,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Orders,
        AdminTab::Finance,
        AdminTab::Models,
        AdminTab::Training,
    ];

    /// Tab bar label
    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Orders => "订单",
            AdminTab::Finance => "财务",
            AdminTab::Models => "模特",
            AdminTab::Training => "培训",
        }
    }

    /// Placeholder notice for tabs that are not built yet
    pub fn placeholder_notice(&self) -> Option<&'static str> {
        match self {
            AdminTab::Orders => None,
            _ => Some("功能开发中"),
        }
    }
}

/// Tab shell state
#[derive(Debug, Default)]
pub struct AdminShell {
    active: AdminTab,
}

impl AdminShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> AdminTab {
        self.active
    }

    pub fn select(&mut self, tab: AdminTab) {
        self.active = tab;
    }
}
