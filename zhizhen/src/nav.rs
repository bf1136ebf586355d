//! Screen navigation
//!
//! Stack-based router: push to go deeper, back to pop. Detail routes
//! address an order by its position in the *displayed* (post-query)
//! collection, never the base snapshot.

use serde::Serialize;

/// Addressable screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Route {
    Login,
    Admin,
    /// Order detail, addressed by displayed-collection index
    OrderDetail { index: usize },
    CreateOrder,
}

/// Navigation stack, rooted at the login screen
#[derive(Debug)]
pub struct Router {
    stack: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Login],
        }
    }

    /// The screen currently on top
    pub fn current(&self) -> &Route {
        // stack is never empty: back() refuses to pop the root
        self.stack.last().unwrap_or(&Route::Login)
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!(?route, "navigate");
        self.stack.push(route);
    }

    /// Pop the top screen. No-op at the root; returns whether a pop happened.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
