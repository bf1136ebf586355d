//! Application root
//!
//! Ties the session, the router and the admin shell together. Screens are
//! created on navigation and owned by the rendering layer; the app only
//! guards the transitions.

use shared::error::{AppError, AppResult};

use crate::nav::{Route, Router};
use crate::screens::{AdminShell, CreateOrderScreen, OrderDetailScreen, OrderListScreen};
use crate::session::Session;

/// Root application state
#[derive(Debug)]
pub struct App {
    router: Router,
    session: Option<Session>,
    shell: AdminShell,
}

impl App {
    /// Fresh app at the login screen, no session
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            session: None,
            shell: AdminShell::new(),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_route(&self) -> &Route {
        self.router.current()
    }

    pub fn shell(&self) -> &AdminShell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut AdminShell {
        &mut self.shell
    }

    /// Attempt login; on success navigate to the admin shell
    pub fn login(&mut self, username: &str, password: &str) -> AppResult<()> {
        let session = Session::login(username, password)?;
        self.session = Some(session);
        self.router.push(Route::Admin);
        Ok(())
    }

    /// Open the detail screen for an order in the displayed collection
    pub fn open_order_detail(
        &mut self,
        list: &OrderListScreen,
        index: usize,
    ) -> AppResult<OrderDetailScreen> {
        self.require_session()?;
        let screen = OrderDetailScreen::load(list.displayed(), index)?;
        self.router.push(Route::OrderDetail { index });
        Ok(screen)
    }

    /// Open the create-order form
    pub fn open_create_order(&mut self) -> AppResult<CreateOrderScreen> {
        self.require_session()?;
        self.router.push(Route::CreateOrder);
        Ok(CreateOrderScreen::new())
    }

    /// Pop back one screen (no-op at the root)
    pub fn back(&mut self) -> bool {
        self.router.back()
    }

    fn require_session(&self) -> AppResult<()> {
        if self.session.is_some() {
            Ok(())
        } else {
            Err(AppError::new(shared::error::ErrorCode::NotAuthenticated))
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
