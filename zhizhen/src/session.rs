//! 登录会话
//!
//! Stub credential check until real authentication lands; the login screen
//! gates the admin shell on this and nothing else.

use serde::Serialize;
use shared::error::{AppError, AppResult};

// Stub account, matching the current backend-less build
const STUB_USERNAME: &str = "a";
const STUB_PASSWORD: &str = "123";

/// A logged-in user session (not persisted, dies with the app)
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub username: String,
    /// UTC millis at login
    pub logged_in_at: i64,
}

impl Session {
    /// Validate credentials and open a session.
    ///
    /// Exact match against the stub account; anything else fails with
    /// the user-facing message the login screen shows.
    pub fn login(username: &str, password: &str) -> AppResult<Self> {
        if username == STUB_USERNAME && password == STUB_PASSWORD {
            tracing::info!(username, "login succeeded");
            Ok(Self {
                username: username.to_string(),
                logged_in_at: chrono::Utc::now().timestamp_millis(),
            })
        } else {
            tracing::warn!(username, "login rejected");
            Err(AppError::invalid_credentials("用户名或密码错误，请重试"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_login_accepts_stub_account() {
        let session = Session::login("a", "123").unwrap();
        assert_eq!(session.username, "a");
        assert!(session.logged_in_at > 0);
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let err = Session::login("a", "wrong").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(err.message, "用户名或密码错误，请重试");
    }

    #[test]
    fn test_login_rejects_unknown_user() {
        assert!(Session::login("admin", "123").is_err());
    }
}
