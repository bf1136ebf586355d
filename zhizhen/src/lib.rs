//! 智真模特经纪管理系统 - client application core
//!
//! Headless state layer behind the mobile UI: login session, navigation,
//! the admin tab shell, and the order list / detail / create screens over
//! an in-memory order source. The rendering layer binds to these types and
//! forwards user actions; nothing here touches the network or disk.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use shared;

pub mod api;
pub mod app;
pub mod nav;
pub mod screens;
pub mod session;

/// Initialize console logging with an env-filter override.
///
/// `level` is the default directive when `RUST_LOG` is unset
/// (e.g. "info" or "zhizhen=debug").
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .try_init()?;

    tracing::info!("logging initialized");
    Ok(())
}
