//! # Uptime Client
//!
//! Async client for the backend API of the Uptime monitoring application.
//!
//! The client is bound to one base address and exposes one method per backend
//! operation, grouped in three services:
//!
//! - [`MonitorService`](application::interfaces::monitor::MonitorService):
//!   create, list, update and delete monitors, statistics and certificate expiry
//! - [`UserService`](application::interfaces::user::UserService): registration,
//!   login, user updates, password recovery and invitations
//! - [`CheckService`](application::interfaces::check::CheckService): check
//!   history per monitor or per user, with pagination
//!
//! Every response passes through a single [`AuthInterceptor`](application::session::AuthInterceptor).
//! When the server answers 401 the interceptor dispatches
//! [`SessionAction::ClearAuthState`](application::session::SessionAction) into
//! the host's [`SessionStore`](application::session::SessionStore) and the
//! error is still returned to the caller.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uptime_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! setup_logger();
//! let store: Arc<dyn SessionStore> = Arc::new(|action: SessionAction| {
//!     info!("session action: {:?}", action);
//! });
//! let client = Client::new(Config::new(), store)?;
//!
//! let types = ["http", "ping"];
//! let query = MonitorsQuery::new()
//!     .with_limit(25)
//!     .with_types(&types)
//!     .with_sort_order(SortOrder::Desc);
//! let monitors = client.get_monitors_by_user_id("token", "user-1", &query).await?;
//! info!("{}", monitors.body);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `UPTIME_API_BASE_URL` | `http://localhost:5000/api/v1` | Base address of the backend |
//! | `UPTIME_API_TIMEOUT` | `0` | Request timeout in seconds, `0` keeps the transport default |
//! | `LOGLEVEL` | `INFO` | Level used by [`setup_logger`](utils::logger::setup_logger) |

/// Application layer: client, configuration, services and session handling
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP plumbing and request/response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
