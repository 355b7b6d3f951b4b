/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Uptime Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ```rust
//! use uptime_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:5000/api/v1");
//! let client = Client::new_lazy(config).unwrap();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Uptime API client
pub use crate::application::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client implementing every service
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::check::CheckService;
pub use crate::application::interfaces::monitor::MonitorService;
pub use crate::application::interfaces::user::UserService;

// ============================================================================
// SESSION HANDLING
// ============================================================================

/// Session store seam and 401 interceptor
pub use crate::application::session::{AuthInterceptor, SessionAction, SessionStore};

// ============================================================================
// TRANSPORT AND MODELS
// ============================================================================

/// Request client
pub use crate::model::http::{HttpClient, RequestHeaders};

/// Query parameters
pub use crate::model::query::QueryParams;

/// Request models
pub use crate::model::requests::{
    ChecksQuery, InvitationRequest, InvitationVerifyRequest, MonitorsQuery, RecoveryTokenRequest,
    SortOrder, StatsQuery,
};

/// Response models
pub use crate::model::responses::{ApiResponse, ErrorResponse};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest status codes for matching on errors
pub use reqwest::StatusCode;
