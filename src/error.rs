/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error types for the Uptime API client

use crate::model::responses::ErrorResponse;
use reqwest::StatusCode;
use std::fmt;
use std::io;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure, no response was received
    Network(reqwest::Error),
    /// The server answered with a non-2xx status other than 401
    Http(ErrorResponse),
    /// The server answered with 401, the session is no longer valid
    Unauthorized(ErrorResponse),
    /// A 401 was observed before any session store was injected
    StoreNotInjected(Box<AppError>),
    /// A session store was injected more than once
    StoreAlreadyInjected,
    /// The configured base URL or a request path could not be parsed
    InvalidUrl(url::ParseError),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// I/O failure
    Io(io::Error),
    /// Caller supplied an argument the client cannot send
    InvalidInput(String),
}

impl AppError {
    /// HTTP status carried by the error, if the server answered at all
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|r| r.status)
    }

    /// Response payload carried by the error, if any
    #[must_use]
    pub fn response(&self) -> Option<&ErrorResponse> {
        match self {
            AppError::Http(r) | AppError::Unauthorized(r) => Some(r),
            AppError::StoreNotInjected(inner) => inner.response(),
            _ => None,
        }
    }

    /// Whether this error is an authentication failure (status 401)
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Http(r) => write!(f, "request failed with status {}", r.status),
            AppError::Unauthorized(_) => write!(f, "unauthorized"),
            AppError::StoreNotInjected(inner) => {
                write!(f, "session store not injected ({inner})")
            }
            AppError::StoreAlreadyInjected => write!(f, "session store already injected"),
            AppError::InvalidUrl(e) => write!(f, "invalid url: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::StoreNotInjected(inner) => Some(inner.as_ref()),
            AppError::InvalidUrl(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<url::ParseError> for AppError {
    fn from(e: url::ParseError) -> Self {
        AppError::InvalidUrl(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}
