/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Successful response from the Uptime API
///
/// The body is kept verbatim as JSON; callers pick the shape they need with
/// [`ApiResponse::json`].
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Value,
}

impl ApiResponse {
    /// Reads a `reqwest` response into an `ApiResponse`
    pub async fn from_response(response: Response) -> Result<Self, AppError> {
        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await?;
        Ok(Self {
            status,
            headers,
            body: parse_body(&text),
        })
    }

    /// Deserializes the body into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

/// Status and body of a failed request
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw response body
    pub body: Value,
}

impl ErrorResponse {
    /// Creates a new error response
    #[must_use]
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// Reads a failed `reqwest` response, tolerating unreadable bodies
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Self {
            status,
            body: parse_body(&text),
        }
    }
}

/// Empty bodies become `Null`, anything that is not JSON is kept as a string
pub(crate) fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
