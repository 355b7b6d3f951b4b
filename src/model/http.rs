/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::session::{AuthInterceptor, SessionStore};
use crate::constants::{JSON_CONTENT_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::model::query::QueryParams;
use crate::model::responses::{ApiResponse, ErrorResponse};
use reqwest::Client as HttpInternalClient;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Headers attached to a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    headers: Vec<(&'static str, String)>,
}

impl RequestHeaders {
    /// No extra headers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `Authorization: Bearer <token>`
    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.headers
            .push(("Authorization", format!("Bearer {token}")));
        self
    }

    /// Adds `Content-Type: application/json`
    #[must_use]
    pub fn json(mut self) -> Self {
        self.headers
            .push(("Content-Type", String::from(JSON_CONTENT_TYPE)));
        self
    }

    /// Value of `name`, if set
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over the `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Request client bound to the configured base address
///
/// Every request goes through the same [`AuthInterceptor`], so a 401 from any
/// endpoint invalidates the host's session in one place.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
    base_url: Url,
    interceptor: AuthInterceptor,
}

impl HttpClient {
    /// Creates a client whose interceptor dispatches into `store`
    pub fn new(config: &Config, store: Arc<dyn SessionStore>) -> Result<Self, AppError> {
        Self::with_interceptor(config, AuthInterceptor::new(store))
    }

    /// Creates a client whose session store is injected later
    pub fn new_lazy(config: &Config) -> Result<Self, AppError> {
        Self::with_interceptor(config, AuthInterceptor::uninitialized())
    }

    /// Creates a client around an existing interceptor
    pub fn with_interceptor(
        config: &Config,
        interceptor: AuthInterceptor,
    ) -> Result<Self, AppError> {
        let mut builder = HttpInternalClient::builder().user_agent(USER_AGENT);
        if config.rest_api.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.rest_api.timeout));
        }
        let http_client = builder.build()?;
        let base_url = parse_base_url(&config.rest_api.base_url)?;

        Ok(Self {
            http_client,
            base_url,
            interceptor,
        })
    }

    /// Supplies the session store of a lazily built client
    pub fn inject_store(&self, store: Arc<dyn SessionStore>) -> Result<(), AppError> {
        self.interceptor.inject_store(store)
    }

    /// Base address requests are resolved against
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Interceptor applied to every response
    #[must_use]
    pub fn interceptor(&self) -> &AuthInterceptor {
        &self.interceptor
    }

    /// Makes a GET request
    pub async fn get(
        &self,
        path: &str,
        query: Option<&QueryParams>,
        headers: RequestHeaders,
    ) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, path, query, None::<()>, headers)
            .await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize>(
        &self,
        path: &str,
        body: B,
        headers: RequestHeaders,
    ) -> Result<ApiResponse, AppError> {
        self.request(Method::POST, path, None, Some(body), headers)
            .await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize>(
        &self,
        path: &str,
        body: B,
        headers: RequestHeaders,
    ) -> Result<ApiResponse, AppError> {
        self.request(Method::PUT, path, None, Some(body), headers)
            .await
    }

    /// Makes a DELETE request
    pub async fn delete(
        &self,
        path: &str,
        headers: RequestHeaders,
    ) -> Result<ApiResponse, AppError> {
        self.request(Method::DELETE, path, None, None::<()>, headers)
            .await
    }

    /// Sends a request and runs the outcome through the interceptor
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<B>,
        headers: RequestHeaders,
    ) -> Result<ApiResponse, AppError> {
        let url = build_url(&self.base_url, path, query)?;
        let result = make_http_request(&self.http_client, method, url.as_str(), &headers, &body)
            .await;
        self.interceptor.intercept(result)
    }
}

/// Parses the base address, making sure later joins keep its path
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(AppError::InvalidInput(format!(
            "base url cannot be a base: {base_url}"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Resolves `path` under `base` and appends the query, if any
pub(crate) fn build_url(
    base: &Url,
    path: &str,
    query: Option<&QueryParams>,
) -> Result<Url, AppError> {
    let mut url = base.join(path.trim_start_matches('/'))?;
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.set_query(Some(&query.to_query_string()));
    }
    Ok(url)
}

/// Sends one HTTP request, mapping non-2xx statuses to errors
///
/// No retry is attempted: transport failures become [`AppError::Network`],
/// a 401 becomes [`AppError::Unauthorized`] and every other non-2xx status
/// becomes [`AppError::Http`], each carrying the status and body.
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: &RequestHeaders,
    body: &Option<B>,
) -> Result<ApiResponse, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in headers.iter() {
        request = request.header(name, value);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return ApiResponse::from_response(response).await;
    }

    let error_response = ErrorResponse::from_response(response).await;
    match status {
        StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized(error_response)),
        _ => Err(AppError::Http(error_response)),
    }
}
