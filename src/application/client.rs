/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::check::CheckService;
use crate::application::interfaces::monitor::MonitorService;
use crate::application::interfaces::user::UserService;
use crate::application::session::SessionStore;
use crate::error::AppError;
use crate::model::http::{HttpClient, RequestHeaders};
use crate::model::requests::{
    ChecksQuery, InvitationRequest, InvitationVerifyRequest, MonitorsQuery, RecoveryTokenRequest,
    StatsQuery,
};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the Uptime monitoring backend
///
/// All operations share one [`HttpClient`], so the 401 handling configured at
/// construction applies to every endpoint.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client that clears the host session through `store` on 401
    pub fn new(config: Config, store: Arc<dyn SessionStore>) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(&config, store)?);
        info!("Uptime client ready for {}", http_client.base_url());
        Ok(Self { http_client })
    }

    /// Creates a client whose session store is supplied later with
    /// [`Client::inject_store`]
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new_lazy(&config)?);
        Ok(Self { http_client })
    }

    /// Wraps an already configured request client
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Supplies the session store; accepted exactly once
    pub fn inject_store(&self, store: Arc<dyn SessionStore>) -> Result<(), AppError> {
        self.http_client.inject_store(store)
    }

    /// Underlying request client
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl MonitorService for Client {
    async fn create_monitor<B>(&self, auth_token: &str, monitor: &B) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync,
    {
        let headers = RequestHeaders::new().bearer(auth_token).json();
        self.http_client.post("/monitors", monitor, headers).await
    }

    async fn get_monitors_by_user_id(
        &self,
        auth_token: &str,
        user_id: &str,
        query: &MonitorsQuery<'_>,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/monitors/user/{user_id}");
        let params = query.to_query();
        debug!("Getting monitors for user {} ({} params)", user_id, params.len());
        let headers = RequestHeaders::new().bearer(auth_token).json();
        self.http_client.get(&path, Some(&params), headers).await
    }

    async fn get_stats_by_monitor_id(
        &self,
        auth_token: &str,
        monitor_id: &str,
        query: &StatsQuery<'_>,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/monitors/stats/{monitor_id}");
        let params = query.to_query();
        let headers = RequestHeaders::new().bearer(auth_token);
        self.http_client.get(&path, Some(&params), headers).await
    }

    async fn update_monitor<B>(
        &self,
        auth_token: &str,
        monitor_id: &str,
        updated_fields: &B,
    ) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync,
    {
        let path = format!("/monitors/{monitor_id}");
        let headers = RequestHeaders::new().bearer(auth_token).json();
        self.http_client.put(&path, updated_fields, headers).await
    }

    async fn delete_monitor_by_id(
        &self,
        auth_token: &str,
        monitor_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/monitors/{monitor_id}");
        let headers = RequestHeaders::new().bearer(auth_token).json();
        self.http_client.delete(&path, headers).await
    }

    async fn get_certificate_expiry(
        &self,
        auth_token: &str,
        monitor_id: &str,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/monitors/certificate/{monitor_id}");
        let headers = RequestHeaders::new().bearer(auth_token);
        self.http_client.get(&path, None, headers).await
    }
}

#[async_trait]
impl UserService for Client {
    async fn register_user<B>(&self, form: &B) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync,
    {
        self.http_client
            .post("/auth/register", form, RequestHeaders::new())
            .await
    }

    async fn login_user<B>(&self, form: &B) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync,
    {
        self.http_client
            .post("/auth/login", form, RequestHeaders::new())
            .await
    }

    async fn update_user<B>(
        &self,
        auth_token: &str,
        user_id: &str,
        form: &B,
    ) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync,
    {
        let path = format!("/auth/user/{user_id}");
        let headers = RequestHeaders::new().bearer(auth_token).json();
        self.http_client.put(&path, form, headers).await
    }

    async fn forgot_password<B>(&self, form: &B) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync,
    {
        self.http_client
            .post("/auth/recovery/request", form, RequestHeaders::new())
            .await
    }

    async fn validate_recovery_token(
        &self,
        recovery_token: &str,
    ) -> Result<ApiResponse, AppError> {
        let body = RecoveryTokenRequest {
            recovery_token: recovery_token.to_string(),
        };
        self.http_client
            .post("/auth/recovery/validate", &body, RequestHeaders::new())
            .await
    }

    async fn set_new_password<B>(
        &self,
        recovery_token: &str,
        form: &B,
    ) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync,
    {
        let body = with_recovery_token(form, recovery_token)?;
        self.http_client
            .post("/auth/recovery/reset", &body, RequestHeaders::new())
            .await
    }

    async fn does_admin_exist(&self) -> Result<ApiResponse, AppError> {
        self.http_client
            .get("/auth/users/admin", None, RequestHeaders::new())
            .await
    }

    async fn get_all_users(&self, auth_token: &str) -> Result<ApiResponse, AppError> {
        let headers = RequestHeaders::new().bearer(auth_token);
        self.http_client.get("/auth/users", None, headers).await
    }

    async fn request_invitation_token(
        &self,
        auth_token: &str,
        email: &str,
        role: &str,
    ) -> Result<ApiResponse, AppError> {
        let body = InvitationRequest {
            email: email.to_string(),
            role: role.to_string(),
        };
        let headers = RequestHeaders::new().bearer(auth_token);
        self.http_client.post("/auth/invite", &body, headers).await
    }

    async fn verify_invitation_token(&self, token: &str) -> Result<ApiResponse, AppError> {
        let body = InvitationVerifyRequest {
            token: token.to_string(),
        };
        self.http_client
            .post("/auth/invite/verify", &body, RequestHeaders::new())
            .await
    }
}

#[async_trait]
impl CheckService for Client {
    async fn get_checks_by_monitor(
        &self,
        auth_token: &str,
        monitor_id: &str,
        query: &ChecksQuery<'_>,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/checks/{monitor_id}");
        let params = query.to_query();
        let headers = RequestHeaders::new().bearer(auth_token);
        self.http_client.get(&path, Some(&params), headers).await
    }

    async fn get_checks_by_user(
        &self,
        auth_token: &str,
        user_id: &str,
        query: &ChecksQuery<'_>,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/checks/user/{user_id}");
        let params = query.to_query();
        let headers = RequestHeaders::new().bearer(auth_token);
        self.http_client.get(&path, Some(&params), headers).await
    }
}

/// Merges `recoveryToken` into the top-level object of `form`
fn with_recovery_token<B: Serialize>(form: &B, recovery_token: &str) -> Result<Value, AppError> {
    match serde_json::to_value(form)? {
        Value::Object(mut fields) => {
            fields.insert(
                "recoveryToken".to_string(),
                Value::String(recovery_token.to_string()),
            );
            Ok(Value::Object(fields))
        }
        other => Err(AppError::InvalidInput(format!(
            "password reset form must be a JSON object, got {other}"
        ))),
    }
}
