use crate::error::AppError;
use crate::model::requests::{MonitorsQuery, StatsQuery};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use serde::Serialize;

/// Interface for the monitor service
#[async_trait]
pub trait MonitorService: Send + Sync {
    /// Creates a new monitor
    ///
    /// # Arguments
    /// * `auth_token` - Bearer token of the current user
    /// * `monitor` - Monitor definition, sent as the JSON body
    async fn create_monitor<B>(&self, auth_token: &str, monitor: &B) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync;

    /// Gets all monitors of a user
    ///
    /// # Arguments
    /// * `auth_token` - Bearer token of the current user
    /// * `user_id` - Owner of the monitors
    /// * `query` - Optional filters: limit, types, status, sort order, normalization
    async fn get_monitors_by_user_id(
        &self,
        auth_token: &str,
        user_id: &str,
        query: &MonitorsQuery<'_>,
    ) -> Result<ApiResponse, AppError>;

    /// Gets aggregated statistics for a monitor
    async fn get_stats_by_monitor_id(
        &self,
        auth_token: &str,
        monitor_id: &str,
        query: &StatsQuery<'_>,
    ) -> Result<ApiResponse, AppError>;

    /// Updates a single monitor with the given fields
    async fn update_monitor<B>(
        &self,
        auth_token: &str,
        monitor_id: &str,
        updated_fields: &B,
    ) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync;

    /// Deletes a single monitor
    async fn delete_monitor_by_id(
        &self,
        auth_token: &str,
        monitor_id: &str,
    ) -> Result<ApiResponse, AppError>;

    /// Gets the TLS certificate expiry of a monitor's target
    async fn get_certificate_expiry(
        &self,
        auth_token: &str,
        monitor_id: &str,
    ) -> Result<ApiResponse, AppError>;
}
