use crate::error::AppError;
use crate::model::requests::ChecksQuery;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the check service
#[async_trait]
pub trait CheckService: Send + Sync {
    /// Gets the checks recorded for a monitor
    async fn get_checks_by_monitor(
        &self,
        auth_token: &str,
        monitor_id: &str,
        query: &ChecksQuery<'_>,
    ) -> Result<ApiResponse, AppError>;

    /// Gets the checks recorded for every monitor of a user
    async fn get_checks_by_user(
        &self,
        auth_token: &str,
        user_id: &str,
        query: &ChecksQuery<'_>,
    ) -> Result<ApiResponse, AppError>;
}
