use crate::error::AppError;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use serde::Serialize;

/// Interface for users, password recovery and invitations
///
/// Registration, login, recovery and invitation verification are anonymous
/// calls and never carry an `Authorization` header.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Registers a new user
    async fn register_user<B>(&self, form: &B) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync;

    /// Logs in an existing user
    async fn login_user<B>(&self, form: &B) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync;

    /// Updates an existing user
    async fn update_user<B>(
        &self,
        auth_token: &str,
        user_id: &str,
        form: &B,
    ) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync;

    /// Requests a password recovery email
    async fn forgot_password<B>(&self, form: &B) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync;

    /// Checks that a recovery token is still valid
    async fn validate_recovery_token(&self, recovery_token: &str)
    -> Result<ApiResponse, AppError>;

    /// Sets a new password using a recovery token
    ///
    /// The form must serialize to a JSON object; `recoveryToken` is added to it.
    async fn set_new_password<B>(
        &self,
        recovery_token: &str,
        form: &B,
    ) -> Result<ApiResponse, AppError>
    where
        B: Serialize + Sync;

    /// Checks whether an admin account already exists
    async fn does_admin_exist(&self) -> Result<ApiResponse, AppError>;

    /// Lists all users
    async fn get_all_users(&self, auth_token: &str) -> Result<ApiResponse, AppError>;

    /// Issues an invitation for `email` with `role`
    async fn request_invitation_token(
        &self,
        auth_token: &str,
        email: &str,
        role: &str,
    ) -> Result<ApiResponse, AppError>;

    /// Verifies an invitation token
    async fn verify_invitation_token(&self, token: &str) -> Result<ApiResponse, AppError>;
}
