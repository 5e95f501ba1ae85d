use async_trait::async_trait;
use serde_json::{Map, Value};
use shared_types::{AppError, AuthUser, ProfileRow, SignedIn, SignupMetadata};
use uuid::Uuid;

/// Contract for the hosted auth/data service.
///
/// The app talks to [`crate::rest::RestBackend`] in production; tests swap in
/// an in-memory implementation. Futures are not `Send` so the same trait works
/// in the browser.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Password sign-in. Bad credentials are `AuthenticationFailed`.
    async fn sign_in_with_password(&self, email: &str, password: &str)
        -> Result<SignedIn, AppError>;

    /// Create an account. `None` means the service wants the address
    /// confirmed before it hands out a session.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &SignupMetadata,
    ) -> Result<Option<SignedIn>, AppError>;

    /// The user the token belongs to, or `None` if the token is not accepted.
    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AppError>;

    /// The user's `profiles` row, or `None` if there is none.
    async fn fetch_profile(
        &self,
        access_token: &str,
        user_id: Uuid,
    ) -> Result<Option<ProfileRow>, AppError>;

    /// Merge `changes` into the user's `profiles` row.
    async fn update_profile(
        &self,
        access_token: &str,
        user_id: Uuid,
        changes: &Map<String, Value>,
    ) -> Result<(), AppError>;
}
