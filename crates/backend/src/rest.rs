use crate::api::AuthBackend;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use shared_types::{AppError, AuthUser, BackendConfig, ProfileRow, SignedIn, SignupMetadata};
use uuid::Uuid;

const PROFILE_COLUMNS: &str = "name,role,institution";

/// [`AuthBackend`] over the Supabase-style HTTP API: GoTrue under
/// `/auth/v1`, PostgREST under `/rest/v1`.
#[derive(Clone, Debug)]
pub struct RestBackend {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: AuthUser,
}

impl TokenResponse {
    fn into_signed_in(self) -> SignedIn {
        let expires_at = self
            .expires_at
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
            .or_else(|| self.expires_in.map(|secs| Utc::now() + Duration::seconds(secs)));
        SignedIn {
            user: self.user,
            access_token: self.access_token,
            expires_at,
        }
    }
}

/// The error shapes GoTrue and PostgREST send back.
#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Pull a readable message out of an error response.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

fn network(err: reqwest::Error) -> AppError {
    AppError::network(format!("Backend request failed: {err}"))
}

impl RestBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url().to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header("apikey", &self.anon_key)
    }

    fn authed(&self, method: Method, path: &str, access_token: &str) -> RequestBuilder {
        self.request(method, path).bearer_auth(access_token)
    }
}

#[async_trait(?Send)]
impl AuthBackend for RestBackend {
    #[tracing::instrument(skip(self, password))]
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignedIn, AppError> {
        let response = self
            .request(Method::POST, "/auth/v1/token")
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(network)?;

        match response.status() {
            s if s.is_success() => {
                let token: TokenResponse = response.json().await.map_err(network)?;
                tracing::info!(user_id = %token.user.id, "Signed in");
                Ok(token.into_signed_in())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY => {
                let message = error_message(response).await;
                tracing::warn!(%message, "Sign-in rejected");
                Err(AppError::authentication(message))
            }
            status => {
                let message = error_message(response).await;
                tracing::error!(%status, %message, "Sign-in failed");
                Err(AppError::backend(message))
            }
        }
    }

    #[tracing::instrument(skip(self, password, metadata), fields(role = %metadata.role))]
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &SignupMetadata,
    ) -> Result<Option<SignedIn>, AppError> {
        let response = self
            .request(Method::POST, "/auth/v1/signup")
            .json(&json!({ "email": email, "password": password, "data": metadata }))
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
            return Err(AppError::validation(error_message(response).await));
        }
        if !status.is_success() {
            let message = error_message(response).await;
            tracing::error!(%status, %message, "Sign-up failed");
            return Err(AppError::backend(message));
        }

        let body: Value = response.json().await.map_err(network)?;
        if body.get("access_token").is_some() {
            let token: TokenResponse = serde_json::from_value(body)?;
            Ok(Some(token.into_signed_in()))
        } else {
            tracing::info!("Sign-up pending email confirmation");
            Ok(None)
        }
    }

    #[tracing::instrument(skip(self, access_token))]
    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AppError> {
        let response = self
            .authed(Method::GET, "/auth/v1/user", access_token)
            .send()
            .await
            .map_err(network)?;

        match response.status() {
            s if s.is_success() => Ok(Some(response.json().await.map_err(network)?)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status => {
                let message = error_message(response).await;
                tracing::error!(%status, %message, "Fetching current user failed");
                Err(AppError::backend(message))
            }
        }
    }

    #[tracing::instrument(skip(self, access_token))]
    async fn fetch_profile(
        &self,
        access_token: &str,
        user_id: Uuid,
    ) -> Result<Option<ProfileRow>, AppError> {
        let response = self
            .authed(Method::GET, "/rest/v1/profiles", access_token)
            .query(&[
                ("id", format!("eq.{user_id}")),
                ("select", PROFILE_COLUMNS.to_string()),
            ])
            .send()
            .await
            .map_err(network)?;

        match response.status() {
            s if s.is_success() => {
                let rows: Vec<ProfileRow> = response.json().await.map_err(network)?;
                Ok(rows.into_iter().next())
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(AppError::unauthorized(error_message(response).await))
            }
            status => {
                let message = error_message(response).await;
                tracing::error!(%status, %message, "Profile lookup failed");
                Err(AppError::backend(message))
            }
        }
    }

    #[tracing::instrument(skip(self, access_token, changes), fields(field_count = changes.len()))]
    async fn update_profile(
        &self,
        access_token: &str,
        user_id: Uuid,
        changes: &Map<String, Value>,
    ) -> Result<(), AppError> {
        let response = self
            .authed(Method::PATCH, "/rest/v1/profiles", access_token)
            .query(&[("id", format!("eq.{user_id}"))])
            .header("Prefer", "return=minimal")
            .json(changes)
            .send()
            .await
            .map_err(network)?;

        match response.status() {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(AppError::unauthorized(error_message(response).await))
            }
            status => {
                let message = error_message(response).await;
                tracing::error!(%status, %message, "Profile update failed");
                Err(AppError::backend(message))
            }
        }
    }
}
