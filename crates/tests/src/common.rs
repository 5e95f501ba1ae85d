use async_trait::async_trait;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use backend::{AuthBackend, MemoryStorage, StorageSessionStore};
use chrono::{Duration, Utc};
use serde_json::{json, Map, Value};
use shared_types::{
    AppError, AuthUser, BackendConfig, Profile, ProfileRow, Role, Session, SignedIn,
    SignupMetadata,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const PASSWORD: &str = "correct-horse";

struct Account {
    user: AuthUser,
    password: String,
    token: String,
    profile: Option<ProfileRow>,
}

/// In-memory stand-in for the hosted auth and profile service.
#[derive(Default)]
pub struct FakeBackend {
    accounts: RefCell<Vec<Account>>,
    revoked: RefCell<Vec<String>>,
    /// Every accepted profile update, in order.
    pub updates: RefCell<Vec<(Uuid, Map<String, Value>)>>,
    pub fail_updates: Cell<bool>,
    pub require_confirmation: Cell<bool>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account whose profile row carries `role` verbatim.
    pub fn with_account(self, email: &str, name: &str, role: &str) -> Self {
        self.insert(
            email,
            Some(ProfileRow {
                name: name.to_string(),
                role: role.to_string(),
                institution: None,
            }),
        );
        self
    }

    /// Add an account with no profile row at all.
    pub fn with_account_without_profile(self, email: &str) -> Self {
        self.insert(email, None);
        self
    }

    fn insert(&self, email: &str, profile: Option<ProfileRow>) -> AuthUser {
        let user = AuthUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
        };
        self.accounts.borrow_mut().push(Account {
            user: user.clone(),
            password: PASSWORD.to_string(),
            token: format!("token-{}", user.id),
            profile,
        });
        user
    }

    pub fn user_id(&self, email: &str) -> Uuid {
        self.accounts
            .borrow()
            .iter()
            .find(|a| a.user.email == email)
            .map(|a| a.user.id)
            .unwrap_or_else(|| panic!("no account for {email}"))
    }

    /// Stop accepting `token`, as if it had been revoked server-side.
    pub fn revoke(&self, token: &str) {
        self.revoked.borrow_mut().push(token.to_string());
    }

    /// Overwrite the role column of an existing profile row.
    pub fn set_role(&self, email: &str, role: &str) {
        for account in self.accounts.borrow_mut().iter_mut() {
            if account.user.email == email {
                if let Some(profile) = account.profile.as_mut() {
                    profile.role = role.to_string();
                }
            }
        }
    }

    /// Overwrite the name column of an existing profile row.
    pub fn rename(&self, email: &str, name: &str) {
        for account in self.accounts.borrow_mut().iter_mut() {
            if account.user.email == email {
                if let Some(profile) = account.profile.as_mut() {
                    profile.name = name.to_string();
                }
            }
        }
    }

    fn is_revoked(&self, token: &str) -> bool {
        self.revoked.borrow().iter().any(|t| t == token)
    }

    fn signed_in(account: &Account) -> SignedIn {
        SignedIn {
            user: account.user.clone(),
            access_token: account.token.clone(),
            expires_at: Some(Utc::now() + Duration::hours(1)),
        }
    }
}

#[async_trait(?Send)]
impl AuthBackend for FakeBackend {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignedIn, AppError> {
        self.accounts
            .borrow()
            .iter()
            .find(|a| a.user.email == email && a.password == password)
            .map(Self::signed_in)
            .ok_or_else(|| AppError::authentication("Invalid login credentials"))
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &SignupMetadata,
    ) -> Result<Option<SignedIn>, AppError> {
        if self.accounts.borrow().iter().any(|a| a.user.email == email) {
            return Err(AppError::validation("User already registered"));
        }
        let user = AuthUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
        };
        let account = Account {
            user,
            password: password.to_string(),
            token: format!("token-{email}"),
            profile: Some(ProfileRow {
                name: metadata.name.clone(),
                role: metadata.role.as_str().to_string(),
                institution: metadata.institution.clone(),
            }),
        };
        let signed_in = Self::signed_in(&account);
        self.accounts.borrow_mut().push(account);

        if self.require_confirmation.get() {
            Ok(None)
        } else {
            Ok(Some(signed_in))
        }
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AppError> {
        if self.is_revoked(access_token) {
            return Ok(None);
        }
        Ok(self
            .accounts
            .borrow()
            .iter()
            .find(|a| a.token == access_token)
            .map(|a| a.user.clone()))
    }

    async fn fetch_profile(
        &self,
        access_token: &str,
        user_id: Uuid,
    ) -> Result<Option<ProfileRow>, AppError> {
        if self.is_revoked(access_token) {
            return Err(AppError::unauthorized("JWT expired"));
        }
        Ok(self
            .accounts
            .borrow()
            .iter()
            .find(|a| a.user.id == user_id)
            .and_then(|a| a.profile.clone()))
    }

    async fn update_profile(
        &self,
        access_token: &str,
        user_id: Uuid,
        changes: &Map<String, Value>,
    ) -> Result<(), AppError> {
        if self.is_revoked(access_token) {
            return Err(AppError::unauthorized("JWT expired"));
        }
        if self.fail_updates.get() {
            return Err(AppError::backend("database unavailable"));
        }
        self.updates.borrow_mut().push((user_id, changes.clone()));
        Ok(())
    }
}

/// A session store over fresh in-memory storage, plus a handle on the storage
/// for asserting on raw keys.
pub fn memory_store() -> (MemoryStorage, StorageSessionStore<MemoryStorage>) {
    let storage = MemoryStorage::new();
    (storage.clone(), StorageSessionStore::new(storage))
}

/// A valid session for `role` that no backend knows about.
pub fn session_for(role: Role) -> Session {
    Session {
        access_token: format!("token-{}", role.as_str()),
        user: AuthUser {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", role.as_str()),
        },
        profile: Profile {
            name: "Grace Hopper".into(),
            role,
            institution: None,
        },
        expires_at: Some(Utc::now() + Duration::hours(1)),
    }
}

// Mock of the service's HTTP API for exercising `RestBackend`.

pub const ANON_KEY: &str = "anon-key";
pub const ADA_EMAIL: &str = "ada@example.com";
pub const ADA_TOKEN: &str = "tok-ada";
pub const ADA_ID: &str = "6f1c1c4e-0c57-4c5b-9b8e-2a6f0d6a0b11";
pub const CONFIRM_EMAIL: &str = "new@confirm.example";
pub const TAKEN_EMAIL: &str = "taken@example.com";
/// Sign-in for this address answers 503.
pub const OUTAGE_EMAIL: &str = "outage@example.com";

/// What the mock saw.
#[derive(Debug, Default)]
pub struct Recorded {
    pub api_keys: Vec<Option<String>>,
    pub patches: Vec<RecordedPatch>,
    pub signups: Vec<Value>,
}

#[derive(Debug, Clone)]
pub struct RecordedPatch {
    pub id_filter: Option<String>,
    pub prefer: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct MockState {
    pub recorded: Arc<Mutex<Recorded>>,
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Record the apikey and reject the request if it is wrong.
fn check_api_key(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    let key = header(headers, "apikey");
    let ok = key.as_deref() == Some(ANON_KEY);
    state.recorded.lock().unwrap().api_keys.push(key);
    if ok {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "No API key found in request" })),
        )
            .into_response())
    }
}

fn bearer_is_ada(headers: &HeaderMap) -> bool {
    header(headers, "authorization").as_deref() == Some(format!("Bearer {ADA_TOKEN}").as_str())
}

fn ada_user() -> Value {
    json!({ "id": ADA_ID, "email": ADA_EMAIL, "aud": "authenticated" })
}

async fn token(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(rejection) = check_api_key(&state, &headers) {
        return rejection;
    }
    if query.get("grant_type").map(String::as_str) != Some("password") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "unsupported_grant_type" })),
        )
            .into_response();
    }
    if body["email"] == OUTAGE_EMAIL {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "message": "upstream unavailable" })),
        )
            .into_response();
    }
    if body["email"] == ADA_EMAIL && body["password"] == PASSWORD {
        Json(json!({
            "access_token": ADA_TOKEN,
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": ada_user(),
        }))
        .into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials",
            })),
        )
            .into_response()
    }
}

async fn signup(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(rejection) = check_api_key(&state, &headers) {
        return rejection;
    }
    state.recorded.lock().unwrap().signups.push(body.clone());

    match body["email"].as_str() {
        Some(TAKEN_EMAIL) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "code": 422, "msg": "User already registered" })),
        )
            .into_response(),
        Some(CONFIRM_EMAIL) => Json(json!({
            "id": Uuid::new_v4(),
            "email": CONFIRM_EMAIL,
            "confirmation_sent_at": Utc::now(),
        }))
        .into_response(),
        Some(email) => Json(json!({
            "access_token": "tok-new",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": { "id": Uuid::new_v4(), "email": email },
        }))
        .into_response(),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "msg": "email is required" })),
        )
            .into_response(),
    }
}

async fn user(State(state): State<MockState>, headers: HeaderMap) -> Response {
    if let Err(rejection) = check_api_key(&state, &headers) {
        return rejection;
    }
    if bearer_is_ada(&headers) {
        Json(ada_user()).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "msg": "invalid JWT" })),
        )
            .into_response()
    }
}

async fn profiles(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Err(rejection) = check_api_key(&state, &headers) {
        return rejection;
    }
    if !bearer_is_ada(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "JWT expired" })),
        )
            .into_response();
    }
    if query.get("select").map(String::as_str) != Some("name,role,institution") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "unexpected select" })),
        )
            .into_response();
    }
    let rows = if query.get("id").map(String::as_str) == Some(format!("eq.{ADA_ID}").as_str()) {
        json!([{ "name": "Ada Lovelace", "role": "researcher", "institution": "Analytical Society" }])
    } else {
        json!([])
    };
    Json(rows).into_response()
}

async fn update_profile(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(rejection) = check_api_key(&state, &headers) {
        return rejection;
    }
    if !bearer_is_ada(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "JWT expired" })),
        )
            .into_response();
    }
    state.recorded.lock().unwrap().patches.push(RecordedPatch {
        id_filter: query.get("id").cloned(),
        prefer: header(&headers, "prefer"),
        body,
    });
    StatusCode::NO_CONTENT.into_response()
}

/// Serve the mock on an ephemeral port. Returns the backend config pointing at
/// it and the shared record of what it received.
pub async fn spawn_mock_backend() -> (BackendConfig, MockState) {
    let state = MockState::default();
    let app = Router::new()
        .route("/auth/v1/token", post(token))
        .route("/auth/v1/signup", post(signup))
        .route("/auth/v1/user", get(user))
        .route("/rest/v1/profiles", get(profiles).patch(update_profile))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Mock backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Mock backend stopped");
    });

    let config = BackendConfig {
        url: format!("http://{addr}/"),
        anon_key: ANON_KEY.to_string(),
    };
    (config, state)
}
