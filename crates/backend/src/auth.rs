//! Sign-in, sign-up, sign-out and profile flows.
//!
//! Each flow takes the backend and the session store as arguments so the UI
//! and the tests can hand in whatever implementations they hold.

use crate::api::AuthBackend;
use crate::session::SessionStore;
use shared_types::{
    AppError, AppErrorKind, Profile, ProfileFormState, Role, Session, SignedIn, SignupMetadata,
};

/// Shortest password the sign-up form accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Outcome of [`sign_up`].
#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    /// The account is live and the session is stored.
    SignedIn(Session),
    /// The service sent a confirmation email; no session yet.
    ConfirmationPending,
}

/// Fields collected by the sign-up form.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub institution: Option<String>,
}

/// Look up the profile for a fresh sign-in, validate its role and persist the
/// session.
async fn establish_session(
    backend: &(impl AuthBackend + ?Sized),
    store: &(impl SessionStore + ?Sized),
    signed_in: SignedIn,
) -> Result<Session, AppError> {
    let row = backend
        .fetch_profile(&signed_in.access_token, signed_in.user.id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(user_id = %signed_in.user.id, "Authenticated user has no profile row");
            AppError::profile_not_found()
        })?;

    let profile = Profile::try_from(row).inspect_err(|e| {
        tracing::error!(user_id = %signed_in.user.id, error = %e, "Profile has an unknown role");
    })?;

    let session = Session {
        access_token: signed_in.access_token,
        user: signed_in.user,
        profile,
        expires_at: signed_in.expires_at,
    };
    store.set(&session)?;
    tracing::info!(user_id = %session.user.id, role = %session.role(), "Session established");
    Ok(session)
}

/// Password sign-in.
///
/// Fails with `AuthenticationFailed` whenever the password grant does not
/// produce a user, whatever the cause, `ProfileNotFound` when the account has
/// no profile row and `InvalidRole` when the row's role
/// is unknown. Nothing is stored unless every step succeeds. On success the
/// caller navigates to `session.role().home_path()`.
pub async fn sign_in(
    backend: &(impl AuthBackend + ?Sized),
    store: &(impl SessionStore + ?Sized),
    email: &str,
    password: &str,
) -> Result<Session, AppError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::authentication("Email and password are required"));
    }

    let signed_in = backend
        .sign_in_with_password(email, password)
        .await
        .map_err(|e| {
            if e.is(AppErrorKind::AuthenticationFailed) {
                return e;
            }
            tracing::warn!(error = %e, "Sign-in request failed");
            AppError::authentication("Sign-in failed. Please try again.")
        })?;
    establish_session(backend, store, signed_in).await
}

/// Create an account and, when the service allows it, sign straight in.
pub async fn sign_up(
    backend: &(impl AuthBackend + ?Sized),
    store: &(impl SessionStore + ?Sized),
    request: &SignupRequest,
) -> Result<SignupOutcome, AppError> {
    let name = request.name.trim();
    let email = request.email.trim();
    if name.is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::validation("A valid email address is required"));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let metadata = SignupMetadata {
        name: name.to_string(),
        role: request.role,
        institution: request
            .institution
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    };

    match backend.sign_up(email, &request.password, &metadata).await? {
        Some(signed_in) => Ok(SignupOutcome::SignedIn(
            establish_session(backend, store, signed_in).await?,
        )),
        None => Ok(SignupOutcome::ConfirmationPending),
    }
}

/// Drop the stored session. Local only; never waits on the network.
pub fn sign_out(store: &(impl SessionStore + ?Sized)) {
    store.clear();
    tracing::info!("Signed out");
}

/// The stored session if it is still valid. An expired session is cleared.
pub fn current_session(store: &(impl SessionStore + ?Sized)) -> Option<Session> {
    let session = store.get()?;
    if session.is_valid() {
        Some(session)
    } else {
        tracing::info!("Stored session expired");
        store.clear();
        None
    }
}

/// Re-check the session with the backend and fetch the current profile.
///
/// `Unauthorized` means the token is no longer accepted, or the profile now
/// carries a different role than the session, and the caller should sign the
/// user out. A changed name or institution is written back to the store.
pub async fn load_profile(
    backend: &(impl AuthBackend + ?Sized),
    store: &(impl SessionStore + ?Sized),
    session: &Session,
) -> Result<Profile, AppError> {
    let user = backend
        .get_user(&session.access_token)
        .await?
        .filter(|u| u.id == session.user.id)
        .ok_or_else(|| AppError::unauthorized("Session is no longer valid"))?;

    let row = backend
        .fetch_profile(&session.access_token, user.id)
        .await?
        .ok_or_else(AppError::profile_not_found)?;
    let profile = Profile::try_from(row)?;

    if profile.role != session.role() {
        tracing::warn!(
            user_id = %session.user.id,
            session_role = %session.role(),
            profile_role = %profile.role,
            "Profile role changed during session"
        );
        return Err(AppError::unauthorized("Role changed; sign in again"));
    }

    if profile != session.profile {
        let mut refreshed = session.clone();
        refreshed.profile = profile.clone();
        if let Err(e) = store.set(&refreshed) {
            tracing::warn!(error = %e, "Could not refresh cached profile");
        }
    }
    Ok(profile)
}

/// Submit the profile-completion form for the signed-in user.
pub async fn save_profile(
    backend: &(impl AuthBackend + ?Sized),
    session: &Session,
    form: &ProfileFormState,
) -> Result<(), AppError> {
    if form.role() != session.role() {
        return Err(AppError::validation(format!(
            "A {} form cannot be saved for a {} profile",
            form.role(),
            session.role()
        )));
    }
    let changes = form.to_update();
    if changes.is_empty() {
        return Err(AppError::validation("Fill in at least one field before saving"));
    }

    backend
        .update_profile(&session.access_token, session.user.id, &changes)
        .await?;
    tracing::info!(user_id = %session.user.id, fields = changes.len(), "Profile saved");
    Ok(())
}
