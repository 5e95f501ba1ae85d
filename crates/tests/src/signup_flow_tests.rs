use crate::common::{self, FakeBackend};
use backend::auth::{self, SignupOutcome, SignupRequest};
use backend::SessionStore;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role};

fn request(email: &str, role: Role) -> SignupRequest {
    SignupRequest {
        name: "Nora Newcomer".into(),
        email: email.into(),
        password: "hunter22".into(),
        role,
        institution: Some("  ".into()),
    }
}

#[tokio::test]
async fn test_sign_up_signs_in_with_chosen_role() {
    let backend = FakeBackend::new();
    let (_storage, store) = common::memory_store();

    let outcome = auth::sign_up(&backend, &store, &request("nora@example.com", Role::Teacher))
        .await
        .unwrap();

    let SignupOutcome::SignedIn(session) = outcome else {
        panic!("expected a signed-in outcome");
    };
    assert_eq!(session.role(), Role::Teacher);
    assert_eq!(session.profile.name, "Nora Newcomer");
    assert_eq!(session.profile.institution, None);
    assert_eq!(store.get(), Some(session));
}

#[tokio::test]
async fn test_sign_up_pending_confirmation_stores_nothing() {
    let backend = FakeBackend::new();
    backend.require_confirmation.set(true);
    let (storage, store) = common::memory_store();

    let outcome = auth::sign_up(&backend, &store, &request("nora@example.com", Role::Student))
        .await
        .unwrap();

    assert_eq!(outcome, SignupOutcome::ConfirmationPending);
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_sign_up_rejects_short_password() {
    let backend = FakeBackend::new();
    let (_storage, store) = common::memory_store();
    let mut req = request("nora@example.com", Role::Student);
    req.password = "abc".into();

    let err = auth::sign_up(&backend, &store, &req).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Validation);
}

#[tokio::test]
async fn test_sign_up_rejects_blank_name_and_bad_email() {
    let backend = FakeBackend::new();
    let (_storage, store) = common::memory_store();

    let mut no_name = request("nora@example.com", Role::Student);
    no_name.name = "   ".into();
    assert!(auth::sign_up(&backend, &store, &no_name)
        .await
        .unwrap_err()
        .is(AppErrorKind::Validation));

    let bad_email = request("not-an-email", Role::Student);
    assert!(auth::sign_up(&backend, &store, &bad_email)
        .await
        .unwrap_err()
        .is(AppErrorKind::Validation));
}

#[tokio::test]
async fn test_duplicate_email_is_reported() {
    let backend = FakeBackend::new().with_account("nora@example.com", "Nora", "student");
    let (_storage, store) = common::memory_store();

    let err = auth::sign_up(&backend, &store, &request("nora@example.com", Role::Student))
        .await
        .unwrap_err();
    assert_eq!(err.message, "User already registered");
}
