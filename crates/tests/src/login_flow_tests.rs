use crate::common::{self, FakeBackend, PASSWORD};
use backend::auth;
use backend::SessionStore;
use pretty_assertions::assert_eq;
use shared_types::{navigate, AppErrorKind, Page, Resolution, Role, TOKEN_KEY, USER_KEY};

#[tokio::test]
async fn test_researcher_sign_in_lands_on_researcher_home() {
    let backend = FakeBackend::new().with_account("ada@example.com", "Ada Lovelace", "researcher");
    let (storage, store) = common::memory_store();

    let session = auth::sign_in(&backend, &store, "ada@example.com", PASSWORD)
        .await
        .unwrap();

    assert_eq!(session.role(), Role::Researcher);
    assert_eq!(session.role().home_path(), "/researcher");
    assert_eq!(session.user.id, backend.user_id("ada@example.com"));
    assert!(storage.contains(TOKEN_KEY));
    assert!(storage.contains(USER_KEY));
    assert_eq!(store.get(), Some(session));
}

#[tokio::test]
async fn test_mentor_sign_in_lands_on_mentor_home() {
    let backend = FakeBackend::new().with_account("m@example.com", "Mary Mentor", "mentor");
    let (_storage, store) = common::memory_store();

    let session = auth::sign_in(&backend, &store, "m@example.com", PASSWORD)
        .await
        .unwrap();

    assert_eq!(session.role().home_path(), "/mentor");
    assert_eq!(
        navigate(session.role().home_path(), Some(&session)),
        Resolution::Render(Page::MentorDashboard)
    );
}

#[tokio::test]
async fn test_sign_in_trims_email() {
    let backend = FakeBackend::new().with_account("s@example.com", "Sam Student", "student");
    let (_storage, store) = common::memory_store();

    let session = auth::sign_in(&backend, &store, "  s@example.com ", PASSWORD)
        .await
        .unwrap();
    assert_eq!(session.role(), Role::Student);
}

#[tokio::test]
async fn test_unknown_role_is_invalid_role_and_stores_nothing() {
    let backend = FakeBackend::new().with_account("x@example.com", "Xavier", "admin");
    let (storage, store) = common::memory_store();

    let err = auth::sign_in(&backend, &store, "x@example.com", PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InvalidRole);
    assert!(storage.is_empty());
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn test_role_matching_is_exact() {
    let backend = FakeBackend::new().with_account("t@example.com", "Tess", "Teacher");
    let (_storage, store) = common::memory_store();

    let err = auth::sign_in(&backend, &store, "t@example.com", PASSWORD)
        .await
        .unwrap_err();
    assert!(err.is(AppErrorKind::InvalidRole));

    backend.set_role("t@example.com", "teacher");
    let session = auth::sign_in(&backend, &store, "t@example.com", PASSWORD)
        .await
        .unwrap();
    assert_eq!(session.role(), Role::Teacher);
}

#[tokio::test]
async fn test_missing_profile_is_profile_not_found() {
    let backend = FakeBackend::new().with_account_without_profile("ghost@example.com");
    let (storage, store) = common::memory_store();

    let err = auth::sign_in(&backend, &store, "ghost@example.com", PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ProfileNotFound);
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_wrong_password_is_authentication_failure() {
    let backend = FakeBackend::new().with_account("ada@example.com", "Ada Lovelace", "researcher");
    let (storage, store) = common::memory_store();

    let err = auth::sign_in(&backend, &store, "ada@example.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::AuthenticationFailed);
    assert_eq!(err.friendly_message(), "Invalid login credentials");
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_empty_credentials_never_reach_backend() {
    let backend = FakeBackend::new();
    let (_storage, store) = common::memory_store();

    for (email, password) in [("", PASSWORD), ("ada@example.com", ""), ("   ", "x")] {
        let err = auth::sign_in(&backend, &store, email, password)
            .await
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::AuthenticationFailed, "{email:?}");
    }
}

#[tokio::test]
async fn test_failed_sign_in_keeps_previous_session() {
    let backend = FakeBackend::new()
        .with_account("ada@example.com", "Ada Lovelace", "researcher")
        .with_account("x@example.com", "Xavier", "admin");
    let (_storage, store) = common::memory_store();

    let first = auth::sign_in(&backend, &store, "ada@example.com", PASSWORD)
        .await
        .unwrap();
    let _ = auth::sign_in(&backend, &store, "x@example.com", PASSWORD).await;

    assert_eq!(store.get(), Some(first));
}
