use crate::auth::{use_auth, use_services};
use crate::components::ProfileModal;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdSearch};
use dioxus_free_icons::Icon;
use shared_types::{AppError, AppErrorKind, LoadState, Loadable, Profile};

/// Top bar of the dashboard shell: search, notifications and the identity
/// chip that opens the profile dialog.
///
/// The profile is fetched once on mount and a refreshed name or institution is
/// pushed into [`AuthState`](crate::auth::AuthState). The load is ticketed so a result that
/// lands after the bar is gone, or after a newer load started, is dropped.
#[component]
pub fn TopNav() -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let mut profile = use_signal(Loadable::<Profile>::new);
    let mut modal_open = use_signal(|| false);

    use_hook(|| {
        let ticket = profile.write().start();
        let session = auth.session.peek().clone();
        spawn(async move {
            let result = match &session {
                Some(session) => {
                    backend::auth::load_profile(&*services.backend, &*services.store, session)
                        .await
                }
                None => Err(AppError::unauthorized("No session")),
            };

            if result.as_ref().is_err_and(|e| e.is(AppErrorKind::Unauthorized)) {
                tracing::info!("Session rejected by backend, signing out");
                services.sign_out();
                auth.clear_auth();
                navigator().replace(Route::Login {});
                return;
            }
            let refreshed = match (&result, session) {
                (Ok(fresh), Some(mut current)) if *fresh != current.profile => {
                    current.profile = fresh.clone();
                    Some(current)
                }
                (Err(e), _) => {
                    tracing::warn!(error = %e, "Profile load failed");
                    None
                }
                _ => None,
            };
            let applied = profile.write().finish(ticket, result);
            if let (true, Some(current)) = (applied, refreshed) {
                auth.set_session(current);
            }
        });
    });

    use_drop(move || {
        if let Ok(mut load) = profile.try_write() {
            load.cancel();
        }
    });

    let state = profile.read().state().clone();
    let role = auth.role();

    rsx! {
        header { class: "top-nav",
            div { class: "top-nav-search",
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                input {
                    class: "top-nav-search-input",
                    r#type: "search",
                    placeholder: "Search...",
                }
            }

            div { class: "top-nav-actions",
                button { class: "top-nav-icon", r#type: "button",
                    Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                }

                match state {
                    LoadState::Ready(p) => rsx! {
                        button {
                            class: "top-nav-identity",
                            r#type: "button",
                            onclick: move |_| modal_open.set(true),
                            div { class: "avatar", "{p.initials()}" }
                            div { class: "top-nav-identity-text",
                                p { class: "top-nav-name", "{p.name}" }
                                p { class: "top-nav-role", "{p.role_label()}" }
                            }
                        }
                    },
                    LoadState::Failed(err) => rsx! {
                        div { class: "top-nav-identity error", title: "{err}",
                            div { class: "avatar", "!" }
                            p { class: "top-nav-role", "{err.friendly_message()}" }
                        }
                    },
                    _ => rsx! {
                        div { class: "top-nav-identity loading",
                            div { class: "avatar skeleton" }
                            p { class: "top-nav-role", "Loading..." }
                        }
                    },
                }
            }
        }

        if modal_open() {
            if let Some(role) = role {
                ProfileModal {
                    role,
                    on_close: move |_| modal_open.set(false),
                }
            }
        }
    }
}
