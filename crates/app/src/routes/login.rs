use crate::auth::{use_auth, use_services};
use crate::components::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Field};
use crate::routes::{route_for, Route};
use dioxus::prelude::*;
use shared_types::{AppError, AppErrorKind};

/// Copy shown under the login form for a failed sign-in.
pub fn login_error_message(err: &AppError) -> String {
    match err.kind {
        AppErrorKind::InvalidRole => {
            "Your account has a role Veritas does not recognise. Please contact support.".to_string()
        }
        AppErrorKind::ProfileNotFound => {
            "Your account has no Veritas profile yet. Please contact support.".to_string()
        }
        _ => err.friendly_message(),
    }
}

/// Email/password sign-in. A signed-in visitor is sent to their dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if let Some(session) = auth.valid_session() {
        navigator().replace(route_for(session.role().home_path()));
    }

    let handle_login = move |evt: FormEvent| {
        let services = services.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            match backend::auth::sign_in(&*services.backend, &*services.store, &email(), &password())
                .await
            {
                Ok(session) => {
                    let home = session.role().home_path();
                    auth.set_session(session);
                    navigator().push(route_for(home));
                }
                Err(e) => {
                    tracing::warn!(kind = %e.kind, "Sign-in failed");
                    error_msg.set(Some(login_error_message(&e)));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Welcome back to Veritas" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        Field {
                            id: "email",
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@university.edu",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Field {
                            id: "password",
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Signup {}, "Create one" }
                    }
                }
            }
        }
    }
}
