use crate::auth::{use_auth, use_services};
use crate::components::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Field};
use crate::routes::{route_for, Route};
use backend::auth::{SignupOutcome, SignupRequest, MIN_PASSWORD_LEN};
use dioxus::prelude::*;
use shared_types::{Role, ALL_ROLES};

/// Account creation: pick a role, then name, email and password.
#[component]
pub fn Signup() -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let mut role = use_signal(|| Role::Student);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut institution = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut confirmation_sent = use_signal(|| false);

    if let Some(session) = auth.valid_session() {
        navigator().replace(route_for(session.role().home_path()));
    }

    let handle_signup = move |evt: FormEvent| {
        let services = services.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            let request = SignupRequest {
                name: name(),
                email: email(),
                password: password(),
                role: role(),
                institution: Some(institution()),
            };
            match backend::auth::sign_up(&*services.backend, &*services.store, &request).await {
                Ok(SignupOutcome::SignedIn(session)) => {
                    let home = session.role().home_path();
                    auth.set_session(session);
                    navigator().push(route_for(home));
                }
                Ok(SignupOutcome::ConfirmationPending) => confirmation_sent.set(true),
                Err(e) => {
                    tracing::warn!(kind = %e.kind, "Sign-up failed");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    if confirmation_sent() {
        let sent_to = email();
        return rsx! {
            div { class: "auth-page",
                Card { class: "auth-card",
                    CardHeader {
                        CardTitle { "Check your inbox" }
                        CardDescription {
                            "We sent a confirmation link to {sent_to}. Follow it, then sign in."
                        }
                    }
                    CardFooter {
                        Link { to: Route::Login {}, class: "auth-submit button", "Back to sign in" }
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card wide",
                CardHeader {
                    CardTitle { "Join Veritas" }
                    CardDescription { "Choose how you will use the platform" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    div { class: "role-cards",
                        for option in ALL_ROLES.iter().copied() {
                            button {
                                key: "{option}",
                                r#type: "button",
                                class: if role() == option { "role-card selected" } else { "role-card" },
                                onclick: move |_| role.set(option),
                                h4 { "{option.display_name()}" }
                                p { "{option.tagline()}" }
                            }
                        }
                    }

                    form { onsubmit: handle_signup,
                        Field {
                            id: "name",
                            label: "Full Name",
                            placeholder: "Ada Lovelace",
                            value: name(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
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
                            placeholder: "At least {MIN_PASSWORD_LEN} characters",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Field {
                            id: "institution",
                            label: "Institution (optional)",
                            value: institution(),
                            on_input: move |e: FormEvent| institution.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
