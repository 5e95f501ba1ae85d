use crate::auth::{use_auth, use_services};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;
use shared_types::{FieldKind, ProfileField, ProfileFormState, Role};

/// Fields grouped under their section headings, in table order.
fn sections(form: &ProfileFormState) -> Vec<(&'static str, Vec<(&'static ProfileField, String)>)> {
    let mut groups: Vec<(&'static str, Vec<(&'static ProfileField, String)>)> = Vec::new();
    for (field, value) in form.values() {
        match groups.last_mut() {
            Some((heading, fields)) if *heading == field.section => {
                fields.push((field, value.to_string()));
            }
            _ => groups.push((field.section, vec![(field, value.to_string())])),
        }
    }
    groups
}

/// The role's profile fields, rendered from the form state.
#[component]
pub fn ProfileFields(
    form: ProfileFormState,
    #[props(default)] on_change: EventHandler<(&'static str, String)>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        for (heading, fields) in sections(&form) {
            div { key: "{heading}", class: "profile-section",
                h3 { class: "profile-section-title", "{heading}" }
                div { class: "profile-grid",
                    for (field, value) in fields {
                        div {
                            key: "{field.key}",
                            class: if field.kind == FieldKind::Textarea { "profile-field wide" } else { "profile-field" },
                            label { class: "input-label", r#for: "profile-{field.key}", "{field.label}" }
                            if field.kind == FieldKind::Textarea {
                                textarea {
                                    id: "profile-{field.key}",
                                    class: "input",
                                    rows: "3",
                                    value: value,
                                    disabled: disabled,
                                    oninput: move |e: FormEvent| on_change.call((field.key, e.value())),
                                }
                            } else {
                                input {
                                    id: "profile-{field.key}",
                                    class: "input",
                                    r#type: "text",
                                    value: value,
                                    disabled: disabled,
                                    oninput: move |e: FormEvent| on_change.call((field.key, e.value())),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// "Complete Your Profile" dialog. Save keeps the dialog open on failure.
#[component]
pub fn ProfileModal(role: Role, on_close: EventHandler<()>) -> Element {
    let services = use_services();
    let auth = use_auth();
    let mut form = use_signal(|| ProfileFormState::new(role));
    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_save = move |evt: FormEvent| {
        let services = services.clone();
        async move {
            evt.prevent_default();
            let Some(session) = auth.valid_session() else {
                error_msg.set(Some("Your session has expired. Please sign in again.".into()));
                return;
            };

            saving.set(true);
            error_msg.set(None);
            let current = form.read().clone();
            match backend::auth::save_profile(&*services.backend, &session, &current).await {
                Ok(()) => {
                    saving.set(false);
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Profile save failed");
                    error_msg.set(Some(e.friendly_message()));
                    saving.set(false);
                }
            }
        }
    };

    let handle_change = move |(key, value): (&'static str, String)| {
        if let Err(e) = form.write().set(key, value) {
            tracing::warn!(error = %e, "Ignoring unknown profile field");
        }
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                div { class: "modal-header",
                    div {
                        h2 { class: "modal-title", "Complete Your Profile" }
                        p { class: "modal-subtitle", "{role.display_name()} details help us tailor your workspace." }
                    }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        Icon::<LdX> { icon: LdX, width: 18, height: 18 }
                    }
                }

                form { class: "modal-body", onsubmit: handle_save,
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    ProfileFields {
                        form: form(),
                        on_change: handle_change,
                        disabled: saving(),
                    }

                    div { class: "modal-actions",
                        button {
                            class: "button secondary",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            class: "button",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save Profile" }
                        }
                    }
                }
            }
        }
    }
}
