use dioxus::prelude::*;

/// Card container. `class` is appended to the base `card` class.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card {class}", {children} }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}

/// Labelled text input.
#[component]
pub fn Field(
    id: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "auth-field",
            label { class: "input-label", r#for: "{id}", "{label}" }
            input {
                class: "input",
                id: "{id}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
            }
        }
    }
}

/// Page title with an optional lead paragraph.
#[component]
pub fn PageHeader(title: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        div { class: "page-header",
            h2 { class: "page-title", "{title}" }
            if !subtitle.is_empty() {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}

/// Feature tile used on the role dashboards.
#[component]
pub fn DashboardCard(title: String, description: String, icon: Element) -> Element {
    rsx! {
        div { class: "dashboard-card",
            div { class: "dashboard-card-icon", {icon} }
            div {
                h3 { class: "dashboard-card-title", "{title}" }
                p { class: "dashboard-card-description", "{description}" }
            }
        }
    }
}
