use crate::components::PageHeader;
use crate::routes::route_for;
use dioxus::prelude::*;
use shared_types::{active_link, Role};

/// A sub-page under a role's dashboard, e.g. `/student/vault`.
#[component]
pub fn SectionPage(role: Role, segments: Vec<String>) -> Element {
    let path = format!("{}/{}", role.home_path(), segments.join("/"));

    match active_link(role, &path) {
        Some(link) => rsx! {
            PageHeader { title: "{link.label}", subtitle: "{role.tagline()}" }
            div { class: "empty-state",
                p { "Nothing here yet." }
            }
        },
        None => rsx! {
            PageHeader { title: "Section not found" }
            div { class: "empty-state",
                p {
                    "There is no page at "
                    code { "{path}" }
                    "."
                }
                Link { to: route_for(role.home_path()), class: "button", "Back to dashboard" }
            }
        },
    }
}
