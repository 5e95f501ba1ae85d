use crate::components::{DashboardCard, PageHeader};
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBookOpen, LdFileText, LdFolder, LdMessageSquare, LdSearch, LdUserCheck,
};
use dioxus_free_icons::Icon;

#[component]
pub fn ResearcherDashboard() -> Element {
    rsx! {
        PageHeader {
            title: "Research Overview",
            subtitle: "Your papers, hypotheses and open discussions in one place.",
        }

        div { class: "dashboard-grid",
            Link { to: Route::ResearchRepository {}, class: "dashboard-card-link",
                DashboardCard {
                    title: "Repository",
                    description: "Organise papers, ideas, experiments and evidence.",
                    icon: rsx! { Icon::<LdFolder> { icon: LdFolder, width: 24, height: 24 } },
                }
            }
            DashboardCard {
                title: "Discussions",
                description: "Debate findings with peers and mentors.",
                icon: rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 24, height: 24 } },
            }
            DashboardCard {
                title: "Mentor Feedback",
                description: "See review notes on your latest submissions.",
                icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 24, height: 24 } },
            }
            DashboardCard {
                title: "Citation Activity",
                description: "Follow how your published work is being referenced.",
                icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 24, height: 24 } },
            }
        }
    }
}

/// A node on the repository canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CanvasNode {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    status: &'static str,
    confidence: &'static str,
    tags: &'static str,
}

const CANVAS_NODES: &[CanvasNode] = &[
    CanvasNode {
        id: "hypothesis",
        title: "Hypothesis",
        content: "Misinformation spreads faster in polarized networks",
        status: "Testing",
        confidence: "Medium",
        tags: "misinformation, networks",
    },
    CanvasNode {
        id: "evidence",
        title: "Evidence",
        content: "Dataset A shows 23% faster diffusion",
        status: "Collected",
        confidence: "High",
        tags: "dataset, diffusion",
    },
];

fn find_node(id: &str) -> Option<&'static CanvasNode> {
    CANVAS_NODES.iter().find(|node| node.id == id)
}

/// Three-pane workspace: collection list, canvas and node details.
#[component]
pub fn ResearchRepository() -> Element {
    let mut selected = use_signal(|| Option::<&'static str>::None);
    let mut notes = use_signal(String::new);
    let detail = selected().and_then(find_node);

    rsx! {
        div { class: "repo-workspace",
            aside { class: "repo-collections",
                h2 { class: "repo-heading", "Research Repository" }
                button { class: "repo-collection", r#type: "button",
                    Icon::<LdFileText> { icon: LdFileText, width: 14, height: 14 }
                    "Papers"
                }
                button { class: "repo-collection", r#type: "button",
                    Icon::<LdBookOpen> { icon: LdBookOpen, width: 14, height: 14 }
                    "Ideas"
                }
                button { class: "repo-collection", r#type: "button",
                    Icon::<LdActivity> { icon: LdActivity, width: 14, height: 14 }
                    "Experiments"
                }
                button { class: "repo-collection", r#type: "button",
                    Icon::<LdSearch> { icon: LdSearch, width: 14, height: 14 }
                    "Clues & Evidence"
                }
            }

            div { class: "repo-canvas",
                for node in CANVAS_NODES.iter() {
                    button {
                        key: "{node.id}",
                        class: if selected() == Some(node.id) { "canvas-node selected" } else { "canvas-node" },
                        r#type: "button",
                        onclick: move |_| selected.set(Some(node.id)),
                        h4 { "{node.title}" }
                        p { "{node.content}" }
                    }
                }
            }

            aside { class: "repo-details",
                h3 { class: "repo-heading", "Node Details" }
                if let Some(node) = detail {
                    div { class: "repo-field",
                        p { class: "repo-field-label", "Title" }
                        p { "{node.title}" }
                    }
                    div { class: "repo-field",
                        p { class: "repo-field-label", "Status" }
                        p { "{node.status}" }
                    }
                    div { class: "repo-field",
                        p { class: "repo-field-label", "Confidence" }
                        p { "{node.confidence}" }
                    }
                    div { class: "repo-field",
                        p { class: "repo-field-label", "Tags" }
                        p { "{node.tags}" }
                    }
                    textarea {
                        class: "input",
                        placeholder: "Private research notes...",
                        value: notes(),
                        oninput: move |e: FormEvent| notes.set(e.value()),
                    }
                } else {
                    p { class: "repo-empty", "Select a node to view details" }
                }
            }
        }
    }
}
