use crate::components::PageHeader;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdSearch, LdShield};
use dioxus_free_icons::Icon;

/// Weekly exposure readings, percent.
const BIAS_EXPOSURE: [u8; 7] = [40, 65, 30, 85, 50, 60, 45];

/// Readings above this are highlighted as high exposure.
const HIGH_EXPOSURE: u8 = 70;

const ETHICS_SCORE: u8 = 78;

struct Submission {
    title: &'static str,
    status: &'static str,
    when: &'static str,
    kind: &'static str,
}

const RECENT_SUBMISSIONS: &[Submission] = &[
    Submission {
        title: "Climate Data Report 2024",
        status: "Verified",
        when: "2 hrs ago",
        kind: "PDF",
    },
    Submission {
        title: "Viral Mars Landing Image",
        status: "Debunked",
        when: "Yesterday",
        kind: "Image",
    },
    Submission {
        title: "Economic Policy Speech",
        status: "Pending",
        when: "2 days ago",
        kind: "Video",
    },
];

fn status_class(status: &str) -> &'static str {
    match status {
        "Verified" => "status-pill verified",
        "Debunked" => "status-pill debunked",
        _ => "status-pill pending",
    }
}

#[component]
pub fn StudentDashboard() -> Element {
    rsx! {
        PageHeader {
            title: "Knowledge Vault",
            subtitle: "Track your verification impact and learning progress.",
        }

        div { class: "student-grid",
            div { class: "panel",
                h3 { class: "panel-title", "Bias Exposure Meter" }
                p { class: "panel-subtitle", "Analysis of recent consumption" }
                div { class: "bar-chart",
                    for (i, value) in BIAS_EXPOSURE.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: if *value > HIGH_EXPOSURE { "bar high" } else { "bar" },
                            style: "height: {value}%",
                        }
                    }
                }
                p { class: "panel-footnote", "Moderate exposure to confirmed bias detected this week." }
            }

            div { class: "panel",
                h3 { class: "panel-title", "Ethics Engagement" }
                p { class: "panel-subtitle", "Community Score" }
                div { class: "score-ring",
                    span { class: "score-value", "{ETHICS_SCORE}" }
                    span { class: "score-label", "Score" }
                }
            }

            div { class: "panel lab-panel",
                h3 { class: "panel-title", "Misinformation Lab" }
                p { class: "panel-subtitle", "Submit content for analysis" }
                button { class: "lab-action", r#type: "button",
                    Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                    span { "Analyze Video Source" }
                }
                button { class: "lab-action", r#type: "button",
                    Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                    span { "Verify Image Context" }
                }
                button { class: "lab-action", r#type: "button",
                    Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                    span { "Check Document Text" }
                }
                h4 { class: "panel-subtitle", "Pipeline Status" }
                p { class: "pipeline-line", "Queue Empty" }
            }

            div { class: "panel history-panel",
                h3 { class: "panel-title", "Submission History" }
                p { class: "panel-subtitle", "Recent activity timeline" }
                for item in RECENT_SUBMISSIONS.iter() {
                    div { key: "{item.title}", class: "history-item",
                        div { class: "history-head",
                            h4 { "{item.title}" }
                            span { class: "history-when", "{item.when}" }
                        }
                        span { class: status_class(item.status), "{item.status}" }
                        span { class: "history-kind", "{item.kind}" }
                    }
                }
            }
        }
    }
}
