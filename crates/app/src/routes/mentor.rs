use crate::components::{DashboardCard, PageHeader};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdBookOpen, LdShield, LdUsers};
use dioxus_free_icons::Icon;

#[component]
pub fn MentorDashboard() -> Element {
    rsx! {
        PageHeader { title: "Mentor Dashboard" }

        section { class: "welcome-panel",
            h2 { "Guide research. Shape integrity." }
            p {
                "As a mentor, you oversee research quality, help researchers refine "
                "their work, and ensure misinformation never makes it through."
            }
        }

        div { class: "dashboard-grid",
            DashboardCard {
                title: "Assigned Researchers",
                description: "View and manage researchers under your mentorship.",
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
            }
            DashboardCard {
                title: "Paper Reviews",
                description: "Review submissions, annotate issues, and approve content.",
                icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 24, height: 24 } },
            }
            DashboardCard {
                title: "Integrity Checks",
                description: "Flag misinformation, weak claims, and unsupported data.",
                icon: rsx! { Icon::<LdShield> { icon: LdShield, width: 24, height: 24 } },
            }
            DashboardCard {
                title: "Impact Insights",
                description: "Track how your guidance improves research quality.",
                icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 24, height: 24 } },
            }
        }

        section { class: "note-panel",
            h3 { "Mentor Responsibility" }
            p {
                "Every approval shapes public understanding and academic trust. "
                "Take time, challenge assumptions, and guide with integrity."
            }
        }
    }
}
