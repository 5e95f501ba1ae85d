use crate::components::{DashboardCard, PageHeader};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdBriefcase, LdMessageSquare, LdUsers};
use dioxus_free_icons::Icon;

#[component]
pub fn TeacherDashboard() -> Element {
    rsx! {
        PageHeader { title: "Teacher Dashboard" }

        section { class: "welcome-panel",
            h2 { "Teach with clarity. Lead with trust." }
            p {
                "As a teacher, you guide students through verified knowledge, "
                "structured learning paths, and real-world understanding."
            }
        }

        div { class: "dashboard-grid",
            DashboardCard {
                title: "My Classes",
                description: "Create and manage your active classes and batches.",
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
            }
            DashboardCard {
                title: "Course Content",
                description: "Upload lessons, references, and verified materials.",
                icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 24, height: 24 } },
            }
            DashboardCard {
                title: "Assignments & Reviews",
                description: "Evaluate student work and provide structured feedback.",
                icon: rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 24, height: 24 } },
            }
            DashboardCard {
                title: "Student Queries",
                description: "Answer doubts and guide students responsibly.",
                icon: rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 24, height: 24 } },
            }
        }

        section { class: "note-panel",
            h3 { "Teaching Philosophy" }
            p {
                "Education isn't about information overload. It's about clarity, accuracy "
                "and responsibility. Your guidance helps students build foundations that last."
            }
        }
    }
}
