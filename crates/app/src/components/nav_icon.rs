use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBookOpen, LdBriefcase, LdFileText, LdFolder, LdLayoutDashboard,
    LdMessageSquare, LdScale, LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::NavIcon;

/// Lucide icon for a sidebar entry.
#[component]
pub fn NavIconView(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Vault => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        NavIcon::Lab => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        NavIcon::Peers | NavIcon::Classes => {
            rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } }
        }
        NavIcon::Overview | NavIcon::Insights => {
            rsx! { Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 } }
        }
        NavIcon::Repository => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        NavIcon::Discussions | NavIcon::Queries => {
            rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 } }
        }
        NavIcon::Content | NavIcon::Reviews => {
            rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } }
        }
        NavIcon::Assignments => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        NavIcon::Researchers => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        NavIcon::Integrity => rsx! { Icon::<LdScale> { icon: LdScale, width: 18, height: 18 } },
    }
}
