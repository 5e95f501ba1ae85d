use crate::Role;

/// Icon shown next to a sidebar link. Mapped to an icon set by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Vault,
    Lab,
    Peers,
    Overview,
    Repository,
    Discussions,
    Classes,
    Content,
    Assignments,
    Queries,
    Researchers,
    Reviews,
    Integrity,
    Insights,
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationLink {
    pub icon: NavIcon,
    pub label: &'static str,
    pub path: &'static str,
}

const fn link(icon: NavIcon, label: &'static str, path: &'static str) -> NavigationLink {
    NavigationLink { icon, label, path }
}

const STUDENT_LINKS: &[NavigationLink] = &[
    link(NavIcon::Dashboard, "Dashboard", "/student"),
    link(NavIcon::Vault, "Knowledge Vault", "/student/vault"),
    link(NavIcon::Lab, "Misinfo Lab", "/student/lab"),
    link(NavIcon::Peers, "Peer Discovery", "/student/peers"),
];

const TEACHER_LINKS: &[NavigationLink] = &[
    link(NavIcon::Dashboard, "Dashboard", "/teacher"),
    link(NavIcon::Classes, "My Classes", "/teacher/classes"),
    link(NavIcon::Content, "Course Content", "/teacher/content"),
    link(NavIcon::Assignments, "Assignments & Reviews", "/teacher/assignments"),
    link(NavIcon::Queries, "Student Queries", "/teacher/queries"),
];

const RESEARCHER_LINKS: &[NavigationLink] = &[
    link(NavIcon::Overview, "Overview", "/researcher"),
    link(NavIcon::Repository, "Repository", "/researcher/repo"),
    link(NavIcon::Discussions, "Discussions", "/researcher/discuss"),
];

const MENTOR_LINKS: &[NavigationLink] = &[
    link(NavIcon::Dashboard, "Dashboard", "/mentor"),
    link(NavIcon::Researchers, "Assigned Researchers", "/mentor/researchers"),
    link(NavIcon::Reviews, "Paper Reviews", "/mentor/reviews"),
    link(NavIcon::Integrity, "Integrity Checks", "/mentor/integrity"),
    link(NavIcon::Insights, "Impact Insights", "/mentor/insights"),
];

/// Sidebar links for a role, in display order.
pub fn links_for(role: Role) -> &'static [NavigationLink] {
    match role {
        Role::Student => STUDENT_LINKS,
        Role::Teacher => TEACHER_LINKS,
        Role::Researcher => RESEARCHER_LINKS,
        Role::Mentor => MENTOR_LINKS,
    }
}

/// Drop a trailing `/` (except for the root) so `/student/` and `/student`
/// compare equal.
pub fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// Exact-match active check. No prefix matching at this level.
pub fn is_active(link: &NavigationLink, current_path: &str) -> bool {
    normalize_path(current_path) == link.path
}

/// The single link highlighted for `current_path`, if any.
pub fn active_link(role: Role, current_path: &str) -> Option<&'static NavigationLink> {
    links_for(role)
        .iter()
        .find(|link| is_active(link, current_path))
}
