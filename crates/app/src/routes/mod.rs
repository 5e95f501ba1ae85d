mod login;
mod mentor;
mod researcher;
mod section;
mod signup;
mod student;
mod teacher;

use crate::auth::{use_auth, use_services};
use crate::components::{NavIconView, TopNav};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_types::{is_active, links_for, navigate, Page, Resolution, Role, LOGIN_PATH};

use login::Login;
use mentor::MentorDashboard;
use researcher::{ResearchRepository, ResearcherDashboard};
use section::SectionPage;
use signup::Signup;
use student::StudentDashboard;
use teacher::TeacherDashboard;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(RoleGuard)]
    #[layout(DashboardLayout)]
        #[route("/student")]
        StudentHome {},
        #[route("/student/:..segments")]
        StudentSection { segments: Vec<String> },
        #[route("/teacher")]
        TeacherHome {},
        #[route("/teacher/:..segments")]
        TeacherSection { segments: Vec<String> },
        #[route("/mentor")]
        MentorHome {},
        #[route("/mentor/:..segments")]
        MentorSection { segments: Vec<String> },
        #[route("/researcher")]
        ResearcherHome {},
        #[route("/researcher/repo")]
        ResearchRepository {},
        #[route("/researcher/:..segments")]
        ResearcherSection { segments: Vec<String> },
    #[end_layout]
    #[end_layout]
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

/// The page a route renders, or `None` for the paths that only redirect.
pub fn page_for(route: &Route) -> Option<Page> {
    match route {
        Route::Login {} => Some(Page::Login),
        Route::Signup {} => Some(Page::Signup),
        Route::StudentHome {} | Route::StudentSection { .. } => Some(Page::StudentDashboard),
        Route::TeacherHome {} | Route::TeacherSection { .. } => Some(Page::TeacherDashboard),
        Route::MentorHome {} | Route::MentorSection { .. } => Some(Page::MentorDashboard),
        Route::ResearcherHome {} | Route::ResearcherSection { .. } => {
            Some(Page::ResearcherDashboard)
        }
        Route::ResearchRepository {} => Some(Page::ResearchRepository),
        Route::Root {} | Route::Fallback { .. } => None,
    }
}

/// Router target for one of the static paths handed out by `shared_types`.
pub fn route_for(path: &str) -> Route {
    path.parse().unwrap_or(Route::Login {})
}

/// Role-gated pages: no session goes to login, the wrong role goes home.
#[component]
fn RoleGuard() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let session = auth.session.read().clone();
    let path = route.to_string();

    match navigate(&path, session.as_ref()) {
        Resolution::Render(_) => rsx! { Outlet::<Route> {} },
        Resolution::Redirect(target) => {
            tracing::debug!(from = %path, to = target, "Guard redirect");
            navigator().replace(route_for(target));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// Dashboard shell: role sidebar, top bar and the page outlet.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let services = use_services();
    let mut auth = use_auth();

    // RoleGuard only renders this layout with a session present.
    let Some(session) = auth.session.read().clone() else {
        return rsx! {};
    };
    let role = session.role();
    let profile = session.profile;
    let current_path = route.to_string();

    let logout = move |_| {
        services.sign_out();
        auth.clear_auth();
        navigator().replace(Route::Login {});
    };

    rsx! {
        div { class: "dashboard-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    h1 { class: "sidebar-logo",
                        "Veritas"
                        span { class: "sidebar-logo-dot", "." }
                    }
                    p { class: "sidebar-portal", "{role.portal_label()}" }
                }

                nav { class: "sidebar-nav",
                    for link in links_for(role).iter() {
                        Link {
                            key: "{link.path}",
                            to: route_for(link.path),
                            class: if is_active(link, &current_path) { "sidebar-link active" } else { "sidebar-link" },
                            NavIconView { icon: link.icon }
                            span { "{link.label}" }
                        }
                    }
                }

                div { class: "sidebar-footer",
                    div { class: "sidebar-identity",
                        div { class: "avatar", "{profile.initials()}" }
                        div { class: "sidebar-identity-text",
                            p { class: "sidebar-identity-name", "{profile.name}" }
                            p { class: "sidebar-identity-role", "{profile.role_label()}" }
                        }
                    }
                    button {
                        class: "sidebar-logout",
                        onclick: logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        span { "Logout" }
                    }
                }
            }

            div { class: "dashboard-main",
                TopNav {}
                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn StudentHome() -> Element {
    rsx! { StudentDashboard {} }
}

#[component]
fn StudentSection(segments: Vec<String>) -> Element {
    rsx! { SectionPage { role: Role::Student, segments } }
}

#[component]
fn TeacherHome() -> Element {
    rsx! { TeacherDashboard {} }
}

#[component]
fn TeacherSection(segments: Vec<String>) -> Element {
    rsx! { SectionPage { role: Role::Teacher, segments } }
}

#[component]
fn MentorHome() -> Element {
    rsx! { MentorDashboard {} }
}

#[component]
fn MentorSection(segments: Vec<String>) -> Element {
    rsx! { SectionPage { role: Role::Mentor, segments } }
}

#[component]
fn ResearcherHome() -> Element {
    rsx! { ResearcherDashboard {} }
}

#[component]
fn ResearcherSection(segments: Vec<String>) -> Element {
    rsx! { SectionPage { role: Role::Researcher, segments } }
}

#[component]
fn Root() -> Element {
    navigator().replace(Route::Login {});
    rsx! {}
}

/// Unknown paths are not errors; they land on the login page.
#[component]
fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!(path = %format!("/{}", segments.join("/")), "Unmatched path");
    navigator().replace(route_for(LOGIN_PATH));
    rsx! {}
}
