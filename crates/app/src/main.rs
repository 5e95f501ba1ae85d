use dioxus::prelude::*;

mod auth;
mod components;
mod routes;

use auth::{AuthState, Services};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = backend::config::load_config();

    let level = config
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("[logger] Failed to initialise logging: {e}");
    }

    tracing::info!(
        backend = %config.backend.base_url(),
        platform = client_platform(),
        "Starting Veritas"
    );
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let services = use_context_provider(Services::from_config);

    // Restore whatever session survived the last visit; expired ones are dropped.
    use_context_provider(|| AuthState::restore(&services));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
