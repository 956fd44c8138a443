use dioxus::prelude::*;
use shared_types::AppConfig;

mod auth;
mod config;
mod format_helpers;
mod mock;
mod routes;

use auth::AuthProvider;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Loaded once; pages read it from context.
    let config: AppConfig = use_context_provider(|| config::load_config().clone());

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        AuthProvider { initial: config.auth.initial_identity,
            Router::<Route> {}
        }
    }
}
