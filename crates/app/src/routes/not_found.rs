use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Admin sections offered as alternatives on the 404 page.
const ADMIN_SECTIONS: &[(&str, Route)] = &[
    ("Dashboard", Route::Dashboard {}),
    ("Products", Route::Products {}),
    ("Users", Route::Users {}),
];

/// Where a lost visitor can usefully go next.
///
/// Admins get the dashboard; anyone else would only bounce off the guard,
/// so they are sent to sign in.
fn recovery_link(is_admin: bool) -> (Route, &'static str) {
    if is_admin {
        (Route::Dashboard {}, "Back to Dashboard")
    } else {
        (Route::Login { redirect: None }, "Sign in as an admin")
    }
}

/// Catch-all page for paths outside the marketplace console.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let is_admin = auth.is_admin();
    let path = format!("/{}", route.join("/"));
    let (target, label) = recovery_link(is_admin);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "No such console page" }
                p { class: "not-found-message",
                    code { "{path}" }
                    " is not part of the marketplace admin."
                }
                if is_admin {
                    ul { class: "not-found-sections",
                        for (name, section) in ADMIN_SECTIONS.iter().cloned() {
                            li { key: "{name}",
                                Link { to: section, "{name}" }
                            }
                        }
                    }
                }
                Link { to: target, class: "not-found-link", "{label}" }
            }
        }
    }
}
