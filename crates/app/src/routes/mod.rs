pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod products;
pub mod users;

use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdLogOut, LdPackage, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{AppConfig, User, ALL_ROLES};
use shared_ui::{Button, ButtonVariant, RoleBadge};

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use products::Products;
use users::Users;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[layout(AdminGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/products")]
    Products {},
    #[route("/users")]
    Users {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// What the admin guard does for a navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    Render,
    Redirect(Route),
}

/// Decide whether `user` may see `from`.
///
/// Anyone other than an admin is sent to the login page with the attempted
/// location captured in `redirect`.
pub fn admin_gate(user: Option<&User>, from: &Route) -> GuardOutcome {
    if user.is_some_and(User::is_admin) {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect(Route::Login {
            redirect: Some(from.to_string()),
        })
    }
}

/// Layout that only renders its children for admins.
///
/// Redirects replace the history entry so the back button does not bounce
/// through the guarded page.
#[component]
fn AdminGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let user = auth.user();

    match admin_gate(user.as_ref(), &route) {
        GuardOutcome::Render => rsx! { Outlet::<Route> {} },
        GuardOutcome::Redirect(target) => {
            tracing::debug!(from = %route, role = ?user.as_ref().map(|u| u.role), "redirecting to login");
            navigator().replace(target);
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "navbar-link active"
    } else {
        "navbar-link"
    }
}

/// Main app layout with the top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let config: AppConfig = use_context();
    let mut auth = use_auth();

    let user = auth.user();
    let current_role = user.as_ref().map(|u| u.role);
    let display_name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let initials = user.as_ref().map(User::initials).unwrap_or_default();

    let page_title = match &route {
        Route::Dashboard {} => "Dashboard",
        Route::Products {} => "Products",
        Route::Users {} => "Users",
        _ => "",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            nav { class: "navbar-bar",
                span { class: "navbar-brand", "Marketplace Admin" }

                div { class: "navbar-links",
                    Link {
                        to: Route::Dashboard {},
                        class: nav_class(matches!(route, Route::Dashboard {})),
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                        "Dashboard"
                    }
                    Link {
                        to: Route::Products {},
                        class: nav_class(matches!(route, Route::Products {})),
                        Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
                        "Products"
                    }
                    Link {
                        to: Route::Users {},
                        class: nav_class(matches!(route, Route::Users {})),
                        Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                        "Users"
                    }
                }

                div { class: "navbar-spacer" }

                if config.features.role_switcher {
                    div { class: "role-switcher", role: "group", "aria-label": "Switch mock role",
                        for role in ALL_ROLES.iter().copied() {
                            Button {
                                key: "{role}",
                                variant: ButtonVariant::Ghost,
                                pressed: current_role == Some(role),
                                onclick: move |_| auth.set_mock_user(role),
                                {role.display_name()}
                            }
                        }
                    }
                }

                if let Some(role) = current_role {
                    div { class: "navbar-user",
                        span { class: "navbar-avatar", title: "{display_name}", "{initials}" }
                        RoleBadge { role }
                    }
                }

                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        auth.logout();
                        navigator().replace(Route::Login { redirect: None });
                    },
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Sign Out"
                }
            }

            main { class: "page-content",
                h1 { class: "page-title", "{page_title}" }
                Outlet::<Route> {}
            }
        }
    }
}
