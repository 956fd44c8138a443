use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppError, User};
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label};

/// Where to go after an admin signs in.
///
/// Falls back to the dashboard when there is no captured location, when it
/// does not parse as a route, or when it points back at the login page.
pub fn resolve_destination(redirect: Option<&str>) -> Route {
    match redirect.map(str::parse::<Route>) {
        Some(Ok(Route::Login { .. })) | Some(Err(_)) | None => Route::Dashboard {},
        Some(Ok(route)) => route,
    }
}

/// Refusal shown when a signed-in identity is not an admin.
pub fn admin_required(user: &User) -> AppError {
    AppError::forbidden(format!(
        "Signed in as {} ({}). Admin access is required for this console.",
        user.name,
        user.role.display_name()
    ))
}

/// Login page. Accepts an optional `redirect` query param captured by the
/// admin guard; after an admin signs in, navigates there instead of the
/// dashboard.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let auth = use_auth();

    // Store redirect in a signal so closures can read it without moving ownership
    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move || {
        let target = resolve_destination(redirect_target.read().as_deref());
        navigator().replace(target);
    };

    if auth.is_admin() {
        go_to_destination();
    }

    rsx! {
        LoginForm {
            on_admin_signed_in: move |_| go_to_destination(),
        }
    }
}

/// Email/password card. Signs in through the auth context and reports
/// admin sign-ins to the caller; other roles get an inline notice.
#[component]
pub fn LoginForm(#[props(default)] on_admin_signed_in: EventHandler<User>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);
        notice.set(None);

        match auth.login(&email(), &password()) {
            Ok(user) if user.is_admin() => on_admin_signed_in.call(user),
            Ok(user) => notice.set(Some(admin_required(&user).friendly_message())),
            Err(e) => error_msg.set(Some(e.friendly_message())),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access the marketplace console" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }
                    if let Some(msg) = notice() {
                        div { class: "auth-notice", role: "status", "{msg}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "admin@marketplace.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            "Sign In"
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-hint",
                        "Development build: any password works. Emails containing "
                        code { "admin" }
                        " or "
                        code { "seller" }
                        " pick the matching role."
                    }
                }
            }
        }
    }
}
