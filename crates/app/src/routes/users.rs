use crate::format_helpers::format_date_human;
use crate::mock;
use dioxus::prelude::*;
use shared_types::{UserAccount, UserRole};
use shared_ui::{Card, CardContent, RoleBadge, StatusBadge};

/// Number of accounts holding each role, in [`shared_types::ALL_ROLES`] order.
fn role_counts(accounts: &[UserAccount]) -> Vec<(UserRole, usize)> {
    shared_types::ALL_ROLES
        .iter()
        .map(|role| {
            let count = accounts.iter().filter(|a| a.user.role == *role).count();
            (*role, count)
        })
        .collect()
}

/// Users page listing marketplace accounts with their role and standing.
#[component]
pub fn Users() -> Element {
    let accounts = use_hook(mock::accounts);
    let counts = role_counts(&accounts);

    rsx! {
        div { class: "users-summary",
            for (role, count) in counts {
                span { key: "{role}", class: "users-summary-item",
                    RoleBadge { role }
                    " {count}"
                }
            }
        }

        Card {
            CardContent {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Status" }
                            th { "Joined" }
                        }
                    }
                    tbody {
                        for account in accounts.iter() {
                            tr { key: "{account.user.id}",
                                td {
                                    span { class: "navbar-avatar", {account.user.initials()} }
                                    " {account.user.name}"
                                }
                                td { "{account.user.email}" }
                                td { RoleBadge { role: account.user.role } }
                                td { StatusBadge { status: account.status.clone() } }
                                td { {format_date_human(&account.joined_at)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
