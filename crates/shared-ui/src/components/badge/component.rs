use dioxus::prelude::*;
use shared_types::UserRole;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
        }
    }

    /// Variant used when labelling a user's marketplace role.
    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Admin => BadgeVariant::Primary,
            UserRole::Seller => BadgeVariant::Secondary,
            UserRole::Buyer => BadgeVariant::Outline,
        }
    }
}

/// Inline label for roles, counts, and other short tags.
///
/// Statuses should use [`crate::StatusBadge`], which picks its color from
/// the status text.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Badge showing a role's display name.
#[component]
pub fn RoleBadge(role: UserRole) -> Element {
    let label = role.display_name();
    rsx! {
        Badge { variant: BadgeVariant::for_role(role), "{label}" }
    }
}
