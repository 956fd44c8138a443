use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketplace role attached to every signed-in user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Seller,
    #[default]
    Buyer,
}

/// All roles in display order.
pub const ALL_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Seller, UserRole::Buyer];

impl UserRole {
    /// Parse a role string. Unknown values default to Buyer.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "seller" => UserRole::Seller,
            _ => UserRole::Buyer,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Seller => "seller",
            UserRole::Buyer => "buyer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Seller => "Seller",
            UserRole::Buyer => "Buyer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identity held by the auth context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Canned, non-persisted identity for the given role.
    ///
    /// Always returns the same record for the same role.
    pub fn mock(role: UserRole) -> Self {
        let (id, email, name) = match role {
            UserRole::Admin => ("1", "admin@marketplace.com", "Admin User"),
            UserRole::Seller => ("2", "seller@marketplace.com", "Seller User"),
            UserRole::Buyer => ("3", "buyer@marketplace.com", "Buyer User"),
        };
        Self {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            avatar: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Up to two uppercase initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// A catalog listing shown on the products page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub seller: String,
    /// Price in minor currency units.
    pub price_cents: i64,
    pub currency: String,
    pub status: String,
}

/// A customer order shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer: String,
    /// Order total in minor currency units.
    pub total_cents: i64,
    pub currency: String,
    pub status: String,
    /// ISO-8601 timestamp.
    pub placed_at: String,
}

/// An account row on the users page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    pub user: User,
    pub status: String,
    pub joined_at: String,
}
