use serde::{Deserialize, Serialize};

use crate::models::UserRole;

/// Feature flags controlling optional pieces of the admin shell.
///
/// Every field defaults to `false` so that a missing or incomplete
/// config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Show the mock role switcher in the navbar.
    #[serde(default)]
    pub role_switcher: bool,
}

/// Identity the auth context starts with before anyone signs in.
///
/// Defaults to `Admin` for local development. Any deployment backed by a
/// real authenticator should set `initial_identity = "none"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InitialIdentity {
    #[default]
    Admin,
    Seller,
    Buyer,
    None,
}

impl InitialIdentity {
    /// The role to seed the session with, if any.
    pub fn role(&self) -> Option<UserRole> {
        match self {
            InitialIdentity::Admin => Some(UserRole::Admin),
            InitialIdentity::Seller => Some(UserRole::Seller),
            InitialIdentity::Buyer => Some(UserRole::Buyer),
            InitialIdentity::None => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AuthConfig {
    #[serde(default)]
    pub initial_identity: InitialIdentity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}
