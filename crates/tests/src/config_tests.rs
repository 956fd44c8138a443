use pretty_assertions::assert_eq;
use shared_types::{currency_config, AppConfig, InitialIdentity, UserRole};

const WORKSPACE_CONFIG: &str = include_str!("../../../config.toml");

#[test]
fn test_workspace_config_parses() {
    let config: AppConfig = toml::from_str(WORKSPACE_CONFIG).expect("config.toml parses");
    assert_eq!(config.auth.initial_identity, InitialIdentity::Admin);
    assert!(config.features.role_switcher);
}

#[test]
fn test_default_currency_is_configured() {
    let config: AppConfig = toml::from_str(WORKSPACE_CONFIG).expect("config.toml parses");
    let code = &config.display.default_currency;
    assert_eq!(currency_config(code).code, code.as_str());
}

#[test]
fn test_initial_identity_none_starts_signed_out() {
    let config: AppConfig = toml::from_str(
        r#"
        [auth]
        initial_identity = "none"
        "#,
    )
    .expect("config parses");
    assert_eq!(config.auth.initial_identity.role(), None);
}

#[test]
fn test_initial_identity_maps_to_roles() {
    assert_eq!(InitialIdentity::Admin.role(), Some(UserRole::Admin));
    assert_eq!(InitialIdentity::Seller.role(), Some(UserRole::Seller));
    assert_eq!(InitialIdentity::Buyer.role(), Some(UserRole::Buyer));
}
