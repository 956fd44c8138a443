use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Copy of the workspace config compiled into the binary, used where the
/// file system is unavailable (web) or the file is missing.
const BUNDLED_CONFIG: &str = include_str!("../../../config.toml");

/// Load the app config once and return it. Safe to call repeatedly.
///
/// Reads `config.toml` from the working directory, falling back to the
/// bundled copy, then to built-in defaults if parsing fails.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents, CONFIG_PATH),
        Err(e) => {
            tracing::warn!("{CONFIG_PATH} not readable ({e}), using bundled config");
            parse_config(BUNDLED_CONFIG, "bundled config")
        }
    })
}

/// Parse config text, defaulting everything on error.
fn parse_config(contents: &str, source: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => {
            tracing::info!(
                source,
                initial_identity = ?config.auth.initial_identity,
                default_currency = %config.display.default_currency,
                "loaded config"
            );
            config
        }
        Err(e) => {
            tracing::warn!(source, "failed to parse config: {e}; using defaults");
            AppConfig::default()
        }
    }
}
