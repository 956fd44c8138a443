pub mod error;
pub mod feature_flags;
pub mod models;

// Display helpers shared by the UI crates
pub mod currency;
pub mod status;
pub mod trend;

pub use error::*;
pub use feature_flags::*;
pub use models::*;

pub use currency::{
    currency_config, currency_symbol, format_price, supported_currencies, CurrencyConfig,
};
pub use status::{classify_status, humanize_status, StatusPalette, StatusVariant};
pub use trend::{parse_change, ChangeIndicator, StatValue, Trend, TrendDirection};
