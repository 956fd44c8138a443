//! Currency display formatting.
//!
//! Amounts are always integers in minor units (cents). Formatting is
//! display-only: no conversion between currencies ever happens here.

use std::fmt;

/// Static display configuration for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyConfig {
    pub code: &'static str,
    pub symbol: &'static str,
    /// BCP 47 locale tag whose number rules are used for this currency.
    pub locale: &'static str,
    pub flag: &'static str,
}

/// Currency code used when a requested code is not configured.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Symbol returned by [`currency_symbol`] for unknown codes.
const DEFAULT_SYMBOL: &str = "$";

/// All configured currencies, in picker order.
pub const CURRENCIES: &[CurrencyConfig] = &[
    CurrencyConfig { code: "USD", symbol: "$", locale: "en-US", flag: "🇺🇸" },
    CurrencyConfig { code: "EUR", symbol: "€", locale: "de-DE", flag: "🇪🇺" },
    CurrencyConfig { code: "GBP", symbol: "£", locale: "en-GB", flag: "🇬🇧" },
    CurrencyConfig { code: "INR", symbol: "₹", locale: "en-IN", flag: "🇮🇳" },
    CurrencyConfig { code: "JPY", symbol: "¥", locale: "ja-JP", flag: "🇯🇵" },
    CurrencyConfig { code: "CAD", symbol: "C$", locale: "en-CA", flag: "🇨🇦" },
    CurrencyConfig { code: "AUD", symbol: "A$", locale: "en-AU", flag: "🇦🇺" },
    CurrencyConfig { code: "CHF", symbol: "CHF", locale: "de-CH", flag: "🇨🇭" },
    CurrencyConfig { code: "BRL", symbol: "R$", locale: "pt-BR", flag: "🇧🇷" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Indian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPosition {
    Prefix,
    PrefixSpaced,
    SuffixSpaced,
}

/// Number rules for one locale tag.
#[derive(Debug, Clone, Copy)]
struct NumberLocale {
    tag: &'static str,
    group_separator: &'static str,
    decimal_separator: &'static str,
    grouping: Grouping,
    symbol_position: SymbolPosition,
}

const NBSP: &str = "\u{a0}";

const NUMBER_LOCALES: &[NumberLocale] = &[
    NumberLocale { tag: "en-US", group_separator: ",", decimal_separator: ".", grouping: Grouping::Thousands, symbol_position: SymbolPosition::Prefix },
    NumberLocale { tag: "en-GB", group_separator: ",", decimal_separator: ".", grouping: Grouping::Thousands, symbol_position: SymbolPosition::Prefix },
    NumberLocale { tag: "en-CA", group_separator: ",", decimal_separator: ".", grouping: Grouping::Thousands, symbol_position: SymbolPosition::Prefix },
    NumberLocale { tag: "en-AU", group_separator: ",", decimal_separator: ".", grouping: Grouping::Thousands, symbol_position: SymbolPosition::Prefix },
    NumberLocale { tag: "en-IN", group_separator: ",", decimal_separator: ".", grouping: Grouping::Indian, symbol_position: SymbolPosition::Prefix },
    NumberLocale { tag: "ja-JP", group_separator: ",", decimal_separator: ".", grouping: Grouping::Thousands, symbol_position: SymbolPosition::Prefix },
    NumberLocale { tag: "de-DE", group_separator: ".", decimal_separator: ",", grouping: Grouping::Thousands, symbol_position: SymbolPosition::SuffixSpaced },
    NumberLocale { tag: "de-CH", group_separator: "’", decimal_separator: ".", grouping: Grouping::Thousands, symbol_position: SymbolPosition::PrefixSpaced },
    NumberLocale { tag: "pt-BR", group_separator: ".", decimal_separator: ",", grouping: Grouping::Thousands, symbol_position: SymbolPosition::PrefixSpaced },
];

/// Why locale-aware formatting could not produce a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    UnsupportedLocale(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnsupportedLocale(tag) => {
                write!(f, "no number formatting rules for locale '{tag}'")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Look up a currency's configuration, falling back to USD.
pub fn currency_config(code: &str) -> &'static CurrencyConfig {
    find_currency(code)
        .or_else(|| find_currency(DEFAULT_CURRENCY))
        .unwrap_or(&CURRENCIES[0])
}

fn find_currency(code: &str) -> Option<&'static CurrencyConfig> {
    CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

/// All configured currencies.
pub fn supported_currencies() -> &'static [CurrencyConfig] {
    CURRENCIES
}

/// Symbol for a currency code; `"$"` when the code is not configured.
pub fn currency_symbol(code: &str) -> &'static str {
    find_currency(code).map(|c| c.symbol).unwrap_or(DEFAULT_SYMBOL)
}

/// Format a minor-unit amount for display in the given currency.
///
/// Unknown codes are formatted as USD. Never fails: if the configured
/// locale has no number rules, the amount is rendered as the symbol
/// followed by a fixed two-decimal number.
pub fn format_price(amount_minor: i64, code: &str) -> String {
    format_with_config(amount_minor, currency_config(code))
}

/// Format with an explicit configuration, applying the fixed-decimal
/// fallback when locale formatting fails.
pub fn format_with_config(amount_minor: i64, config: &CurrencyConfig) -> String {
    match try_format_price(amount_minor, config) {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::warn!(code = config.code, error = %e, "falling back to fixed-decimal price");
            fallback_price(amount_minor, config.symbol)
        }
    }
}

/// Locale-aware formatting with 0 to 2 fraction digits.
pub fn try_format_price(amount_minor: i64, config: &CurrencyConfig) -> Result<String, FormatError> {
    let locale = NUMBER_LOCALES
        .iter()
        .find(|l| l.tag == config.locale)
        .ok_or_else(|| FormatError::UnsupportedLocale(config.locale.to_string()))?;

    let abs = amount_minor.unsigned_abs();
    let whole = group_digits(&(abs / 100).to_string(), locale.group_separator, locale.grouping);
    let fraction = abs % 100;

    let number = if fraction == 0 {
        whole
    } else if fraction % 10 == 0 {
        format!("{whole}{}{}", locale.decimal_separator, fraction / 10)
    } else {
        format!("{whole}{}{fraction:02}", locale.decimal_separator)
    };

    let sign = if amount_minor < 0 { "-" } else { "" };
    let symbol = config.symbol;
    Ok(match locale.symbol_position {
        SymbolPosition::Prefix => format!("{sign}{symbol}{number}"),
        SymbolPosition::PrefixSpaced => format!("{sign}{symbol}{NBSP}{number}"),
        SymbolPosition::SuffixSpaced => format!("{sign}{number}{NBSP}{symbol}"),
    })
}

fn fallback_price(amount_minor: i64, symbol: &str) -> String {
    format!("{symbol}{:.2}", amount_minor as f64 / 100.0)
}

/// Insert group separators into an ASCII digit string.
fn group_digits(digits: &str, separator: &str, grouping: Grouping) -> String {
    let mut groups = Vec::new();
    let mut end = digits.len();
    let mut size = 3;
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(&digits[start..end]);
        end = start;
        if grouping == Grouping::Indian {
            size = 2;
        }
    }
    groups.reverse();
    groups.join(separator)
}
