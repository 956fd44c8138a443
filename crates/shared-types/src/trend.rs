//! Values and period-over-period changes displayed by stat cards.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Substring (case-insensitive) marking a change as "nothing to compare yet".
pub const NO_DATA_SENTINEL: &str = "no data";

/// Leading optional sign, a number, then an optional percent sign.
static CHANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?)(\d+(?:\.\d+)?)%?").expect("valid regex"));

/// A headline value: either preformatted text or a raw number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Text(text) => f.write_str(text),
            StatValue::Number(n) => write!(f, "{}", format_number(*n)),
        }
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

impl From<String> for StatValue {
    fn from(value: String) -> Self {
        StatValue::Text(value)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Number(value)
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Number(value as f64)
    }
}

impl From<i32> for StatValue {
    fn from(value: i32) -> Self {
        StatValue::Number(f64::from(value))
    }
}

impl From<usize> for StatValue {
    fn from(value: usize) -> Self {
        StatValue::Number(value as f64)
    }
}

/// A change indicator: a numeric delta (in percent) or a formatted string
/// such as `"+15.2%"` or `"No data yet"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ChangeIndicator {
    Number(f64),
    Text(String),
}

impl fmt::Display for ChangeIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeIndicator::Text(text) => f.write_str(text),
            ChangeIndicator::Number(n) if *n > 0.0 => write!(f, "+{}%", format_number(*n)),
            ChangeIndicator::Number(n) => write!(f, "{}%", format_number(*n)),
        }
    }
}

impl From<&str> for ChangeIndicator {
    fn from(value: &str) -> Self {
        ChangeIndicator::Text(value.to_string())
    }
}

impl From<String> for ChangeIndicator {
    fn from(value: String) -> Self {
        ChangeIndicator::Text(value)
    }
}

impl From<f64> for ChangeIndicator {
    fn from(value: f64) -> Self {
        ChangeIndicator::Number(value)
    }
}

impl From<i32> for ChangeIndicator {
    fn from(value: i32) -> Self {
        ChangeIndicator::Number(f64::from(value))
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    #[default]
    Neutral,
}

impl TrendDirection {
    fn from_value(value: f64) -> Self {
        if value > 0.0 {
            TrendDirection::Up
        } else if value < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Neutral => "neutral",
        }
    }
}

/// A change indicator classified for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trend {
    pub direction: TrendDirection,
    /// False when the change carries the "no data" sentinel.
    pub has_data: bool,
}

impl Trend {
    /// Trend for an absent change.
    pub const NONE: Trend = Trend {
        direction: TrendDirection::Neutral,
        has_data: true,
    };

    /// Whether a directional arrow should be drawn.
    pub fn shows_icon(&self) -> bool {
        self.has_data && self.direction != TrendDirection::Neutral
    }

    /// Whether the "vs last month" comparison suffix should be drawn.
    pub fn shows_comparison(&self) -> bool {
        self.has_data
    }
}

/// Classify a change indicator.
///
/// Numbers classify by sign. Strings containing the "no data" sentinel
/// have no data; other strings are parsed for a leading signed number,
/// and anything unparseable is neutral.
pub fn parse_change(change: &ChangeIndicator) -> Trend {
    match change {
        ChangeIndicator::Number(n) => Trend {
            direction: TrendDirection::from_value(*n),
            has_data: true,
        },
        ChangeIndicator::Text(text) => parse_change_text(text),
    }
}

/// Classify a formatted change string such as `"+15.2%"`.
pub fn parse_change_text(text: &str) -> Trend {
    if text.to_lowercase().contains(NO_DATA_SENTINEL) {
        return Trend {
            direction: TrendDirection::Neutral,
            has_data: false,
        };
    }
    let direction = parse_signed_value(text.trim())
        .map(TrendDirection::from_value)
        .unwrap_or_default();
    Trend {
        direction,
        has_data: true,
    }
}

fn parse_signed_value(text: &str) -> Option<f64> {
    let caps = CHANGE_PATTERN.captures(text)?;
    let magnitude: f64 = caps.get(2)?.as_str().parse().ok()?;
    let negative = caps.get(1).is_some_and(|sign| sign.as_str() == "-");
    Some(if negative { -magnitude } else { magnitude })
}
