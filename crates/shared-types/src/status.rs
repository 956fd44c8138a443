//! Free-text status strings mapped to visual severity.

use serde::{Deserialize, Serialize};

/// Severity used to style status indicators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusVariant {
    Success,
    Warning,
    Error,
    Info,
    #[default]
    Neutral,
}

/// All variants in display order.
pub const ALL_VARIANTS: &[StatusVariant] = &[
    StatusVariant::Success,
    StatusVariant::Warning,
    StatusVariant::Error,
    StatusVariant::Info,
    StatusVariant::Neutral,
];

/// Background/foreground pairing for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPalette {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl StatusVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusVariant::Success => "success",
            StatusVariant::Warning => "warning",
            StatusVariant::Error => "error",
            StatusVariant::Info => "info",
            StatusVariant::Neutral => "neutral",
        }
    }

    pub fn palette(&self) -> StatusPalette {
        match self {
            StatusVariant::Success => StatusPalette { background: "#dcfce7", foreground: "#166534" },
            StatusVariant::Warning => StatusPalette { background: "#fef9c3", foreground: "#854d0e" },
            StatusVariant::Error => StatusPalette { background: "#fee2e2", foreground: "#991b1b" },
            StatusVariant::Info => StatusPalette { background: "#dbeafe", foreground: "#1e40af" },
            StatusVariant::Neutral => StatusPalette { background: "#f3f4f6", foreground: "#374151" },
        }
    }
}

/// Lowercase status token to severity.
const STATUS_TABLE: &[(&str, StatusVariant)] = &[
    // Success
    ("active", StatusVariant::Success),
    ("approved", StatusVariant::Success),
    ("completed", StatusVariant::Success),
    ("delivered", StatusVariant::Success),
    ("paid", StatusVariant::Success),
    ("published", StatusVariant::Success),
    ("verified", StatusVariant::Success),
    // Warning
    ("pending", StatusVariant::Warning),
    ("pending_review", StatusVariant::Warning),
    ("processing", StatusVariant::Warning),
    ("on_hold", StatusVariant::Warning),
    ("low_stock", StatusVariant::Warning),
    // Error
    ("flagged", StatusVariant::Error),
    ("rejected", StatusVariant::Error),
    ("cancelled", StatusVariant::Error),
    ("suspended", StatusVariant::Error),
    ("banned", StatusVariant::Error),
    ("failed", StatusVariant::Error),
    ("refunded", StatusVariant::Error),
    ("out_of_stock", StatusVariant::Error),
    // Info
    ("new", StatusVariant::Info),
    ("shipped", StatusVariant::Info),
    ("in_transit", StatusVariant::Info),
    ("draft", StatusVariant::Info),
    // Neutral
    ("inactive", StatusVariant::Neutral),
    ("archived", StatusVariant::Neutral),
];

/// Severity for a status string.
///
/// An explicit variant always wins. Otherwise the lowercased status is
/// looked up in the static table; unmapped statuses are `Neutral`.
pub fn classify_status(status: &str, explicit: Option<StatusVariant>) -> StatusVariant {
    if let Some(variant) = explicit {
        return variant;
    }
    let key = status.trim().to_lowercase();
    STATUS_TABLE
        .iter()
        .find(|(token, _)| *token == key)
        .map(|(_, variant)| *variant)
        .unwrap_or_default()
}

/// Convert a status token to Title Case (e.g. "pending_review" → "Pending Review").
pub fn humanize_status(status: &str) -> String {
    status
        .split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
