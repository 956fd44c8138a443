use dioxus::prelude::*;
use shared_types::{
    classify_status, parse_change, ChangeIndicator, StatValue, StatusVariant, TrendDirection,
};
use shared_ui::{StatCard, StatusBadge};

use crate::common;

#[test]
fn test_stat_card_follows_parsed_trend() {
    for (text, direction) in [
        ("+15.2%", TrendDirection::Up),
        ("-3%", TrendDirection::Down),
        ("0%", TrendDirection::Neutral),
    ] {
        assert_eq!(parse_change(&ChangeIndicator::from(text)).direction, direction);
    }

    fn app() -> Element {
        rsx! {
            StatCard {
                title: "Orders",
                value: StatValue::from(1284),
                change: ChangeIndicator::from("+15.2%"),
                icon: rsx! { span {} },
            }
            StatCard {
                title: "Sellers",
                value: "312",
                change: ChangeIndicator::from("-3%"),
                icon: rsx! { span {} },
            }
        }
    }

    let html = common::render(app);
    assert!(html.contains(r#"data-trend="up""#));
    assert!(html.contains(r#"data-trend="down""#));
    assert_eq!(html.matches("vs last month").count(), 2);
}

#[test]
fn test_stat_card_without_data() {
    let trend = parse_change(&ChangeIndicator::from("No data yet"));
    assert!(!trend.has_data);

    fn app() -> Element {
        rsx! {
            StatCard {
                title: "Refunds",
                value: 0,
                change: ChangeIndicator::from("No data yet"),
                icon: rsx! { span {} },
            }
        }
    }

    let html = common::render(app);
    assert!(html.contains("trend-none"));
    assert!(!html.contains("vs last month"));
    assert!(!html.contains("stat-card-trend-icon"));
}

#[test]
fn test_numeric_change_renders_as_percentage() {
    fn app() -> Element {
        rsx! {
            StatCard {
                title: "Conversion",
                value: 4.5,
                change: ChangeIndicator::from(12.0),
                icon: rsx! { span {} },
            }
        }
    }

    let html = common::render(app);
    assert!(html.contains("+12%"));
    assert!(html.contains("trend-up"));
}

#[test]
fn test_status_badge_matches_classifier() {
    fn app() -> Element {
        rsx! {
            for status in ["active", "pending", "cancelled", "shipped", "archived"] {
                StatusBadge { key: "{status}", status: status.to_string() }
            }
        }
    }

    let html = common::render(app);
    for status in ["active", "pending", "cancelled", "shipped", "archived"] {
        let variant = classify_status(status, None);
        assert!(html.contains(&common::variant_attr(variant)), "{status}");
    }
    assert!(html.contains(">Archived<"));
}

#[test]
fn test_status_badge_override() {
    fn app() -> Element {
        rsx! {
            StatusBadge { status: "delivered", variant: StatusVariant::Info }
        }
    }

    let html = common::render(app);
    assert!(html.contains(&common::variant_attr(StatusVariant::Info)));
    assert!(html.contains(">Delivered<"));
}
