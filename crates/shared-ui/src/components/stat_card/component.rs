use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdTrendingDown, LdTrendingUp};
use dioxus_free_icons::Icon;
use shared_types::{parse_change, ChangeIndicator, StatValue, Trend, TrendDirection};

use crate::class_names;
use crate::components::{Card, CardContent};

/// Icon tint used when the caller does not pass `icon_color`.
const DEFAULT_ICON_COLOR: &str = "#4f46e5";

/// Dashboard metric card: a title, a headline value, an optional
/// month-over-month change, and an icon.
///
/// The change is classified by [`parse_change`]; this component only
/// renders the resulting [`Trend`].
#[component]
pub fn StatCard(
    title: String,
    #[props(into)] value: StatValue,
    #[props(default)] change: Option<ChangeIndicator>,
    icon: Element,
    #[props(default)] icon_color: Option<String>,
) -> Element {
    let color = icon_color.unwrap_or_else(|| DEFAULT_ICON_COLOR.to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card {
            class: "stat-card",
            CardContent {
                div { class: "stat-card-body",
                    div { class: "stat-card-text",
                        p { class: "stat-card-title", "{title}" }
                        p { class: "stat-card-value", "{value}" }
                        if let Some(change) = &change {
                            TrendLine {
                                label: change.to_string(),
                                trend: parse_change(change),
                            }
                        }
                    }
                    div {
                        class: "stat-card-icon",
                        style: "color: {color};",
                        {icon}
                    }
                }
            }
        }
    }
}

fn trend_class(trend: &Trend) -> &'static str {
    if !trend.has_data {
        return "trend-none";
    }
    match trend.direction {
        TrendDirection::Up => "trend-up",
        TrendDirection::Down => "trend-down",
        TrendDirection::Neutral => "trend-neutral",
    }
}

/// The change row under the value.
#[component]
fn TrendLine(label: String, trend: Trend) -> Element {
    let class = class_names([Some("stat-card-change"), Some(trend_class(&trend))]);

    rsx! {
        div {
            class: "{class}",
            "data-trend": trend.direction.as_str(),
            if trend.shows_icon() {
                match trend.direction {
                    TrendDirection::Up => rsx! {
                        Icon::<LdTrendingUp> { class: "stat-card-trend-icon", icon: LdTrendingUp, width: 16, height: 16 }
                    },
                    TrendDirection::Down => rsx! {
                        Icon::<LdTrendingDown> { class: "stat-card-trend-icon", icon: LdTrendingDown, width: 16, height: 16 }
                    },
                    TrendDirection::Neutral => rsx! {},
                }
            }
            span { class: "stat-card-change-value", "{label}" }
            if trend.shows_comparison() {
                span { class: "stat-card-change-suffix", "vs last month" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[test]
    fn positive_percentage_renders_up_with_suffix() {
        fn app() -> Element {
            rsx! {
                StatCard {
                    title: "Orders",
                    value: StatValue::from(1284),
                    change: ChangeIndicator::from("+15.2%"),
                    icon: rsx! { span { class: "icon-stub" } },
                }
            }
        }
        let html = render(app);
        assert!(html.contains("trend-up"));
        assert!(html.contains("stat-card-trend-icon"));
        assert!(html.contains("+15.2%"));
        assert!(html.contains("vs last month"));
        assert!(html.contains(">1284<"));
    }

    #[test]
    fn negative_percentage_renders_down() {
        fn app() -> Element {
            rsx! {
                StatCard {
                    title: "Sellers",
                    value: "312",
                    change: ChangeIndicator::from("-3%"),
                    icon: rsx! { span { class: "icon-stub" } },
                }
            }
        }
        let html = render(app);
        assert!(html.contains("trend-down"));
        assert!(!html.contains("trend-up"));
        assert!(html.contains("stat-card-trend-icon"));
        assert!(html.contains("vs last month"));
    }

    #[test]
    fn no_data_sentinel_hides_icon_and_suffix() {
        fn app() -> Element {
            rsx! {
                StatCard {
                    title: "Refunds",
                    value: "0",
                    change: ChangeIndicator::from("No data yet"),
                    icon: rsx! { span { class: "icon-stub" } },
                }
            }
        }
        let html = render(app);
        assert!(html.contains("trend-none"));
        assert!(html.contains("No data yet"));
        assert!(!html.contains("stat-card-trend-icon"));
        assert!(!html.contains("vs last month"));
    }

    #[test]
    fn zero_change_is_neutral() {
        fn app() -> Element {
            rsx! {
                StatCard {
                    title: "Disputes",
                    value: "4",
                    change: ChangeIndicator::from(0),
                    icon: rsx! { span { class: "icon-stub" } },
                }
            }
        }
        let html = render(app);
        assert!(html.contains("trend-neutral"));
        assert!(!html.contains("stat-card-trend-icon"));
    }

    #[test]
    fn absent_change_renders_no_trend_row() {
        fn app() -> Element {
            rsx! {
                StatCard {
                    title: "Revenue",
                    value: "$12,400",
                    icon: rsx! { span { class: "icon-stub" } },
                }
            }
        }
        let html = render(app);
        assert!(!html.contains("stat-card-change"));
        assert!(html.contains("$12,400"));
        assert!(html.contains("icon-stub"));
    }

    #[test]
    fn icon_color_defaults_and_overrides() {
        fn default_color() -> Element {
            rsx! {
                StatCard { title: "A", value: "1", icon: rsx! { span {} } }
            }
        }
        fn custom_color() -> Element {
            rsx! {
                StatCard {
                    title: "A",
                    value: "1",
                    icon: rsx! { span {} },
                    icon_color: "#f59e0b".to_string(),
                }
            }
        }
        assert!(render(default_color).contains(DEFAULT_ICON_COLOR));
        assert!(render(custom_color).contains("#f59e0b"));
    }

    #[test]
    fn trend_class_mapping() {
        let no_data = Trend { direction: TrendDirection::Neutral, has_data: false };
        assert_eq!(trend_class(&no_data), "trend-none");
        assert_eq!(trend_class(&Trend::NONE), "trend-neutral");
    }
}
