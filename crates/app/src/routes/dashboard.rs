use crate::format_helpers::format_date_human;
use crate::mock;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDollarSign, LdRotateCcw, LdShoppingCart, LdStore};
use dioxus_free_icons::Icon;
use shared_types::{
    classify_status, currency_config, format_price, AppConfig, ChangeIndicator, Order, StatusVariant,
};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, StatCard, StatusBadge};

/// Revenue booked in `currency`, leaving out orders that failed or were
/// reversed.
fn revenue_cents(orders: &[Order], currency: &str) -> i64 {
    orders
        .iter()
        .filter(|o| o.currency.eq_ignore_ascii_case(currency))
        .filter(|o| classify_status(&o.status, None) != StatusVariant::Error)
        .map(|o| o.total_cents)
        .sum()
}

/// Dashboard page with headline metrics and the latest orders.
#[component]
pub fn Dashboard() -> Element {
    let config: AppConfig = use_context();
    let orders = use_hook(mock::orders);

    // Unconfigured codes resolve to the formatter's fallback currency.
    let currency = currency_config(&config.display.default_currency).code;
    let revenue = format_price(revenue_cents(&orders, currency), currency);
    let order_count = orders.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-stats",
            StatCard {
                title: format!("Revenue ({currency})"),
                value: revenue,
                change: ChangeIndicator::from("+8.1%"),
                icon: rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: 20, height: 20 } },
                icon_color: "#16a34a".to_string(),
            }
            StatCard {
                title: "Orders",
                value: order_count,
                change: ChangeIndicator::from("+15.2%"),
                icon: rsx! { Icon::<LdShoppingCart> { icon: LdShoppingCart, width: 20, height: 20 } },
            }
            StatCard {
                title: "Active Sellers",
                value: 312,
                change: ChangeIndicator::from(-3),
                icon: rsx! { Icon::<LdStore> { icon: LdStore, width: 20, height: 20 } },
                icon_color: "#f59e0b".to_string(),
            }
            StatCard {
                title: "Refund Requests",
                value: 0,
                change: ChangeIndicator::from("No data yet"),
                icon: rsx! { Icon::<LdRotateCcw> { icon: LdRotateCcw, width: 20, height: 20 } },
                icon_color: "#dc2626".to_string(),
            }
        }

        Card {
            class: "dashboard-orders",
            CardHeader {
                CardTitle { "Recent Orders" }
            }
            CardContent {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Order" }
                            th { "Customer" }
                            th { "Placed" }
                            th { "Status" }
                            th { class: "numeric", "Total" }
                        }
                    }
                    tbody {
                        for order in orders.iter() {
                            tr { key: "{order.id}",
                                td { class: "mono", "{order.id}" }
                                td { "{order.customer}" }
                                td { {format_date_human(&order.placed_at)} }
                                td { StatusBadge { status: order.status.clone() } }
                                td { class: "numeric", {format_price(order.total_cents, &order.currency)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
