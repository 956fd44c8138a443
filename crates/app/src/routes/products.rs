use crate::mock;
use dioxus::prelude::*;
use shared_types::{format_price, supported_currencies, Product};
use shared_ui::{Button, ButtonVariant, Card, CardContent, Input, StatusBadge};

/// Filters the listing by currency (`None` keeps every currency) and a
/// case-insensitive search over product and seller names.
fn filter_products(products: &[Product], currency: Option<&str>, search: &str) -> Vec<Product> {
    let query = search.trim().to_lowercase();
    products
        .iter()
        .filter(|p| currency.is_none_or(|code| p.currency.eq_ignore_ascii_case(code)))
        .filter(|p| {
            query.is_empty()
                || p.name.to_lowercase().contains(&query)
                || p.seller.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Products page: the marketplace catalog with a listing-currency filter and search.
#[component]
pub fn Products() -> Element {
    let products = use_hook(mock::products);
    let mut currency = use_signal(|| Option::<&'static str>::None);
    let mut search_query = use_signal(String::new);

    let visible = filter_products(&products, currency(), &search_query());
    let all_selected = currency().is_none();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./products.css") }

        div { class: "products-toolbar",
            div { class: "currency-picker", role: "group", "aria-label": "Listing currency",
                Button {
                    variant: ButtonVariant::Ghost,
                    pressed: all_selected,
                    onclick: move |_| currency.set(None),
                    "All"
                }
                for config in supported_currencies().iter() {
                    Button {
                        key: "{config.code}",
                        variant: ButtonVariant::Ghost,
                        pressed: currency() == Some(config.code),
                        title: "{config.symbol}",
                        onclick: move |_| currency.set(Some(config.code)),
                        span { class: "currency-flag", "{config.flag}" }
                        "{config.code}"
                    }
                }
            }
            Input {
                class: "products-search",
                placeholder: "Search products or sellers",
                value: search_query(),
                on_input: move |e: FormEvent| search_query.set(e.value()),
            }
        }

        Card {
            CardContent {
                if visible.is_empty() {
                    p { class: "page-empty", "No products match the current filters." }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Product" }
                                th { "Seller" }
                                th { "Status" }
                                th { class: "numeric", "Price" }
                            }
                        }
                        tbody {
                            for product in visible.iter() {
                                tr { key: "{product.id}",
                                    td { "{product.name}" }
                                    td { "{product.seller}" }
                                    td { StatusBadge { status: product.status.clone() } }
                                    td { class: "numeric", {format_price(product.price_cents, &product.currency)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
