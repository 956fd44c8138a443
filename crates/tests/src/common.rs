use dioxus::prelude::*;
use shared_types::{Product, StatusVariant};

/// Render a root component to an HTML string.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// The `data-variant="..."` fragment a status badge emits for `variant`.
pub fn variant_attr(variant: StatusVariant) -> String {
    format!(r#"data-variant="{}""#, variant.as_str())
}

/// A product listed in `currency`, as the catalog API would send it.
pub fn product_json(price_cents: i64, currency: &str, status: &str) -> Product {
    let raw = serde_json::json!({
        "id": "p-test",
        "name": "Test Product",
        "seller": "Test Seller",
        "price_cents": price_cents,
        "currency": currency,
        "status": status,
    });
    serde_json::from_value(raw).expect("product fixture deserializes")
}
