use pretty_assertions::assert_eq;
use shared_types::{currency_symbol, format_price, supported_currencies};

use crate::common;

const SAMPLE_AMOUNTS: &[i64] = &[0, 1, 99, 2999, 100_000, 123_456_789, -4250, i64::MAX, i64::MIN];

#[test]
fn test_every_currency_formats_with_its_symbol() {
    for config in supported_currencies() {
        for &amount in SAMPLE_AMOUNTS {
            let formatted = format_price(amount, config.code);
            assert!(!formatted.is_empty(), "{} {amount} formatted empty", config.code);
            assert!(
                formatted.contains(config.symbol),
                "{} {amount} formatted as {formatted:?} without {}",
                config.code,
                config.symbol
            );
        }
    }
}

#[test]
fn test_negative_amounts_start_with_minus() {
    for config in supported_currencies() {
        assert!(format_price(-100, config.code).starts_with('-'), "{}", config.code);
    }
}

#[test]
fn test_symbols_agree_with_table() {
    for config in supported_currencies() {
        assert_eq!(currency_symbol(config.code), config.symbol);
    }
    assert_eq!(currency_symbol("XXX"), "$");
}

#[test]
fn test_codes_are_unique() {
    let mut codes: Vec<&str> = supported_currencies().iter().map(|c| c.code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), supported_currencies().len());
}

#[test]
fn test_reference_outputs() {
    assert_eq!(format_price(2999, "USD"), "$29.99");
    assert_eq!(format_price(0, "EUR"), "0\u{a0}€");
}

#[test]
fn test_deserialized_product_formats_in_listing_currency() {
    let product = common::product_json(499_900, "JPY", "active");
    assert_eq!(format_price(product.price_cents, &product.currency), "¥4,999");

    let product = common::product_json(18_990, "BRL", "active");
    assert_eq!(format_price(product.price_cents, &product.currency), "R$\u{a0}189,9");
}
