use pretty_assertions::assert_eq;
use shared_types::{classify_status, humanize_status, StatusVariant};

#[test]
fn test_reference_classifications() {
    assert_eq!(classify_status("active", None), StatusVariant::Success);
    assert_eq!(classify_status("FLAGGED", None), StatusVariant::Error);
    assert_eq!(classify_status("unknown-status", None), StatusVariant::Neutral);
}

#[test]
fn test_override_wins_for_every_variant() {
    for status in ["active", "flagged", "pending", "shipped", "archived", "", "whatever"] {
        for &variant in shared_types::status::ALL_VARIANTS {
            assert_eq!(classify_status(status, Some(variant)), variant, "{status:?}");
        }
    }
}

#[test]
fn test_variants_have_distinct_palettes() {
    let variants = shared_types::status::ALL_VARIANTS;
    for (i, a) in variants.iter().enumerate() {
        for b in &variants[i + 1..] {
            assert_ne!(a.palette(), b.palette(), "{a:?} and {b:?} share colors");
        }
    }
}

#[test]
fn test_humanized_labels() {
    assert_eq!(humanize_status("pending_review"), "Pending Review");
    assert_eq!(humanize_status("out-of-stock"), "Out Of Stock");
}
