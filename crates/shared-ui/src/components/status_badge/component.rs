use dioxus::prelude::*;
use shared_types::{classify_status, humanize_status, StatusVariant};

/// Pill label for a free-text status, colored by its severity.
///
/// `variant` overrides the lookup table when present.
#[component]
pub fn StatusBadge(
    status: String,
    #[props(default)] variant: Option<StatusVariant>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let resolved = classify_status(&status, variant);
    let palette = resolved.palette();
    let label = humanize_status(&status);

    let base = vec![
        Attribute::new("class", "status-badge", None, false),
        Attribute::new("data-variant", resolved.as_str(), None, false),
        Attribute::new(
            "style",
            format!(
                "background-color: {}; color: {};",
                palette.background, palette.foreground
            ),
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            "{label}"
        }
    }
}
