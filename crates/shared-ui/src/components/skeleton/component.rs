use dioxus::prelude::*;

/// Pulsing placeholder block.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// Placeholder for a page while its data loads: a title bar, a row of
/// stat cards and `rows` list lines.
#[component]
pub fn PageSkeleton(#[props(default = 4)] cards: usize, #[props(default = 5)] rows: usize) -> Element {
    rsx! {
        div { class: "page-skeleton", "aria-busy": "true",
            Skeleton { class: "skeleton-title" }
            div { class: "skeleton-cards",
                for i in 0..cards {
                    Skeleton { key: "{i}", class: "skeleton-stat" }
                }
            }
            for i in 0..rows {
                Skeleton { key: "row-{i}", class: "skeleton-row" }
            }
        }
    }
}

/// Indeterminate spinner.
#[component]
pub fn Spinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "spinner-wrapper", role: "status",
            div { class: "spinner" }
            if let Some(label) = label {
                p { class: "spinner-label", "{label}" }
            }
        }
    }
}
