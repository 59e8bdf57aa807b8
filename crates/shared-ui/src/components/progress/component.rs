use dioxus::prelude::*;

/// Horizontal fill bar for a 0-100 percentage.
#[component]
pub fn ProgressBar(value: u8) -> Element {
    let pct = value.min(100);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "progress",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{pct}",
            div { class: "progress-indicator", style: "width: {pct}%" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_render::render;

    #[test]
    fn clamps_to_hundred() {
        let html = render(|| rsx! { ProgressBar { value: 140 } });
        assert!(html.contains("width: 100%"));
        assert!(html.contains("aria-valuenow=\"100\""));
    }
}
