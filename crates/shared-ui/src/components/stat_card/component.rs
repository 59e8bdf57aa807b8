use dioxus::prelude::*;

/// Headline figure with an optional change line beneath it.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] change: Option<String>,
    /// Renders the change line in the falling colour.
    #[props(default = false)]
    decrease: bool,
    #[props(default)] icon: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            div { class: "stat-card-top",
                span { class: "stat-card-label", "{label}" }
                span { class: "stat-card-icon", {icon} }
            }
            div { class: "stat-card-value", "{value}" }
            if let Some(change) = change {
                p {
                    class: "stat-card-change",
                    "data-trend": if decrease { "down" } else { "up" },
                    "{change}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_render::render;

    #[test]
    fn decrease_marks_trend_down() {
        let html = render(|| {
            rsx! {
                StatCard { label: "Pending Syncs", value: "12", change: "-3 from yesterday", decrease: true }
            }
        });
        assert!(html.contains("data-trend=\"down\""));
        assert!(html.contains("-3 from yesterday"));
    }

    #[test]
    fn change_line_is_optional() {
        let html = render(|| rsx! { StatCard { label: "Storage Used", value: "4.2 GB" } });
        assert!(!html.contains("stat-card-change"));
    }
}
