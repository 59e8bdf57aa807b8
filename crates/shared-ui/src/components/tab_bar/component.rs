use dioxus::prelude::*;

/// Segmented control over `(key, label)` options.
#[component]
pub fn TabBar(
    options: Vec<(String, String)>,
    selected: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "tab-bar", role: "tablist",
            for (key, label) in options {
                button {
                    key: "{key}",
                    class: "tab-bar-item",
                    r#type: "button",
                    role: "tab",
                    "data-state": if key == selected { "active" } else { "inactive" },
                    onclick: {
                        let key = key.clone();
                        move |_| on_select.call(key.clone())
                    },
                    "{label}"
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
    fn marks_selected_tab_active() {
        let html = render(|| {
            rsx! {
                TabBar {
                    options: vec![
                        ("email".to_string(), "Email".to_string()),
                        ("phone".to_string(), "Phone".to_string()),
                    ],
                    selected: "phone",
                    on_select: |_| {},
                }
            }
        });
        assert_eq!(html.matches("data-state=\"active\"").count(), 1);
        assert!(html.contains("Phone"));
    }
}
