use dioxus::prelude::*;

/// Page heading with subtitle; children become the action buttons.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_render::render;

    #[test]
    fn renders_title_and_subtitle() {
        let html = render(|| {
            rsx! {
                PageHeader { title: "Prescriptions", subtitle: "Manage patient prescriptions" }
            }
        });
        assert!(html.contains("<h1 class=\"page-title\">Prescriptions</h1>"));
        assert!(html.contains("Manage patient prescriptions"));
    }
}
