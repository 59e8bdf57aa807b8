use dioxus::prelude::*;

/// Bordered surface that groups related content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Title row of a card. Children are rendered on the right as actions.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] description: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "card-header",
            div { class: "card-heading",
                h3 { class: "card-title", "{title}" }
                if let Some(description) = description {
                    p { class: "card-description", "{description}" }
                }
            }
            div { class: "card-action", {children} }
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_render::render;

    #[test]
    fn header_renders_title_and_description() {
        let html = render(|| {
            rsx! {
                Card {
                    CardHeader { title: "Recent Activity", description: "Latest system events" }
                    CardContent { "body" }
                }
            }
        });
        assert!(html.contains("Recent Activity"));
        assert!(html.contains("card-description"));
        assert!(html.contains("Latest system events"));
    }

    #[test]
    fn header_without_description_omits_it() {
        let html = render(|| rsx! { CardHeader { title: "Invoices" } });
        assert!(!html.contains("card-description"));
    }
}
