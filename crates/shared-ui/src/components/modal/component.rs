use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop closes it.
#[component]
pub fn Modal(
    open: bool,
    title: String,
    #[props(default)] description: Option<String>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if let Some(description) = description {
                        p { class: "modal-description", "{description}" }
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

/// Right-aligned button row at the bottom of a modal.
#[component]
pub fn ModalActions(children: Element) -> Element {
    rsx! {
        div { class: "modal-actions", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_render::render;

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render(|| rsx! { Modal { open: false, title: "Add New Patient", on_close: |_| {}, "form" } });
        assert!(!html.contains("Add New Patient"));
    }

    #[test]
    fn open_modal_renders_title_and_body() {
        let html = render(|| {
            rsx! {
                Modal {
                    open: true,
                    title: "Update Vitals",
                    description: "Record the latest readings",
                    on_close: |_| {},
                    p { "fields" }
                }
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Update Vitals"));
        assert!(html.contains("fields"));
    }
}
