use dioxus::prelude::*;

/// Labelled text input with an inline error line.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": error.is_some(),
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(error) = error {
                p { class: "input-error", "{error}" }
            }
        }
    }
}

/// Native select over `(value, label)` pairs.
#[component]
pub fn SelectField(
    #[props(default)] label: String,
    value: String,
    options: Vec<(String, String)>,
    on_change: EventHandler<String>,
    #[props(default)] id: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            select {
                class: "input select",
                id: "{id}",
                value: "{value}",
                onchange: move |evt| on_change.call(evt.value()),
                for (key, text) in options {
                    option { value: "{key}", selected: key == value, "{text}" }
                }
            }
        }
    }
}

#[component]
pub fn TextArea(
    #[props(default)] label: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default = 3)] rows: u32,
    #[props(default)] on_input: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            textarea {
                class: "input textarea",
                rows: "{rows}",
                placeholder: placeholder,
                value: value,
                oninput: move |evt| on_input.call(evt),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_render::render;

    #[test]
    fn error_line_renders_when_set() {
        let html = render(|| {
            rsx! {
                Input { label: "Email", error: "Email is required".to_string() }
            }
        });
        assert!(html.contains("input-error"));
        assert!(html.contains("Email is required"));
    }

    #[test]
    fn no_error_line_by_default() {
        let html = render(|| rsx! { Input { label: "Password", input_type: "password" } });
        assert!(!html.contains("input-error"));
        assert!(html.contains("type=\"password\""));
    }

    #[test]
    fn select_marks_current_option() {
        let html = render(|| {
            rsx! {
                SelectField {
                    label: "Role",
                    value: "nurse".to_string(),
                    options: vec![
                        ("doctor".to_string(), "Doctor".to_string()),
                        ("nurse".to_string(), "Nurse".to_string()),
                    ],
                    on_change: |_| {},
                }
            }
        });
        assert!(html.contains("Doctor"));
        assert!(html.contains("Nurse"));
        assert!(html.contains("selected"));
    }
}
