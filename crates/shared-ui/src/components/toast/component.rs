use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{consume_toast, use_toast, ToastOptions, ToastType, Toasts};

#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

/// Show a toast with a title line and a description line.
pub fn notify(toasts: &Toasts, kind: ToastType, title: impl Into<String>, description: impl Into<String>) {
    let options = ToastOptions::new().description(description.into());
    let title = title.into();
    match kind {
        ToastType::Success => toasts.success(title, options),
        ToastType::Error => toasts.error(title, options),
        ToastType::Warning => toasts.warning(title, options),
        ToastType::Info => toasts.info(title, options),
    }
}
