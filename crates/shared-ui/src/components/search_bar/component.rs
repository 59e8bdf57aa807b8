use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;

/// Filter row: a search box followed by any extra controls.
#[component]
pub fn SearchBar(
    value: String,
    placeholder: String,
    on_search: EventHandler<String>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            div { class: "search-field",
                span { class: "search-icon",
                    Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                }
                input {
                    class: "search-input",
                    r#type: "search",
                    value: value,
                    placeholder: placeholder,
                    oninput: move |evt| on_search.call(evt.value()),
                }
            }
            {children}
        }
    }
}
