use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight};
use dioxus_free_icons::Icon;

// ─── Context ───────────────────────────────────────────────────────────

/// Rail width state. Collapsing hides labels and headings, never entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub collapsed: bool,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        Self {
            collapsed: !self.collapsed,
        }
    }
}

/// Provides sidebar state context to children.
#[component]
pub fn SidebarProvider(#[props(default = false)] default_collapsed: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState {
        collapsed: default_collapsed,
    });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-collapsed": if state().collapsed { "true" } else { "false" },
            {children}
        }
    }
}

pub fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout components ─────────────────────────────────────────────────

/// The rail container.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if state().collapsed { "collapsed" } else { "expanded" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Scrollable middle section of the rail.
#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        nav {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu-item", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// One rail entry: icon always, label only while the rail is expanded.
/// A collapsed rail keeps the label as the hover title.
#[component]
pub fn SidebarMenuButton(
    label: String,
    #[props(default = false)] active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    icon: Element,
) -> Element {
    let state = use_sidebar();
    let collapsed = state().collapsed;

    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            title: if collapsed { label.clone() } else { String::new() },
            "aria-current": if active { "page" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            span { class: "sidebar-menu-icon", {icon} }
            if !collapsed {
                span { class: "sidebar-menu-label", "{label}" }
            }
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Chevron that collapses or expands the rail.
#[component]
pub fn SidebarTrigger(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let mut state = use_sidebar();
    let collapsed = state().collapsed;

    let base = vec![Attribute::new("class", "sidebar-trigger", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
            "aria-expanded": if collapsed { "false" } else { "true" },
            onclick: move |_| {
                let next = state().toggled();
                state.set(next);
            },
            ..merged,
            if collapsed {
                Icon::<LdChevronRight> { icon: LdChevronRight, width: 18, height: 18 }
            } else {
                Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 18, height: 18 }
            }
        }
    }
}

#[component]
pub fn SidebarSeparator(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "sidebar-separator", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        hr {
            ..merged,
        }
    }
}

/// Main content column beside the rail.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-inset", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_render::render;
    use pretty_assertions::assert_eq;

    fn rail(collapsed: bool) -> Element {
        rsx! {
            SidebarProvider { default_collapsed: collapsed,
                Sidebar {
                    SidebarContent {
                        SidebarMenu {
                            SidebarMenuItem {
                                SidebarMenuButton { label: "Patients", active: true, icon: rsx! { "P" } }
                            }
                            SidebarMenuItem {
                                SidebarMenuButton { label: "Reports", icon: rsx! { "R" } }
                            }
                        }
                    }
                    SidebarFooter { SidebarTrigger {} }
                }
            }
        }
    }

    #[test]
    fn toggled_flips_collapsed() {
        let state = SidebarState::default();
        assert!(!state.collapsed);
        assert!(state.toggled().collapsed);
        assert_eq!(state.toggled().toggled(), state);
    }

    #[test]
    fn expanded_rail_shows_labels() {
        let html = render(|| rail(false));
        assert!(html.contains("data-state=\"expanded\""));
        assert_eq!(html.matches("sidebar-menu-label").count(), 2);
        assert!(html.contains("Collapse sidebar"));
    }

    #[test]
    fn collapsed_rail_keeps_entries_but_hides_labels() {
        let html = render(|| rail(true));
        assert!(html.contains("data-state=\"collapsed\""));
        assert_eq!(html.matches("sidebar-menu-button").count(), 2);
        assert_eq!(html.matches("sidebar-menu-label").count(), 0);
        assert!(html.contains("title=\"Patients\""));
    }

    #[test]
    fn active_entry_is_marked() {
        let html = render(|| rail(false));
        assert_eq!(html.matches("data-active=\"true\"").count(), 1);
        assert!(html.contains("aria-current=\"page\""));
    }
}
