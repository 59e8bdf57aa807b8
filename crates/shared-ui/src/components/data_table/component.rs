use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Wraps `th` cells in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Table row, clickable when a handler is given.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width row shown when a filter leaves nothing to list.
#[component]
pub fn DataTableEmpty(colspan: u32, message: String) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_render::render;

    #[test]
    fn empty_row_spans_columns() {
        let html = render(|| {
            rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Status" }
                    }
                    DataTableBody {
                        DataTableEmpty { colspan: 2, message: "No patients found" }
                    }
                }
            }
        });
        assert!(html.contains("colspan=\"2\""));
        assert!(html.contains("No patients found"));
    }

    #[test]
    fn rows_without_handler_are_not_clickable() {
        let html = render(|| {
            rsx! {
                DataTable {
                    DataTableBody {
                        DataTableRow { DataTableCell { "P001" } }
                    }
                }
            }
        });
        assert!(html.contains("data-table-row"));
        assert!(!html.contains("clickable"));
    }
}
