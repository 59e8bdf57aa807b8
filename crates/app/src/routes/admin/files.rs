use crate::format_helpers::format_size_mb;
use crate::hooks::{use_api, use_page_ready};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdFileText, LdImage, LdTrash2};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::{filter_items, total_size_mb, FileKind, StorageFile};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, PageHeader,
    PageSkeleton, SearchBar, TabBar, ToastType,
};

const KIND_FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("pdf", "PDF"),
    ("image", "Image"),
    ("document", "Document"),
];

fn kind_from_key(key: &str) -> Option<FileKind> {
    match key {
        "pdf" => Some(FileKind::Pdf),
        "image" => Some(FileKind::Image),
        "document" => Some(FileKind::Document),
        _ => None,
    }
}

/// Files whose name contains `query` and, when given, of the given kind.
pub fn filter_files(files: &[StorageFile], query: &str, kind: Option<FileKind>) -> Vec<StorageFile> {
    filter_items(files, query)
        .into_iter()
        .filter(|f| kind.map_or(true, |k| f.kind == k))
        .collect()
}

fn kind_icon(kind: FileKind) -> Element {
    match kind {
        FileKind::Image => rsx! { Icon::<LdImage> { icon: LdImage, width: 18, height: 18 } },
        _ => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
    }
}

#[component]
pub fn AdminFiles() -> Element {
    let ready = use_page_ready();
    let api = use_api();
    let toasts = use_toast();
    let mut files = use_signal(fixtures::storage_files);
    let mut query = use_signal(String::new);
    let mut kind_key = use_signal(|| "all".to_string());

    let download = use_callback(move |name: String| {
        let api = api.clone();
        let toasts = toasts.clone();
        notify(&toasts, ToastType::Info, "Download Started", format!("Downloading {name}..."));
        spawn(async move {
            api.download(&name).await;
            notify(&toasts, ToastType::Success, "Download Complete", format!("{name} downloaded successfully"));
        });
    });

    let visible = filter_files(&files.read(), &query(), kind_from_key(&kind_key()));
    let total = format_size_mb(total_size_mb(&files.read()));
    let count = files.read().len();
    let options = KIND_FILTERS
        .iter()
        .map(|(k, l)| (k.to_string(), l.to_string()))
        .collect::<Vec<_>>();

    rsx! {
        PageHeader { title: "File Manager", subtitle: "Browse and manage uploaded medical files" }
        if !ready() {
            PageSkeleton { cards: 0, rows: 6 }
        } else {
            Card {
                CardHeader {
                    title: "Medical Files",
                    description: "All uploaded documents and images",
                    span { class: "muted", "{count} files · {total}" }
                }
                CardContent {
                    div { class: "stack",
                        div { class: "row-actions",
                            SearchBar {
                                value: query(),
                                placeholder: "Search files...",
                                on_search: move |q: String| query.set(q),
                            }
                            TabBar {
                                options,
                                selected: kind_key(),
                                on_select: move |key: String| kind_key.set(key),
                            }
                        }
                        if visible.is_empty() {
                            p { class: "muted", "No files found" }
                        }
                        ul { class: "pick-list",
                            for file in visible {
                                li { key: "{file.id}", class: "pick-item",
                                    span { class: "file-icon", "data-kind": file.kind.label(), {kind_icon(file.kind)} }
                                    div { class: "pick-body",
                                        p { class: "pick-title", "{file.name}" }
                                        p { class: "muted",
                                            "{format_size_mb(file.size_mb)} · {file.uploaded_by} · {file.hospital}"
                                        }
                                    }
                                    span { class: "muted", "{file.uploaded_at}" }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Download",
                                        onclick: {
                                            let name = file.name.clone();
                                            move |_| download.call(name.clone())
                                        },
                                        Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Delete",
                                        onclick: move |_| {
                                            files.write().retain(|f| f.id != file.id);
                                            tracing::info!(file = file.id, "file deleted");
                                        },
                                        Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_filter_combines_with_search() {
        let files = fixtures::storage_files();
        let images = filter_files(&files, "", Some(FileKind::Image));
        assert!(!images.is_empty());
        assert!(images.iter().all(|f| f.kind == FileKind::Image));
        assert_eq!(filter_files(&files, "", None).len(), files.len());
    }

    #[test]
    fn search_ignores_case() {
        let files = fixtures::storage_files();
        let first = files[0].name.to_uppercase();
        let found = filter_files(&files, &first, None);
        assert!(found.iter().any(|f| f.id == files[0].id));
    }

    #[test]
    fn unknown_kind_key_means_all() {
        assert_eq!(kind_from_key("all"), None);
        assert_eq!(kind_from_key("pdf"), Some(FileKind::Pdf));
    }
}
