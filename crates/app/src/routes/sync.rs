use std::collections::HashSet;

use crate::format_helpers::format_size_mb;
use crate::hooks::{use_api, use_page_ready};
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCloud, LdDownload, LdEye, LdEyeOff, LdRefreshCw, LdUpload};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::{Role, SyncDirection, SyncOperation, SyncStatus};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    PageHeader, PageSkeleton, ProgressBar, StatCard, StatusBadge, TabBar, ToastType, Tone,
};

/// Direction filter above the operations table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncFilter {
    #[default]
    All,
    Upload,
    Download,
}

impl SyncFilter {
    const ALL: [SyncFilter; 3] = [SyncFilter::All, SyncFilter::Upload, SyncFilter::Download];

    fn key(self) -> &'static str {
        match self {
            SyncFilter::All => "all",
            SyncFilter::Upload => "upload",
            SyncFilter::Download => "download",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SyncFilter::All => "All",
            SyncFilter::Upload => "Uploads",
            SyncFilter::Download => "Downloads",
        }
    }

    fn from_key(key: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.key() == key).unwrap_or_default()
    }

    pub fn admits(self, op: &SyncOperation) -> bool {
        match self {
            SyncFilter::All => true,
            SyncFilter::Upload => op.direction == SyncDirection::Upload,
            SyncFilter::Download => op.direction == SyncDirection::Download,
        }
    }
}

/// Operations passing the direction filter. Hidden ones are dropped unless
/// `show_hidden` is set.
pub fn visible_operations(
    ops: &[SyncOperation],
    filter: SyncFilter,
    hidden: &HashSet<u32>,
    show_hidden: bool,
) -> Vec<SyncOperation> {
    ops.iter()
        .filter(|op| filter.admits(op))
        .filter(|op| show_hidden || !hidden.contains(&op.id))
        .cloned()
        .collect()
}

fn sync_tone(status: SyncStatus) -> Tone {
    match status {
        SyncStatus::Completed => Tone::Success,
        SyncStatus::Pending => Tone::Warning,
        SyncStatus::Failed => Tone::Danger,
    }
}

/// Upload and download history with bulk sync and download.
#[component]
pub fn SyncView(role: Role) -> Element {
    let ready = use_page_ready();
    let api = use_api();
    let toasts = use_toast();
    let mut ops = use_signal(fixtures::sync_operations);
    let mut filter = use_signal(SyncFilter::default);
    let mut hidden = use_signal(HashSet::<u32>::new);
    let mut show_hidden = use_signal(|| false);
    let mut syncing = use_signal(|| false);
    let mut downloading = use_signal(|| false);

    let sync_all = {
        let api = api.clone();
        let toasts = toasts.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            let toasts = toasts.clone();
            syncing.set(true);
            notify(&toasts, ToastType::Info, "Sync Started", "Synchronizing all files to cloud...");
            spawn(async move {
                let done = api.sync_all(ops()).await;
                ops.set(done);
                syncing.set(false);
                notify(&toasts, ToastType::Success, "Sync Completed", "All files synchronized successfully");
            });
        }
    };

    let download_all = {
        let api = api.clone();
        let toasts = toasts.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            let toasts = toasts.clone();
            downloading.set(true);
            notify(&toasts, ToastType::Info, "Download Started", "Downloading all files...");
            spawn(async move {
                api.download_all().await;
                downloading.set(false);
                notify(&toasts, ToastType::Success, "Download Complete", "All files downloaded successfully");
            });
        }
    };

    let toggle_hidden = {
        let toasts = toasts.clone();
        move |id: u32| {
            let now_hidden = {
                let mut set = hidden.write();
                if set.remove(&id) {
                    false
                } else {
                    set.insert(id);
                    true
                }
            };
            if now_hidden {
                notify(&toasts, ToastType::Info, "File Hidden", "File is now hidden from list");
            } else {
                notify(&toasts, ToastType::Info, "File Visible", "File is now visible");
            }
        }
    };
    let toggle_hidden = use_callback(toggle_hidden);

    let download_one = use_callback(move |name: String| {
        let api = api.clone();
        let toasts = toasts.clone();
        notify(&toasts, ToastType::Info, "Download Started", format!("Downloading {name}..."));
        spawn(async move {
            api.download(&name).await;
            notify(&toasts, ToastType::Success, "Download Complete", format!("{name} downloaded successfully"));
        });
    });

    let all = ops.read().clone();
    let completed = all.iter().filter(|o| o.status == SyncStatus::Completed).count();
    let pending = all.iter().filter(|o| o.status == SyncStatus::Pending).count();
    let total_mb: f64 = all.iter().map(|o| o.size_mb).sum();
    let rows = visible_operations(&all, filter(), &hidden.read(), show_hidden());
    let hidden_count = hidden.read().len();
    let options = SyncFilter::ALL
        .iter()
        .map(|f| (f.key().to_string(), f.label().to_string()))
        .collect::<Vec<_>>();

    rsx! {
        PageHeader {
            title: "Cloud Sync and Storage",
            subtitle: "Manage file uploads, downloads and synchronization",
            if role == Role::Admin {
                Link { class: "button-link", to: Route::AdminFiles {}, "Browse Files" }
            }
        }
        if !ready() {
            PageSkeleton { cards: 4, rows: 6 }
        } else {
            div { class: "stat-grid",
                StatCard {
                    label: "Total Operations",
                    value: "{all.len()}",
                    icon: rsx! { Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Completed",
                    value: "{completed}",
                    icon: rsx! { Icon::<LdCloud> { icon: LdCloud, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Pending",
                    value: "{pending}",
                    icon: rsx! { Icon::<LdUpload> { icon: LdUpload, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Total Size",
                    value: format_size_mb(total_mb),
                    icon: rsx! { Icon::<LdDownload> { icon: LdDownload, width: 18, height: 18 } },
                }
            }
            Card {
                CardHeader { title: "Sync Operations", description: "Upload and download history",
                    div { class: "row-actions",
                        Button { loading: syncing(), onclick: sync_all, "Sync All" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            loading: downloading(),
                            onclick: download_all,
                            "Download All"
                        }
                    }
                }
                CardContent {
                    div { class: "stack",
                        div { class: "row-actions",
                            TabBar {
                                options,
                                selected: filter().key().to_string(),
                                on_select: move |key: String| filter.set(SyncFilter::from_key(&key)),
                            }
                            if hidden_count > 0 {
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: move |_| show_hidden.set(!show_hidden()),
                                    if show_hidden() { "Hide hidden files" } else { "Show hidden ({hidden_count})" }
                                }
                            }
                        }
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "File" }
                                DataTableColumn { "Type" }
                                DataTableColumn { "Status" }
                                DataTableColumn { "Progress" }
                                DataTableColumn { "Size" }
                                DataTableColumn { "Actions" }
                            }
                            DataTableBody {
                                if rows.is_empty() {
                                    DataTableEmpty { colspan: 6, message: "No operations to show" }
                                }
                                for op in rows {
                                    DataTableRow { key: "{op.id}",
                                        DataTableCell {
                                            p { class: "pick-title", "{op.file_name}" }
                                            p { class: "muted", "{op.timestamp}" }
                                        }
                                        DataTableCell { "{op.direction.label()}" }
                                        DataTableCell {
                                            StatusBadge { tone: sync_tone(op.status), "{op.status.label()}" }
                                        }
                                        DataTableCell { ProgressBar { value: op.progress } }
                                        DataTableCell { "{format_size_mb(op.size_mb)}" }
                                        DataTableCell {
                                            div { class: "row-actions",
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    title: if hidden.read().contains(&op.id) { "Show" } else { "Hide" },
                                                    onclick: move |_| toggle_hidden.call(op.id),
                                                    if hidden.read().contains(&op.id) {
                                                        Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                                                    } else {
                                                        Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                                                    }
                                                }
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    title: "Download",
                                                    disabled: op.status != SyncStatus::Completed,
                                                    onclick: {
                                                        let name = op.file_name.clone();
                                                        move |_| download_one.call(name.clone())
                                                    },
                                                    Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
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
        }
    }
}

#[component]
pub fn AdminSync() -> Element {
    rsx! { SyncView { role: Role::Admin } }
}

#[component]
pub fn DoctorSync() -> Element {
    rsx! { SyncView { role: Role::Doctor } }
}
