use crate::hooks::{use_api, use_page_ready};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdDownload, LdEye, LdFileText, LdPill};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::{MedicalRecord, RecordKind};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, PageHeader,
    PageSkeleton, StatCard, StatusBadge, TabBar, ToastType, Tone,
};

const KINDS: [RecordKind; 3] = [RecordKind::Prescription, RecordKind::Report, RecordKind::Appointment];

fn kind_key(kind: Option<RecordKind>) -> &'static str {
    match kind {
        None => "all",
        Some(RecordKind::Prescription) => "prescription",
        Some(RecordKind::Report) => "report",
        Some(RecordKind::Appointment) => "appointment",
    }
}

fn kind_from_key(key: &str) -> Option<RecordKind> {
    KINDS.into_iter().find(|k| kind_key(Some(*k)) == key)
}

fn kind_icon(kind: RecordKind) -> Element {
    match kind {
        RecordKind::Prescription => rsx! { Icon::<LdPill> { icon: LdPill, width: 18, height: 18 } },
        RecordKind::Report => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        RecordKind::Appointment => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
    }
}

fn kind_tone(kind: RecordKind) -> Tone {
    match kind {
        RecordKind::Prescription => Tone::Info,
        RecordKind::Report => Tone::Success,
        RecordKind::Appointment => Tone::Warning,
    }
}

/// Records of `kind`, or all of them.
pub fn records_of(records: &[MedicalRecord], kind: Option<RecordKind>) -> Vec<MedicalRecord> {
    records
        .iter()
        .filter(|r| kind.map_or(true, |k| r.kind == k))
        .cloned()
        .collect()
}

#[component]
pub fn PatientRecords() -> Element {
    let ready = use_page_ready();
    let api = use_api();
    let toasts = use_toast();
    let records = use_hook(fixtures::medical_records);
    let mut kind = use_signal(|| Option::<RecordKind>::None);
    let mut expanded = use_signal(|| Option::<u32>::None);

    let download = use_callback({
        let toasts = toasts.clone();
        move |record: MedicalRecord| {
            let api = api.clone();
            let toasts = toasts.clone();
            notify(&toasts, ToastType::Info, "Download Started", format!("{} is downloading...", record.title));
            spawn(async move {
                api.download_record(&record).await;
                notify(
                    &toasts,
                    ToastType::Success,
                    "Download Completed",
                    format!("{} has been downloaded successfully", record.title),
                );
            });
        }
    });

    let toggle = use_callback(move |record: MedicalRecord| {
        if expanded() == Some(record.id) {
            expanded.set(None);
        } else {
            expanded.set(Some(record.id));
            notify(&toasts, ToastType::Info, "Record Opened", format!("Viewing {}", record.title));
        }
    });

    let count = |k: RecordKind| records.iter().filter(|r| r.kind == k).count();
    let options = std::iter::once(None)
        .chain(KINDS.into_iter().map(Some))
        .map(|k| {
            let label = k.map_or("All", |k| k.label());
            (kind_key(k).to_string(), label.to_string())
        })
        .collect::<Vec<_>>();
    let visible = records_of(&records, kind());

    rsx! {
        PageHeader { title: "Medical Records", subtitle: "View your prescriptions, reports, and appointments" }
        if !ready() {
            PageSkeleton { cards: 4, rows: 4 }
        } else {
            div { class: "stat-grid",
                StatCard { label: "Total Records", value: "{records.len()}" }
                StatCard { label: "Prescriptions", value: "{count(RecordKind::Prescription)}" }
                StatCard { label: "Reports", value: "{count(RecordKind::Report)}" }
                StatCard { label: "Appointments", value: "{count(RecordKind::Appointment)}" }
            }
            Card {
                CardHeader { title: "Your Records", description: "All your medical documents and appointments" }
                CardContent {
                    div { class: "stack",
                        TabBar {
                            options,
                            selected: kind_key(kind()).to_string(),
                            on_select: move |key: String| kind.set(kind_from_key(&key)),
                        }
                        if visible.is_empty() {
                            p { class: "muted", "No records of this type" }
                        }
                        ul { class: "pick-list",
                            for record in visible {
                                li {
                                    key: "{record.id}",
                                    class: "pick-item record-item",
                                    "data-expanded": expanded() == Some(record.id),
                                    span { class: "file-icon", {kind_icon(record.kind)} }
                                    div { class: "pick-body",
                                        p { class: "pick-title", "{record.title}" }
                                        p { class: "muted", "{record.doctor} · {record.date}" }
                                        if expanded() == Some(record.id) {
                                            p { class: "record-details", "{record.details}" }
                                        }
                                    }
                                    StatusBadge { tone: kind_tone(record.kind), "{record.kind.label()}" }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "View",
                                        onclick: {
                                            let record = record.clone();
                                            move |_| toggle.call(record.clone())
                                        },
                                        Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Download",
                                        onclick: {
                                            let record = record.clone();
                                            move |_| download.call(record.clone())
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_filter_keeps_matching_records() {
        let records = fixtures::medical_records();
        let prescriptions = records_of(&records, Some(RecordKind::Prescription));
        assert_eq!(prescriptions.len(), 2);
        assert_eq!(records_of(&records, None).len(), records.len());
    }

    #[test]
    fn kind_keys_round_trip() {
        for kind in KINDS {
            assert_eq!(kind_from_key(kind_key(Some(kind))), Some(kind));
        }
        assert_eq!(kind_from_key("all"), None);
    }
}
