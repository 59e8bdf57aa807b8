use crate::format_helpers::format_date_human;
use crate::hooks::{use_api, use_page_ready};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdPlus};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::{AppError, NewReportRequest, NurseReport, ReportStatus};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, Input, Modal,
    ModalActions, PageHeader, PageSkeleton, SelectField, StatusBadge, TextArea, ToastType, Tone,
};

const REPORT_TYPES: &[&str] = &[
    "Vital Signs Report",
    "Medication Administration",
    "Patient Assessment",
    "Wound Care Report",
    "Fluid Intake & Output",
    "Patient Education",
];

const SHIFTS: &[&str] = &["Morning", "Evening", "Night"];

fn options(values: &[&str]) -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select...".to_string()))
        .chain(values.iter().map(|v| (v.to_string(), v.to_string())))
        .collect()
}

#[component]
pub fn NurseReports() -> Element {
    let ready = use_page_ready();
    let toasts = use_toast();
    let mut reports = use_signal(fixtures::nurse_reports);
    let mut creating = use_signal(|| false);

    rsx! {
        PageHeader { title: "Nursing Reports", subtitle: "View and manage patient care reports",
            Button { onclick: move |_| creating.set(true),
                Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                "New Report"
            }
        }
        if !ready() {
            PageSkeleton { cards: 0, rows: 5 }
        } else {
            div { class: "card-grid",
                for report in reports() {
                    Card { key: "{report.id}",
                        CardHeader { title: report.report_type.clone(), description: report.id.clone(),
                            StatusBadge {
                                tone: if report.status == ReportStatus::Completed { Tone::Success } else { Tone::Warning },
                                "{report.status.label()}"
                            }
                        }
                        CardContent {
                            div { class: "stack",
                                p { strong { "{report.patient_name}" } span { class: "muted", " ({report.patient_id})" } }
                                p { class: "muted", "{format_date_human(report.date)} · {report.shift} shift" }
                                if !report.notes.is_empty() {
                                    p { "{report.notes}" }
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let toasts = toasts.clone();
                                        let id = report.id.clone();
                                        move |_| notify(
                                            &toasts,
                                            ToastType::Info,
                                            "Downloading Report",
                                            format!("Report {id} is being downloaded"),
                                        )
                                    },
                                    Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                                    "Download"
                                }
                            }
                        }
                    }
                }
            }
        }
        NewReportModal {
            open: creating(),
            on_close: move |_| creating.set(false),
            on_created: move |report: NurseReport| reports.write().insert(0, report),
        }
    }
}

#[component]
fn NewReportModal(open: bool, on_close: EventHandler<()>, on_created: EventHandler<NurseReport>) -> Element {
    let api = use_api();
    let toasts = use_toast();
    let mut draft = use_signal(NewReportRequest::default);
    let mut error = use_signal(|| Option::<AppError>::None);

    let submit = move |_: MouseEvent| match api.add_report(draft()) {
        Ok(report) => {
            notify(
                &toasts,
                ToastType::Success,
                "Report Created Successfully",
                format!("New {} created for {}", report.report_type, report.patient_name),
            );
            tracing::info!(report = %report.id, "report created");
            on_created.call(report);
            draft.set(NewReportRequest::default());
            error.set(None);
            on_close.call(());
        }
        Err(e) => {
            notify(&toasts, ToastType::Error, "Incomplete Form", e.toast_message());
            error.set(Some(e));
        }
    };

    let field_error = move |field: &str| -> Option<String> {
        error.read().as_ref().and_then(|e| e.field_error(field)).map(String::from)
    };

    rsx! {
        Modal {
            open,
            title: "Create New Report",
            description: "Record a patient care report for this shift",
            on_close: move |_| on_close.call(()),
            div { class: "stack",
                Input {
                    label: "Patient Name *",
                    placeholder: "Enter patient name",
                    value: draft.read().patient_name.clone(),
                    error: field_error("patient_name"),
                    on_input: move |e: FormEvent| draft.write().patient_name = e.value(),
                }
                Input {
                    label: "Patient ID *",
                    placeholder: "e.g., P001",
                    value: draft.read().patient_id.clone(),
                    error: field_error("patient_id"),
                    on_input: move |e: FormEvent| draft.write().patient_id = e.value(),
                }
                SelectField {
                    label: "Report Type *",
                    value: draft.read().report_type.clone(),
                    options: options(REPORT_TYPES),
                    on_change: move |v: String| draft.write().report_type = v,
                }
                SelectField {
                    label: "Shift *",
                    value: draft.read().shift.clone(),
                    options: options(SHIFTS),
                    on_change: move |v: String| draft.write().shift = v,
                }
                TextArea {
                    label: "Notes",
                    placeholder: "Additional notes or observations...",
                    value: draft.read().notes.clone(),
                    on_input: move |e: FormEvent| draft.write().notes = e.value(),
                }
            }
            ModalActions {
                Button { variant: ButtonVariant::Outline, onclick: move |_| on_close.call(()), "Cancel" }
                Button { onclick: submit, "Create Report" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn select_options_start_with_placeholder() {
        let opts = options(SHIFTS);
        assert_eq!(opts.len(), SHIFTS.len() + 1);
        assert_eq!(opts[0].0, "");
        assert_eq!(opts[1], ("Morning".to_string(), "Morning".to_string()));
    }
}
