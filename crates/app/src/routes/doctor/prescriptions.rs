use crate::format_helpers::format_date_human;
use crate::hooks::{use_api, use_page_ready};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdPill, LdPlus, LdX};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::{
    filter_items, AppError, NewPrescriptionRequest, Prescription, PrescriptionStatus,
};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, Input, Modal,
    ModalActions, PageHeader, PageSkeleton, SearchBar, StatusBadge, ToastType, Tone,
};

#[component]
pub fn DoctorPrescriptions() -> Element {
    let ready = use_page_ready();
    let api = use_api();
    let toasts = use_toast();
    let mut prescriptions = use_signal(fixtures::prescriptions);
    let mut query = use_signal(String::new);
    let mut creating = use_signal(|| false);

    let download = use_callback(move |id: String| {
        let api = api.clone();
        let toasts = toasts.clone();
        notify(
            &toasts,
            ToastType::Info,
            "Downloading Prescription",
            format!("Prescription {id} is being downloaded"),
        );
        spawn(async move {
            api.download(&id).await;
            notify(
                &toasts,
                ToastType::Success,
                "Download Complete",
                format!("Prescription {id} downloaded successfully"),
            );
        });
    });

    let visible = filter_items(&prescriptions.read(), &query());

    rsx! {
        PageHeader { title: "Prescriptions", subtitle: "Manage patient prescriptions",
            Button { onclick: move |_| creating.set(true),
                Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                "New Prescription"
            }
        }
        if !ready() {
            PageSkeleton { cards: 0, rows: 5 }
        } else {
            SearchBar {
                value: query(),
                placeholder: "Search by patient, ID or diagnosis...",
                on_search: move |q: String| query.set(q),
            }
            if visible.is_empty() {
                p { class: "muted", "No prescriptions found" }
            }
            div { class: "card-grid",
                for rx in visible {
                    Card { key: "{rx.id}",
                        CardHeader { title: rx.id.clone(), description: rx.diagnosis.clone(),
                            StatusBadge {
                                tone: if rx.status == PrescriptionStatus::Active { Tone::Success } else { Tone::Neutral },
                                "{rx.status.label()}"
                            }
                        }
                        CardContent {
                            div { class: "stack",
                                p { strong { "{rx.patient_name}" } span { class: "muted", " ({rx.patient_id})" } }
                                p { class: "muted", "{format_date_human(rx.date)}" }
                                ul { class: "med-list",
                                    for (i, med) in rx.medications.iter().enumerate() {
                                        li { key: "{i}", class: "icon-line",
                                            Icon::<LdPill> { icon: LdPill, width: 14, height: 14 }
                                            span { "{med}" }
                                        }
                                    }
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let id = rx.id.clone();
                                        move |_| download.call(id.clone())
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
        NewPrescriptionModal {
            open: creating(),
            on_close: move |_| creating.set(false),
            on_created: move |rx: Prescription| prescriptions.write().insert(0, rx),
        }
    }
}

fn blank_prescription() -> NewPrescriptionRequest {
    NewPrescriptionRequest {
        medications: vec![String::new()],
        ..NewPrescriptionRequest::default()
    }
}

#[component]
fn NewPrescriptionModal(
    open: bool,
    on_close: EventHandler<()>,
    on_created: EventHandler<Prescription>,
) -> Element {
    let api = use_api();
    let toasts = use_toast();
    let mut draft = use_signal(blank_prescription);
    let mut error = use_signal(|| Option::<AppError>::None);

    let submit = move |_: MouseEvent| {
        let req = draft();
        let patient_name = req.patient_name.clone();
        match api.add_prescription(req) {
            Ok(rx) => {
                notify(
                    &toasts,
                    ToastType::Success,
                    "Prescription Created",
                    format!("Prescription for {patient_name} created successfully"),
                );
                tracing::info!(prescription = %rx.id, "prescription created");
                on_created.call(rx);
                draft.set(blank_prescription());
                error.set(None);
                on_close.call(());
            }
            Err(e) => {
                notify(&toasts, ToastType::Error, "Validation Error", e.toast_message());
                error.set(Some(e));
            }
        }
    };

    let field_error = move |field: &str| -> Option<String> {
        error.read().as_ref().and_then(|e| e.field_error(field)).map(String::from)
    };
    let medications = draft.read().medications.clone();
    let removable = medications.len() > 1;

    rsx! {
        Modal {
            open,
            title: "New Prescription",
            description: "Create a prescription for a patient",
            on_close: move |_| on_close.call(()),
            div { class: "stack",
                Input {
                    label: "Patient Name *",
                    placeholder: "Patient name",
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
                Input {
                    label: "Diagnosis *",
                    placeholder: "Medical diagnosis",
                    value: draft.read().diagnosis.clone(),
                    error: field_error("diagnosis"),
                    on_input: move |e: FormEvent| draft.write().diagnosis = e.value(),
                }
                p { class: "input-label", "Medications *" }
                for (i, med) in medications.into_iter().enumerate() {
                    div { key: "{i}", class: "row-actions",
                        Input {
                            placeholder: "e.g., Metformin 500mg",
                            value: med,
                            on_input: move |e: FormEvent| {
                                if let Some(slot) = draft.write().medications.get_mut(i) {
                                    *slot = e.value();
                                }
                            },
                        }
                        if removable {
                            Button {
                                variant: ButtonVariant::Ghost,
                                title: "Remove",
                                onclick: move |_| {
                                    draft.write().medications.remove(i);
                                },
                                Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                            }
                        }
                    }
                }
                if let Some(msg) = field_error("medications") {
                    p { class: "input-error", "{msg}" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| draft.write().medications.push(String::new()),
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "Add Medication"
                }
            }
            ModalActions {
                Button { variant: ButtonVariant::Outline, onclick: move |_| on_close.call(()), "Cancel" }
                Button { onclick: submit, "Create Prescription" }
            }
        }
    }
}
