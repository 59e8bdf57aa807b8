use crate::hooks::{use_api, use_page_ready};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdHeart, LdThermometer};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::{filter_items, AppError, VitalsUpdate, WardPatient, WardStatus};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, Input, Modal,
    ModalActions, PageHeader, PageSkeleton, SearchBar, StatusBadge, ToastType, Tone,
};

fn ward_tone(status: WardStatus) -> Tone {
    match status {
        WardStatus::Stable => Tone::Success,
        WardStatus::Monitoring => Tone::Warning,
        WardStatus::Critical => Tone::Danger,
    }
}

#[component]
pub fn NursePatients() -> Element {
    let ready = use_page_ready();
    let mut patients = use_signal(fixtures::ward_patients);
    let mut query = use_signal(String::new);
    let mut updating = use_signal(|| Option::<String>::None);

    let visible = filter_items(&patients.read(), &query());
    let target = updating()
        .and_then(|id| patients.read().iter().find(|p| p.id == id).cloned());

    rsx! {
        PageHeader { title: "Patient Care", subtitle: "Monitor and update patient vitals" }
        Card {
            CardHeader { title: "Search Patients", description: "Search by name, ID, or room number" }
            CardContent {
                SearchBar {
                    value: query(),
                    placeholder: "Search patients...",
                    on_search: move |q: String| query.set(q),
                }
            }
        }
        if !ready() {
            PageSkeleton { cards: 0, rows: 4 }
        } else if visible.is_empty() {
            p { class: "muted", "No patients found matching your search" }
        } else {
            div { class: "card-grid",
                for patient in visible {
                    Card { key: "{patient.id}",
                        CardHeader {
                            title: patient.name.clone(),
                            description: "Room {patient.room} - Bed {patient.bed}",
                            StatusBadge { tone: ward_tone(patient.status), "{patient.status.label()}" }
                        }
                        CardContent {
                            div { class: "stack",
                                p { strong { "Current Vitals:" } }
                                p { class: "icon-line",
                                    Icon::<LdActivity> { icon: LdActivity, width: 14, height: 14 }
                                    span { "BP: {patient.vitals.bp}" }
                                }
                                p { class: "icon-line",
                                    Icon::<LdThermometer> { icon: LdThermometer, width: 14, height: 14 }
                                    span { "Temp: {patient.vitals.temperature}" }
                                }
                                p { class: "icon-line",
                                    Icon::<LdHeart> { icon: LdHeart, width: 14, height: 14 }
                                    span { "Pulse: {patient.vitals.pulse}" }
                                }
                                Button {
                                    onclick: {
                                        let id = patient.id.clone();
                                        move |_| updating.set(Some(id.clone()))
                                    },
                                    "Update Vitals"
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some(patient) = target {
            UpdateVitalsModal {
                key: "{patient.id}",
                patient: patient.clone(),
                on_close: move |_| updating.set(None),
                on_saved: move |saved: WardPatient| {
                    if let Some(slot) = patients.write().iter_mut().find(|p| p.id == saved.id) {
                        *slot = saved;
                    }
                },
            }
        }
    }
}

#[component]
fn UpdateVitalsModal(
    patient: WardPatient,
    on_close: EventHandler<()>,
    on_saved: EventHandler<WardPatient>,
) -> Element {
    let api = use_api();
    let toasts = use_toast();
    let current = patient.vitals.clone();
    let mut draft = use_signal(move || VitalsUpdate {
        bp: current.bp,
        temperature: current.temperature,
        pulse: current.pulse,
    });
    let mut error = use_signal(|| Option::<AppError>::None);

    let save = {
        let patient = patient.clone();
        move |_: MouseEvent| {
            let mut updated = patient.clone();
            match api.update_vitals(&mut updated, draft()) {
                Ok(()) => {
                    notify(
                        &toasts,
                        ToastType::Success,
                        "Vitals Updated Successfully",
                        format!("Vitals recorded for {} ({})", updated.name, updated.id),
                    );
                    on_saved.call(updated);
                    on_close.call(());
                }
                Err(e) => {
                    notify(&toasts, ToastType::Error, "Incomplete Form", e.toast_message());
                    error.set(Some(e));
                }
            }
        }
    };

    let field_error = move |field: &str| -> Option<String> {
        error.read().as_ref().and_then(|e| e.field_error(field)).map(String::from)
    };

    rsx! {
        Modal {
            open: true,
            title: "Update Patient Vitals",
            description: "{patient.name} ({patient.id})",
            on_close: move |_| on_close.call(()),
            div { class: "stack",
                Input {
                    label: "Blood Pressure *",
                    placeholder: "e.g., 120/80",
                    value: draft.read().bp.clone(),
                    error: field_error("bp"),
                    on_input: move |e: FormEvent| draft.write().bp = e.value(),
                }
                Input {
                    label: "Temperature *",
                    placeholder: "e.g., 98.6",
                    value: draft.read().temperature.clone(),
                    error: field_error("temperature"),
                    on_input: move |e: FormEvent| draft.write().temperature = e.value(),
                }
                Input {
                    label: "Pulse *",
                    placeholder: "e.g., 72",
                    value: draft.read().pulse.clone(),
                    error: field_error("pulse"),
                    on_input: move |e: FormEvent| draft.write().pulse = e.value(),
                }
            }
            ModalActions {
                Button { variant: ButtonVariant::Outline, onclick: move |_| on_close.call(()), "Cancel" }
                Button { onclick: save, "Save Vitals" }
            }
        }
    }
}
