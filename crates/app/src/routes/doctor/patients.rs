use crate::format_helpers::format_date_human;
use crate::hooks::{use_api, use_page_ready};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdCalendar, LdMail, LdPhone, LdPlus};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::{filter_items, AppError, NewPatientRequest, Patient, PatientStatus};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, Input, Modal,
    ModalActions, PageHeader, PageSkeleton, SearchBar, SelectField, StatusBadge, ToastType, Tone,
};

const GENDERS: &[&str] = &["Male", "Female", "Other"];

fn patient_tone(status: PatientStatus) -> Tone {
    match status {
        PatientStatus::Active => Tone::Success,
        PatientStatus::FollowUp => Tone::Warning,
        PatientStatus::Recovered => Tone::Neutral,
    }
}

#[component]
pub fn DoctorPatients() -> Element {
    let ready = use_page_ready();
    let mut patients = use_signal(fixtures::doctor_patients);
    let mut query = use_signal(String::new);
    let mut adding = use_signal(|| false);
    let mut viewing = use_signal(|| Option::<Patient>::None);

    let visible = filter_items(&patients.read(), &query());

    rsx! {
        PageHeader { title: "My Patients", subtitle: "Manage and view patient information",
            Button { onclick: move |_| adding.set(true),
                Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                "Add Patient"
            }
        }
        Card {
            CardHeader { title: "Search Patients", description: "Search by name, ID, or condition" }
            CardContent {
                SearchBar {
                    value: query(),
                    placeholder: "Search patients...",
                    on_search: move |q: String| query.set(q),
                }
            }
        }
        if !ready() {
            PageSkeleton { cards: 0, rows: 5 }
        } else if visible.is_empty() {
            Card {
                CardContent {
                    p { class: "empty-panel muted", "No patients found matching your search" }
                }
            }
        } else {
            div { class: "card-grid",
                for patient in visible {
                    PatientCard {
                        key: "{patient.id}",
                        patient: patient.clone(),
                        on_view: move |p: Patient| viewing.set(Some(p)),
                    }
                }
            }
        }
        AddPatientModal {
            open: adding(),
            on_close: move |_| adding.set(false),
            on_added: move |p: Patient| patients.write().insert(0, p),
        }
        if let Some(patient) = viewing() {
            Modal {
                open: true,
                title: "Patient Details",
                description: "Complete patient information",
                on_close: move |_| viewing.set(None),
                dl { class: "detail-list",
                    dt { "Name" }
                    dd { "{patient.name}" }
                    dt { "Patient ID" }
                    dd { "{patient.id}" }
                    dt { "Age / Gender" }
                    dd { "{patient.age} years • {patient.gender}" }
                    dt { "Phone" }
                    dd { "{patient.phone}" }
                    dt { "Email" }
                    dd { "{patient.email}" }
                    dt { "Condition" }
                    dd { "{patient.condition}" }
                    dt { "Last Visit" }
                    dd { "{format_date_human(patient.last_visit)}" }
                    dt { "Status" }
                    dd { StatusBadge { tone: patient_tone(patient.status), "{patient.status.label()}" } }
                }
                ModalActions {
                    Button { variant: ButtonVariant::Outline, onclick: move |_| viewing.set(None), "Close" }
                }
            }
        }
    }
}

#[component]
fn PatientCard(patient: Patient, on_view: EventHandler<Patient>) -> Element {
    rsx! {
        Card {
            CardHeader { title: patient.name.clone(), description: "ID: {patient.id}",
                StatusBadge { tone: patient_tone(patient.status), "{patient.status.label()}" }
            }
            CardContent {
                div { class: "stack",
                    p { class: "icon-line",
                        Icon::<LdActivity> { icon: LdActivity, width: 14, height: 14 }
                        span { "{patient.age} years • {patient.gender}" }
                    }
                    p { class: "icon-line",
                        Icon::<LdPhone> { icon: LdPhone, width: 14, height: 14 }
                        span { "{patient.phone}" }
                    }
                    p { class: "icon-line",
                        Icon::<LdMail> { icon: LdMail, width: 14, height: 14 }
                        span { "{patient.email}" }
                    }
                    p { class: "icon-line",
                        Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                        span { "Last Visit: {format_date_human(patient.last_visit)}" }
                    }
                    p { strong { "Condition: " } "{patient.condition}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: {
                            let patient = patient.clone();
                            move |_| on_view.call(patient.clone())
                        },
                        "View Details"
                    }
                }
            }
        }
    }
}

#[component]
fn AddPatientModal(open: bool, on_close: EventHandler<()>, on_added: EventHandler<Patient>) -> Element {
    let api = use_api();
    let toasts = use_toast();
    let mut draft = use_signal(|| NewPatientRequest {
        gender: GENDERS[0].to_string(),
        ..NewPatientRequest::default()
    });
    let mut error = use_signal(|| Option::<AppError>::None);

    let submit = move |_: MouseEvent| {
        let result = api.add_patient(&draft.read());
        match result {
            Ok(patient) => {
                notify(
                    &toasts,
                    ToastType::Success,
                    "Patient Added",
                    format!("{} has been added successfully", patient.name),
                );
                tracing::info!(patient = %patient.id, "patient added");
                on_added.call(patient);
                draft.set(NewPatientRequest {
                    gender: GENDERS[0].to_string(),
                    ..NewPatientRequest::default()
                });
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
    let genders = GENDERS
        .iter()
        .map(|g| (g.to_string(), g.to_string()))
        .collect::<Vec<_>>();

    rsx! {
        Modal {
            open,
            title: "Add New Patient",
            description: "Enter the patient's details",
            on_close: move |_| on_close.call(()),
            div { class: "field-grid",
                Input {
                    label: "Full Name *",
                    placeholder: "Patient name",
                    value: draft.read().name.clone(),
                    error: field_error("name"),
                    on_input: move |e: FormEvent| draft.write().name = e.value(),
                }
                Input {
                    label: "Age *",
                    input_type: "number",
                    placeholder: "Age",
                    value: draft.read().age.clone(),
                    error: field_error("age"),
                    on_input: move |e: FormEvent| draft.write().age = e.value(),
                }
                SelectField {
                    label: "Gender",
                    value: draft.read().gender.clone(),
                    options: genders,
                    on_change: move |g: String| draft.write().gender = g,
                }
                Input {
                    label: "Phone *",
                    input_type: "tel",
                    placeholder: "+91 98765 43210",
                    value: draft.read().phone.clone(),
                    error: field_error("phone"),
                    on_input: move |e: FormEvent| draft.write().phone = e.value(),
                }
                Input {
                    label: "Email *",
                    input_type: "email",
                    placeholder: "patient@email.com",
                    value: draft.read().email.clone(),
                    error: field_error("email"),
                    on_input: move |e: FormEvent| draft.write().email = e.value(),
                }
                Input {
                    label: "Condition",
                    placeholder: "Medical condition",
                    value: draft.read().condition.clone(),
                    on_input: move |e: FormEvent| draft.write().condition = e.value(),
                }
            }
            ModalActions {
                Button { variant: ButtonVariant::Outline, onclick: move |_| on_close.call(()), "Cancel" }
                Button { onclick: submit, "Add Patient" }
            }
        }
    }
}
