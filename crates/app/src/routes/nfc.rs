use crate::hooks::{use_api, use_page_ready};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCloud, LdCloudOff, LdSmartphone};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::{filter_items, NfcCard, NfcStatus, Role};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, Input, Modal,
    ModalActions, PageHeader, PageSkeleton, SearchBar, StatCard, StatusBadge, ToastType, Tone,
};

pub fn nfc_tone(status: NfcStatus) -> Tone {
    match status {
        NfcStatus::Synced => Tone::Success,
        NfcStatus::NotSynced => Tone::Warning,
        NfcStatus::Error => Tone::Danger,
    }
}

fn heading(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Doctor => ("NFC Card Operations", "Read and write patient data to NFC cards"),
        Role::Nurse => ("Patient NFC Cards", "Read and sync cards for patients under your care"),
        _ => ("NFC Card Management", "Monitor and manage patient NFC cards"),
    }
}

/// `(total, synced, not synced)`
pub fn card_counts(cards: &[NfcCard]) -> (usize, usize, usize) {
    let synced = cards.iter().filter(|c| c.status == NfcStatus::Synced).count();
    let pending = cards.iter().filter(|c| c.status == NfcStatus::NotSynced).count();
    (cards.len(), synced, pending)
}

/// Card list with a detail panel. Every role can push a card to the cloud;
/// doctors and nurses can also read it, and doctors can write a
/// prescription onto it.
#[component]
pub fn NfcCardsView(role: Role) -> Element {
    let ready = use_page_ready();
    let mut cards = use_signal(fixtures::nfc_cards);
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| Option::<String>::None);

    let (title, subtitle) = heading(role);
    let (total, synced, pending) = card_counts(&cards.read());
    let visible = filter_items(&cards.read(), &query());
    let current = selected()
        .and_then(|id| cards.read().iter().find(|c| c.card_id == id).cloned());

    rsx! {
        PageHeader { title, subtitle }
        if !ready() {
            PageSkeleton { cards: 3, rows: 5 }
        } else {
            div { class: "stat-grid",
                StatCard {
                    label: "Total Cards",
                    value: "{total}",
                    icon: rsx! { Icon::<LdSmartphone> { icon: LdSmartphone, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Synced",
                    value: "{synced}",
                    icon: rsx! { Icon::<LdCloud> { icon: LdCloud, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Not Synced",
                    value: "{pending}",
                    decrease: pending > 0,
                    icon: rsx! { Icon::<LdCloudOff> { icon: LdCloudOff, width: 18, height: 18 } },
                }
            }
            div { class: "grid-2",
                Card {
                    CardHeader { title: "NFC Cards", description: "All registered patient cards" }
                    CardContent {
                        div { class: "stack",
                            SearchBar {
                                value: query(),
                                placeholder: "Search by patient name or card ID...",
                                on_search: move |q: String| query.set(q),
                            }
                            if visible.is_empty() {
                                p { class: "muted", "No cards match your search" }
                            }
                            ul { class: "pick-list",
                                for card in visible {
                                    li {
                                        key: "{card.card_id}",
                                        class: "pick-item",
                                        "data-selected": selected().as_deref() == Some(card.card_id.as_str()),
                                        onclick: {
                                            let id = card.card_id.clone();
                                            move |_| selected.set(Some(id.clone()))
                                        },
                                        div {
                                            p { class: "pick-title", "{card.patient_name}" }
                                            p { class: "muted", "{card.card_id}" }
                                        }
                                        StatusBadge { tone: nfc_tone(card.status), "{card.status.label()}" }
                                    }
                                }
                            }
                        }
                    }
                }
                {match current {
                    Some(card) => rsx! {
                        CardDetail {
                            key: "{card.card_id}",
                            card: card.clone(),
                            role,
                            on_synced: move |synced: NfcCard| {
                                if let Some(slot) = cards.write().iter_mut().find(|c| c.card_id == synced.card_id) {
                                    *slot = synced;
                                }
                            },
                        }
                    },
                    None => rsx! {
                        Card {
                            CardContent {
                                div { class: "empty-panel",
                                    Icon::<LdSmartphone> { icon: LdSmartphone, width: 40, height: 40 }
                                    p { class: "muted", "Select a card to view details" }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn CardDetail(card: NfcCard, role: Role, on_synced: EventHandler<NfcCard>) -> Element {
    let api = use_api();
    let toasts = use_toast();
    let mut busy = use_signal(|| false);
    let mut writing = use_signal(|| false);

    let sync = {
        let api = api.clone();
        let card = card.clone();
        let toasts = toasts.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            let card = card.clone();
            let toasts = toasts.clone();
            busy.set(true);
            notify(&toasts, ToastType::Info, "Syncing Card", "Please wait...");
            spawn(async move {
                let synced = api.sync_card(card).await;
                busy.set(false);
                notify(&toasts, ToastType::Success, "Sync Successful", "Card has been synced successfully");
                on_synced.call(synced);
            });
        }
    };

    let read = {
        let api = api.clone();
        let card = card.clone();
        let toasts = toasts.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            let card = card.clone();
            let toasts = toasts.clone();
            busy.set(true);
            notify(
                &toasts,
                ToastType::Info,
                "Reading NFC Card",
                format!("Reading data from {}'s card...", card.patient_name),
            );
            spawn(async move {
                api.read_card(&card).await;
                busy.set(false);
                notify(&toasts, ToastType::Success, "Card Data Read", "Patient data successfully read from NFC card");
            });
        }
    };

    rsx! {
        Card {
            CardHeader { title: "Card Details" }
            CardContent {
                dl { class: "detail-list",
                    dt { "Patient Name" }
                    dd { "{card.patient_name}" }
                    dt { "Card ID" }
                    dd { "{card.card_id}" }
                    dt { "Patient ID" }
                    dd { "{card.patient_id}" }
                    dt { "Status" }
                    dd { StatusBadge { tone: nfc_tone(card.status), "{card.status.label()}" } }
                    dt { "Last Modified" }
                    dd { "{card.last_modified}" }
                    dt { "Hospital" }
                    dd { "{card.hospital}" }
                    dt { "Data Size" }
                    dd { "{card.data_size_mb} MB" }
                }
                div { class: "stack row-actions",
                    if role != Role::Admin {
                        Button { disabled: busy(), onclick: read, "Read Card Data" }
                    }
                    if role == Role::Doctor {
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: busy(),
                            onclick: move |_| writing.set(true),
                            "Write Prescription"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: card.status == NfcStatus::Synced,
                        loading: busy(),
                        onclick: sync,
                        if card.status == NfcStatus::Synced { "Synced" } else { "Sync to Cloud" }
                    }
                }
            }
        }
        if role == Role::Doctor {
            WritePrescriptionModal { open: writing(), card: card.clone(), on_close: move |_| writing.set(false) }
        }
    }
}

/// Medication, dosage and frequency joined into the line written to a card.
pub fn prescription_line(medication: &str, dosage: &str, frequency: &str) -> String {
    [medication, dosage, frequency]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

#[component]
fn WritePrescriptionModal(open: bool, card: NfcCard, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let toasts = use_toast();
    let mut medication = use_signal(String::new);
    let mut dosage = use_signal(String::new);
    let mut frequency = use_signal(String::new);

    let write = move |_: MouseEvent| {
        let api = api.clone();
        let card = card.clone();
        let toasts = toasts.clone();
        let line = prescription_line(&medication(), &dosage(), &frequency());
        if medication().trim().is_empty() {
            notify(&toasts, ToastType::Error, "Error", "Please enter a medication name");
            return;
        }
        on_close.call(());
        notify(&toasts, ToastType::Info, "Writing Prescription", "Writing prescription to NFC card...");
        spawn(async move {
            api.write_card(&card, &line).await;
            medication.set(String::new());
            dosage.set(String::new());
            frequency.set(String::new());
            notify(&toasts, ToastType::Success, "Prescription Written", "Prescription successfully written to NFC card");
        });
    };

    rsx! {
        Modal { open, title: "Write Prescription to Card", on_close: move |_| on_close.call(()),
            div { class: "stack",
                Input {
                    label: "Medication Name",
                    placeholder: "e.g., Aspirin",
                    value: medication(),
                    on_input: move |e: FormEvent| medication.set(e.value()),
                }
                Input {
                    label: "Dosage",
                    placeholder: "e.g., 500mg",
                    value: dosage(),
                    on_input: move |e: FormEvent| dosage.set(e.value()),
                }
                Input {
                    label: "Frequency",
                    placeholder: "e.g., Twice daily",
                    value: frequency(),
                    on_input: move |e: FormEvent| frequency.set(e.value()),
                }
            }
            ModalActions {
                Button { variant: ButtonVariant::Outline, onclick: move |_| on_close.call(()), "Cancel" }
                Button { onclick: write, "Write to Card" }
            }
        }
    }
}

#[component]
pub fn AdminNfc() -> Element {
    rsx! { NfcCardsView { role: Role::Admin } }
}

#[component]
pub fn DoctorNfc() -> Element {
    rsx! { NfcCardsView { role: Role::Doctor } }
}

#[component]
pub fn NurseNfc() -> Element {
    rsx! { NfcCardsView { role: Role::Nurse } }
}
