use crate::hooks::{use_api, use_page_ready};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdCloud, LdMapPin, LdSmartphone};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::HealthCard;
use shared_ui::{
    notify, use_toast, Button, Card, CardContent, CardHeader, PageHeader, PageSkeleton,
    ToastType,
};

#[component]
pub fn PatientCard() -> Element {
    let ready = use_page_ready();
    let api = use_api();
    let toasts = use_toast();
    let mut card = use_signal(fixtures::patient_health_card);
    let mut syncing = use_signal(|| false);

    let sync_now = move |_: MouseEvent| {
        let api = api.clone();
        let toasts = toasts.clone();
        syncing.set(true);
        notify(&toasts, ToastType::Info, "Syncing Card", "Please wait...");
        spawn(async move {
            let synced = api.sync_health_card(card()).await;
            card.set(synced);
            syncing.set(false);
            notify(&toasts, ToastType::Success, "Sync Successful", "Your card is up to date");
        });
    };

    rsx! {
        PageHeader { title: "My NFC Card", subtitle: "View and manage your personal health card" }
        if !ready() {
            PageSkeleton { cards: 0, rows: 4 }
        } else {
            div { class: "grid-2",
                CardInformation { card: card() }
                div { class: "stack",
                    Card {
                        CardHeader { title: "Sync Status" }
                        CardContent {
                            div { class: "stack",
                                p { class: "icon-line",
                                    Icon::<LdCloud> { icon: LdCloud, width: 16, height: 16 }
                                    span { strong { "Synced" } " · All data up to date" }
                                }
                                p { class: "icon-line",
                                    Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                                    span { "Last synced: {card.read().last_synced}" }
                                }
                                p { class: "icon-line",
                                    Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                                    span { "{card.read().last_hospital}" }
                                }
                                Button { loading: syncing(), onclick: sync_now, "Sync Now" }
                            }
                        }
                    }
                    Card {
                        CardHeader { title: "Recent Activity" }
                        CardContent {
                            ul { class: "activity-list",
                                for (i, item) in fixtures::card_activity().into_iter().enumerate() {
                                    li { key: "{i}", class: "activity-item",
                                        div { class: "activity-text",
                                            p { class: "activity-action", "{item.action}" }
                                        }
                                        span { class: "muted", "{item.time}" }
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
fn CardInformation(card: HealthCard) -> Element {
    rsx! {
        Card {
            CardHeader { title: "Card Information", description: "Your NFC health card details" }
            CardContent {
                div { class: "health-card",
                    div { class: "health-card-top",
                        div {
                            p { class: "health-card-label", "Card Holder" }
                            p { class: "health-card-holder", "{card.holder}" }
                        }
                        Icon::<LdSmartphone> { icon: LdSmartphone, width: 28, height: 28 }
                    }
                    p { class: "health-card-id", "{card.card_id}" }
                    p { class: "health-card-label", "Patient ID: {card.patient_id}" }
                }
                dl { class: "detail-list",
                    dt { "Blood Type" }
                    dd { "{card.blood_type}" }
                    dt { "Allergies" }
                    dd { "{card.allergies}" }
                    dt { "Emergency Contact" }
                    dd { "{card.emergency_contact}" }
                    dt { "Phone" }
                    dd { "{card.phone}" }
                }
            }
        }
    }
}
