use crate::hooks::use_page_ready;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMail, LdShield, LdUserPlus};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::{filter_items, StaffStatus};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, PageHeader,
    PageSkeleton, SearchBar, StatusBadge, ToastType, Tone,
};

#[component]
pub fn AdminUsers() -> Element {
    let ready = use_page_ready();
    let toasts = use_toast();
    let mut users = use_signal(fixtures::staff_users);
    let mut query = use_signal(String::new);

    let visible = filter_items(&users.read(), &query());

    rsx! {
        PageHeader { title: "User Management", subtitle: "Manage system users and permissions",
            Button {
                onclick: {
                    let toasts = toasts.clone();
                    move |_| notify(&toasts, ToastType::Info, "Add User", "User invitations are not available yet")
                },
                Icon::<LdUserPlus> { icon: LdUserPlus, width: 16, height: 16 }
                "Add User"
            }
        }
        if !ready() {
            PageSkeleton { cards: 0, rows: 6 }
        } else {
            Card {
                CardHeader { title: "Search Users", description: "Search by name, email, or role" }
                CardContent {
                    SearchBar {
                        value: query(),
                        placeholder: "Search users...",
                        on_search: move |q: String| query.set(q),
                    }
                }
            }
            if visible.is_empty() {
                p { class: "muted", "No users match your search" }
            }
            div { class: "card-grid",
                for user in visible {
                    Card { key: "{user.id}",
                        CardHeader { title: user.name.clone(), description: user.id.clone(),
                            StatusBadge {
                                tone: if user.status == StaffStatus::Active { Tone::Success } else { Tone::Neutral },
                                "{user.status.label()}"
                            }
                        }
                        CardContent {
                            div { class: "stack",
                                p { class: "icon-line",
                                    Icon::<LdMail> { icon: LdMail, width: 14, height: 14 }
                                    span { "{user.email}" }
                                }
                                p { class: "icon-line",
                                    Icon::<LdShield> { icon: LdShield, width: 14, height: 14 }
                                    span { "{user.role.display_name()} - {user.department}" }
                                }
                                div { class: "row-actions",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let toasts = toasts.clone();
                                            let name = user.name.clone();
                                            move |_| notify(&toasts, ToastType::Info, "Edit User", format!("Editing {name}"))
                                        },
                                        "Edit"
                                    }
                                    Button {
                                        variant: ButtonVariant::Destructive,
                                        onclick: {
                                            let toasts = toasts.clone();
                                            let id = user.id.clone();
                                            let name = user.name.clone();
                                            move |_| {
                                                users.write().retain(|u| u.id != id);
                                                tracing::info!(user = %id, "user removed");
                                                notify(&toasts, ToastType::Success, "Delete User", format!("{name} has been removed"));
                                            }
                                        },
                                        "Delete"
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
