use crate::hooks::use_page_ready;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdCreditCard, LdFileText, LdTrendingUp, LdUsers};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::{Activity, Role, WeeklyActivity};
use shared_ui::{Card, CardContent, CardHeader, PageHeader, PageSkeleton, ProgressBar, StatCard};

fn heading(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Admin => ("Admin Dashboard", "System overview and management"),
        Role::Doctor => ("Doctor Dashboard", "Patient management and prescriptions"),
        Role::Nurse => ("Nurse Dashboard", "Patient care and daily tasks"),
        Role::Patient => ("Patient Dashboard", "Your health at a glance"),
    }
}

/// Icon for the n-th overview card; every role orders its cards the same way.
fn card_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        1 => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        2 => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 } },
        _ => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 } },
    }
}

/// Overview page shared by every role: four summary cards, the week's
/// activity and the latest events.
#[component]
pub fn RoleDashboard(role: Role) -> Element {
    let ready = use_page_ready();
    let (title, subtitle) = heading(role);

    rsx! {
        PageHeader { title, subtitle }
        if !ready() {
            PageSkeleton { cards: 4, rows: 4 }
        } else {
            div { class: "stat-grid",
                for (i, card) in fixtures::overview_cards(role).into_iter().enumerate() {
                    StatCard {
                        key: "{card.title}",
                        label: card.title.clone(),
                        value: card.value.clone(),
                        change: card.change.clone(),
                        decrease: card.is_decrease(),
                        icon: card_icon(i),
                    }
                }
            }
            div { class: "grid-2",
                WeeklyActivityCard { days: fixtures::weekly_activity() }
                RecentActivityCard { activities: fixtures::recent_activities() }
            }
        }
    }
}

#[component]
fn WeeklyActivityCard(days: Vec<WeeklyActivity>) -> Element {
    let peak = days.iter().map(|d| d.visits).max().unwrap_or(1).max(1);

    rsx! {
        Card {
            CardHeader { title: "Weekly Activity", description: "Patient visits, prescriptions and syncs" }
            CardContent {
                div { class: "activity-table",
                    div { class: "activity-row activity-head",
                        span { "Day" }
                        span { "Visits" }
                        span { "Rx" }
                        span { "Syncs" }
                    }
                    for day in days {
                        div { key: "{day.day}", class: "activity-row",
                            span { "{day.day}" }
                            div { class: "activity-bar",
                                ProgressBar { value: (day.visits * 100 / peak).min(100) as u8 }
                                span { class: "muted", "{day.visits}" }
                            }
                            span { "{day.prescriptions}" }
                            span { "{day.syncs}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentActivityCard(activities: Vec<Activity>) -> Element {
    rsx! {
        Card {
            CardHeader { title: "Recent Activity", description: "Latest system events" }
            CardContent {
                ul { class: "activity-list",
                    for (i, item) in activities.into_iter().enumerate() {
                        li { key: "{i}", class: "activity-item",
                            span { class: "activity-icon",
                                Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                            }
                            div { class: "activity-text",
                                p { class: "activity-action", "{item.action}" }
                                p { class: "muted", "{item.subject}" }
                            }
                            span { class: "muted", "{item.time}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! { RoleDashboard { role: Role::Admin } }
}

#[component]
pub fn DoctorDashboard() -> Element {
    rsx! { RoleDashboard { role: Role::Doctor } }
}

#[component]
pub fn NurseDashboard() -> Element {
    rsx! { RoleDashboard { role: Role::Nurse } }
}

#[component]
pub fn PatientDashboard() -> Element {
    rsx! { RoleDashboard { role: Role::Patient } }
}
