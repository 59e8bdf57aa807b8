use crate::format_helpers::{format_date_human, format_inr};
use crate::hooks::use_page_ready;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdClock, LdCreditCard, LdTrendingUp};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::{filter_items, PaymentStatus, PaymentSummary};
use shared_ui::{
    Card, CardContent, CardHeader, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, PageHeader, PageSkeleton, SearchBar,
    StatCard, StatusBadge, Tone,
};

fn payment_tone(status: PaymentStatus) -> Tone {
    match status {
        PaymentStatus::Completed => Tone::Success,
        PaymentStatus::Pending => Tone::Warning,
        PaymentStatus::Failed => Tone::Danger,
    }
}

#[component]
pub fn AdminPayments() -> Element {
    let ready = use_page_ready();
    let payments = use_hook(fixtures::payments);
    let mut query = use_signal(String::new);

    let summary = PaymentSummary::from_payments(&payments);
    let visible = filter_items(&payments, &query());

    rsx! {
        PageHeader { title: "Payment Management", subtitle: "Track and manage all hospital payments" }
        if !ready() {
            PageSkeleton { cards: 4, rows: 6 }
        } else {
            div { class: "stat-grid",
                StatCard {
                    label: "Total Revenue",
                    value: format_inr(summary.revenue),
                    icon: rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Pending Amount",
                    value: format_inr(summary.pending),
                    change: "{summary.pending_count} awaiting payment",
                    icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Completed",
                    value: "{summary.completed_count}",
                    change: "{summary.failed_count} failed",
                    decrease: summary.failed_count > 0,
                    icon: rsx! { Icon::<LdCheck> { icon: LdCheck, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Total Transactions",
                    value: "{payments.len()}",
                    icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 } },
                }
            }
            Card {
                CardHeader { title: "Recent Payments", description: "All payment transactions" }
                CardContent {
                    div { class: "stack",
                        SearchBar {
                            value: query(),
                            placeholder: "Search by invoice or patient...",
                            on_search: move |q: String| query.set(q),
                        }
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Invoice" }
                                DataTableColumn { "Patient" }
                                DataTableColumn { "Date" }
                                DataTableColumn { "Method" }
                                DataTableColumn { "Amount" }
                                DataTableColumn { "Status" }
                            }
                            DataTableBody {
                                if visible.is_empty() {
                                    DataTableEmpty { colspan: 6, message: "No payments found" }
                                }
                                for payment in visible {
                                    DataTableRow { key: "{payment.id}",
                                        DataTableCell { "{payment.id}" }
                                        DataTableCell { "{payment.patient_name}" }
                                        DataTableCell { "{format_date_human(payment.date)}" }
                                        DataTableCell { "{payment.method}" }
                                        DataTableCell { strong { "{format_inr(payment.amount)}" } }
                                        DataTableCell {
                                            StatusBadge { tone: payment_tone(payment.status), "{payment.status.label()}" }
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
