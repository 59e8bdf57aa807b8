use crate::format_helpers::{format_date_human, format_inr};
use crate::hooks::use_page_ready;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCreditCard, LdFileText};
use dioxus_free_icons::Icon;
use services::fixtures;
use shared_types::{outstanding_total, InvoiceStatus};
use shared_ui::{
    Card, CardContent, CardHeader, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, PageHeader, PageSkeleton, StatCard, StatusBadge, Tone,
};

fn invoice_tone(status: InvoiceStatus) -> Tone {
    match status {
        InvoiceStatus::Paid => Tone::Success,
        InvoiceStatus::Pending => Tone::Warning,
        InvoiceStatus::Overdue => Tone::Danger,
    }
}

#[component]
pub fn PatientBilling() -> Element {
    let ready = use_page_ready();
    let invoices = use_hook(fixtures::invoices);

    let outstanding = outstanding_total(&invoices);
    let paid: u64 = invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Paid)
        .map(|i| i.amount)
        .sum();

    rsx! {
        PageHeader { title: "Billing & Invoices", subtitle: "View and manage your medical bills" }
        if !ready() {
            PageSkeleton { cards: 3, rows: 3 }
        } else {
            div { class: "stat-grid",
                StatCard {
                    label: "Total Invoices",
                    value: "{invoices.len()}",
                    icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
                }
                StatCard { label: "Total Paid", value: format_inr(paid) }
                StatCard {
                    label: "Outstanding",
                    value: format_inr(outstanding),
                    decrease: outstanding > 0,
                    change: if outstanding > 0 { "Payment due".to_string() } else { "All settled".to_string() },
                }
            }
            Card {
                CardHeader { title: "Invoices", description: "Your billing history" }
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Invoice" }
                            DataTableColumn { "Date" }
                            DataTableColumn { "Description" }
                            DataTableColumn { "Amount" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "" }
                        }
                        DataTableBody {
                            for invoice in invoices.iter() {
                                DataTableRow { key: "{invoice.id}",
                                    DataTableCell { "{invoice.id}" }
                                    DataTableCell { "{format_date_human(invoice.date)}" }
                                    DataTableCell { "{invoice.description}" }
                                    DataTableCell { strong { "{format_inr(invoice.amount)}" } }
                                    DataTableCell {
                                        StatusBadge { tone: invoice_tone(invoice.status), "{invoice.status.label()}" }
                                    }
                                    DataTableCell {
                                        if invoice.status.is_outstanding() {
                                            Link { class: "button-link", to: Route::PatientCheckout {}, "Pay Now" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Card {
                CardHeader { title: "Payment Methods" }
                CardContent {
                    p { class: "icon-line",
                        Icon::<LdCreditCard> { icon: LdCreditCard, width: 16, height: 16 }
                        span { "Cards are entered at checkout and never stored." }
                    }
                }
            }
        }
    }
}
