use crate::format_helpers::{format_date_human, format_inr};
use crate::hooks::use_api;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdLock};
use dioxus_free_icons::Icon;
use services::api::{stamp_id, today};
use services::fixtures::CHECKOUT_AMOUNT;
use shared_types::{AppError, PaymentDetails};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, Input,
    PageHeader, ToastType,
};

const CHECKOUT_INVOICE: &str = "INV-2024-002";
const CHECKOUT_ITEM: &str = "Lab Tests & X-Ray";

/// Where the patient is in the checkout flow. Only moves forward on success;
/// cancelling the payment step goes back to review.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutStep {
    Review,
    Payment,
    Confirmation { transaction: String, amount: u64 },
}

impl CheckoutStep {
    pub fn proceed(&self) -> Self {
        match self {
            CheckoutStep::Review => CheckoutStep::Payment,
            other => other.clone(),
        }
    }

    pub fn cancel(&self) -> Self {
        match self {
            CheckoutStep::Payment => CheckoutStep::Review,
            other => other.clone(),
        }
    }

    pub fn confirm(&self, transaction: String, amount: u64) -> Self {
        match self {
            CheckoutStep::Payment => CheckoutStep::Confirmation { transaction, amount },
            other => other.clone(),
        }
    }
}

#[component]
pub fn PatientCheckout() -> Element {
    let mut step = use_signal(|| CheckoutStep::Review);
    let toasts = use_toast();

    rsx! {
        PageHeader { title: "Secure Payment", subtitle: "Complete your payment securely" }
        div { class: "checkout-grid",
            {match step() {
                CheckoutStep::Review => rsx! {
                    Card {
                        CardHeader { title: "Order Review", description: "Review your invoice before payment" }
                        CardContent {
                            dl { class: "detail-list",
                                dt { "{CHECKOUT_ITEM}" }
                                dd { "{format_inr(CHECKOUT_AMOUNT)}" }
                                dt { "Consultation Fee" }
                                dd { "{format_inr(0)}" }
                                dt { strong { "Total" } }
                                dd { strong { "{format_inr(CHECKOUT_AMOUNT)}" } }
                            }
                        }
                        CardFooter {
                            Button {
                                onclick: move |_| {
                                    notify(&toasts, ToastType::Info, "Proceeding to Payment", "Enter your card details to continue");
                                    let next = step.read().proceed();
                                    step.set(next);
                                },
                                "Proceed to Payment"
                            }
                        }
                    }
                },
                CheckoutStep::Payment => rsx! {
                    PaymentForm {
                        on_cancel: move |_| {
                            let back = step.read().cancel();
                            step.set(back);
                        },
                        on_paid: move |(transaction, amount): (String, u64)| {
                            let done = step.read().confirm(transaction, amount);
                            step.set(done);
                        },
                    }
                },
                CheckoutStep::Confirmation { transaction, amount } => rsx! {
                    Card {
                        CardContent {
                            div { class: "checkout-done",
                                Icon::<LdCheck> { icon: LdCheck, width: 48, height: 48 }
                                h2 { "Payment Successful" }
                                p { class: "muted", "Your payment has been processed successfully" }
                                dl { class: "detail-list",
                                    dt { "Transaction ID:" }
                                    dd { code { "{transaction}" } }
                                    dt { "Amount:" }
                                    dd { "{format_inr(amount)}" }
                                    dt { "Date:" }
                                    dd { "{format_date_human(today())}" }
                                }
                                Link { class: "button-link", to: Route::PatientBilling {}, "Back to Billing" }
                            }
                        }
                    }
                },
            }}
            OrderSummary {}
        }
    }
}

#[component]
fn PaymentForm(on_cancel: EventHandler<()>, on_paid: EventHandler<(String, u64)>) -> Element {
    let api = use_api();
    let toasts = use_toast();
    let mut details = use_signal(PaymentDetails::default);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut paying = use_signal(|| false);

    let pay = {
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            let api = api.clone();
            let toasts = toasts.clone();
            async move {
                evt.prevent_default();
                let card = details();
                if let Err(e) = card.check() {
                    notify(&toasts, ToastType::Error, "Error", e.toast_message());
                    error.set(Some(e));
                    return;
                }
                error.set(None);
                paying.set(true);
                notify(
                    &toasts,
                    ToastType::Info,
                    "Processing Payment",
                    "Please wait while we process your payment...",
                );
                let result = api.pay(&card, CHECKOUT_AMOUNT).await;
                paying.set(false);
                match result {
                    Ok(amount) => {
                        notify(
                            &toasts,
                            ToastType::Success,
                            "Payment Successful",
                            format!("Payment of {} has been processed", format_inr(amount)),
                        );
                        on_paid.call((stamp_id("TXN-"), amount));
                    }
                    Err(e) => {
                        notify(&toasts, ToastType::Error, "Error", e.toast_message());
                        error.set(Some(e));
                    }
                }
            }
        }
    };

    let field_error = move |field: &str| -> Option<String> {
        error.read().as_ref().and_then(|e| e.field_error(field)).map(String::from)
    };

    rsx! {
        Card {
            CardHeader { title: "Payment Information", description: "Enter your card details securely" }
            CardContent {
                form { class: "stack", onsubmit: pay,
                    Input {
                        label: "Cardholder Name",
                        placeholder: "John Doe",
                        value: details.read().card_name.clone(),
                        error: field_error("card_name"),
                        on_input: move |e: FormEvent| details.write().card_name = e.value(),
                    }
                    Input {
                        label: "Card Number",
                        placeholder: "1234 5678 9012 3456",
                        value: details.read().card_number.clone(),
                        error: field_error("card_number"),
                        on_input: move |e: FormEvent| details.write().card_number = e.value(),
                    }
                    div { class: "field-grid",
                        Input {
                            label: "Expiry Date",
                            placeholder: "MM/YY",
                            value: details.read().expiry.clone(),
                            error: field_error("expiry"),
                            on_input: move |e: FormEvent| details.write().expiry = e.value(),
                        }
                        Input {
                            label: "CVV",
                            input_type: "password",
                            placeholder: "123",
                            value: details.read().cvv.clone(),
                            error: field_error("cvv"),
                            on_input: move |e: FormEvent| details.write().cvv = e.value(),
                        }
                    }
                    div { class: "row-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: paying(),
                            onclick: move |_| {
                                notify(&toasts, ToastType::Info, "Payment Cancelled", "Returning to order review");
                                on_cancel.call(());
                            },
                            "Cancel"
                        }
                        Button { submit: true, loading: paying(),
                            if paying() { "Processing..." } else { "Pay {format_inr(CHECKOUT_AMOUNT)}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderSummary() -> Element {
    rsx! {
        Card {
            CardHeader { title: "Order Summary" }
            CardContent {
                dl { class: "detail-list",
                    dt { "Invoice" }
                    dd { "{CHECKOUT_INVOICE}" }
                    dt { "Amount Due" }
                    dd { strong { "{format_inr(CHECKOUT_AMOUNT)}" } }
                }
                p { class: "icon-line muted",
                    Icon::<LdLock> { icon: LdLock, width: 14, height: 14 }
                    span { "Secure Payment" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn steps_advance_in_order() {
        let step = CheckoutStep::Review.proceed();
        assert_eq!(step, CheckoutStep::Payment);
        let done = step.confirm("TXN-1".into(), CHECKOUT_AMOUNT);
        assert_eq!(
            done,
            CheckoutStep::Confirmation { transaction: "TXN-1".into(), amount: 22_500 }
        );
    }

    #[test]
    fn cancel_returns_to_review() {
        assert_eq!(CheckoutStep::Payment.cancel(), CheckoutStep::Review);
    }

    #[test]
    fn review_cannot_skip_to_confirmation() {
        assert_eq!(CheckoutStep::Review.confirm("TXN-1".into(), 1), CheckoutStep::Review);
    }
}
