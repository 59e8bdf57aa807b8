use crate::auth::use_session;
use crate::hooks::use_api;
use crate::routes::login::{role_options, AuthBrand};
use crate::routes::{route_for, Route};
use dioxus::prelude::*;
use shared_types::{AppError, Role, SignupMethod, SignupRequest};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, Input,
    SelectField, TabBar, ToastType,
};

const COUNTRY_CODES: &[&str] = &["+91", "+1", "+44"];

fn method_key(method: SignupMethod) -> &'static str {
    match method {
        SignupMethod::Email => "email",
        SignupMethod::Phone => "phone",
        SignupMethod::Google => "google",
    }
}

fn method_from_key(key: &str) -> SignupMethod {
    match key {
        "phone" => SignupMethod::Phone,
        "google" => SignupMethod::Google,
        _ => SignupMethod::Email,
    }
}

/// Toast lines shown while and after each signup method runs.
fn progress_toasts(req: &SignupRequest) -> ((&'static str, String), (&'static str, String)) {
    match req.method {
        SignupMethod::Email => (
            ("Creating Account", "Please wait...".to_string()),
            ("Account Created", format!("Welcome {}!", req.name.trim())),
        ),
        SignupMethod::Phone => (
            ("Sending OTP", format!("OTP sent to {}", req.phone.trim())),
            ("OTP Verified", "Account created successfully".to_string()),
        ),
        SignupMethod::Google => (
            ("Redirecting to Google", "Please wait...".to_string()),
            ("Signed Up Successfully", "Welcome!".to_string()),
        ),
    }
}

/// Account creation by email, phone or Google.
#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let api = use_api();
    let toasts = use_toast();
    let mut draft = use_signal(|| SignupRequest {
        country_code: COUNTRY_CODES[0].to_string(),
        ..SignupRequest::default()
    });
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut loading = use_signal(|| false);

    let mut submit = move |req: SignupRequest| {
        let api = api.clone();
        let toasts = toasts.clone();
        let mut session = session.clone();
        spawn(async move {
            error.set(None);
            if let Err(e) = req.check() {
                notify(&toasts, ToastType::Error, "Error", e.toast_message());
                error.set(Some(e));
                return;
            }

            let ((start_title, start_body), (done_title, done_body)) = progress_toasts(&req);
            loading.set(true);
            notify(&toasts, ToastType::Info, start_title, start_body);
            match api.signup(req).await {
                Ok(created) => {
                    let landing = created.landing_path();
                    notify(&toasts, ToastType::Success, done_title, done_body);
                    session.sign_in(created);
                    navigator().push(route_for(&landing));
                }
                Err(e) => {
                    notify(&toasts, ToastType::Error, "Error", e.toast_message());
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    let field_error = move |field: &str| -> Option<String> {
        error.read().as_ref().and_then(|e| e.field_error(field)).map(String::from)
    };

    let method = draft.read().method;
    let tabs: Vec<(String, String)> = [SignupMethod::Email, SignupMethod::Phone, SignupMethod::Google]
        .into_iter()
        .map(|m| (method_key(m).to_string(), m.label().to_string()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            AuthBrand {}
            Card { class: "auth-card",
                CardHeader { title: "Create Account", description: "Choose how you want to sign up" }
                CardContent {
                    TabBar {
                        options: tabs,
                        selected: method_key(method).to_string(),
                        on_select: move |key: String| {
                            error.set(None);
                            draft.write().method = method_from_key(&key);
                        },
                    }
                    form {
                        class: "auth-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            submit(draft());
                        },
                        if method != SignupMethod::Google {
                            Input {
                                label: "Full Name",
                                id: "name",
                                placeholder: "Your full name",
                                value: draft.read().name.clone(),
                                error: field_error("name"),
                                on_input: move |e: FormEvent| draft.write().name = e.value(),
                            }
                        }
                        {match method {
                            SignupMethod::Email => rsx! {
                                Input {
                                    label: "Email",
                                    input_type: "email",
                                    id: "email",
                                    placeholder: "you@example.com",
                                    value: draft.read().email.clone(),
                                    error: field_error("email"),
                                    on_input: move |e: FormEvent| draft.write().email = e.value(),
                                }
                                Input {
                                    label: "Password",
                                    input_type: "password",
                                    id: "password",
                                    placeholder: "At least 6 characters",
                                    value: draft.read().password.clone(),
                                    error: field_error("password"),
                                    on_input: move |e: FormEvent| draft.write().password = e.value(),
                                }
                                Input {
                                    label: "Confirm Password",
                                    input_type: "password",
                                    id: "confirm_password",
                                    value: draft.read().confirm_password.clone(),
                                    error: field_error("confirm_password"),
                                    on_input: move |e: FormEvent| draft.write().confirm_password = e.value(),
                                }
                            },
                            SignupMethod::Phone => rsx! {
                                div { class: "field-grid",
                                    SelectField {
                                        label: "Code",
                                        id: "country_code",
                                        value: draft.read().country_code.clone(),
                                        options: COUNTRY_CODES.iter().map(|c| (c.to_string(), c.to_string())).collect::<Vec<_>>(),
                                        on_change: move |code: String| draft.write().country_code = code,
                                    }
                                    Input {
                                        label: "Phone Number",
                                        input_type: "tel",
                                        id: "phone",
                                        placeholder: "98765 43210",
                                        value: draft.read().phone.clone(),
                                        error: field_error("phone"),
                                        on_input: move |e: FormEvent| draft.write().phone = e.value(),
                                    }
                                }
                            },
                            SignupMethod::Google => rsx! {
                                p { class: "muted", "Pick your role, then continue with your Google account." }
                            },
                        }}
                        SelectField {
                            label: "Role",
                            id: "role",
                            value: draft.read().role.as_str().to_string(),
                            options: role_options(),
                            on_change: move |key: String| draft.write().role = Role::parse(&key).unwrap_or_default(),
                        }
                        {match method {
                            SignupMethod::Email => rsx! {
                                Button { class: "auth-submit", submit: true, loading: loading(), "Create Account" }
                            },
                            SignupMethod::Phone => rsx! {
                                Button { class: "auth-submit", submit: true, loading: loading(), "Send OTP & Sign Up" }
                            },
                            SignupMethod::Google => rsx! {
                                Button {
                                    class: "auth-google",
                                    variant: ButtonVariant::Outline,
                                    submit: true,
                                    loading: loading(),
                                    "Continue with Google"
                                }
                            },
                        }}
                    }
                }
                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign In" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_keys_roundtrip() {
        for method in [SignupMethod::Email, SignupMethod::Phone, SignupMethod::Google] {
            assert_eq!(method_from_key(method_key(method)), method);
        }
    }

    #[test]
    fn phone_toasts_mention_number() {
        let req = SignupRequest {
            method: SignupMethod::Phone,
            phone: " 9876543210 ".into(),
            ..Default::default()
        };
        let ((start, body), (done, _)) = progress_toasts(&req);
        assert_eq!(start, "Sending OTP");
        assert_eq!(body, "OTP sent to 9876543210");
        assert_eq!(done, "OTP Verified");
    }
}
