use crate::auth::use_session;
use crate::hooks::use_api;
use crate::routes::{route_for, Route};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdHeartPulse;
use dioxus_free_icons::Icon;
use services::fixtures::{DEMO_CREDENTIALS, DEMO_PASSWORD};
use shared_types::{AppError, LoginRequest, Role, ALL_ROLES};
use shared_ui::{
    notify, use_toast, Button, Card, CardContent, CardFooter, CardHeader, Input, SelectField,
    ToastType,
};

/// `(key, label)` pairs for the role selects on the entry pages.
pub fn role_options() -> Vec<(String, String)> {
    ALL_ROLES
        .iter()
        .map(|r| (r.as_str().to_string(), r.display_name().to_string()))
        .collect()
}

/// Brand block above the entry forms.
#[component]
pub fn AuthBrand() -> Element {
    rsx! {
        div { class: "auth-brand",
            span { class: "auth-brand-mark",
                Icon::<LdHeartPulse> { icon: LdHeartPulse, width: 28, height: 28 }
            }
            h1 { "HealthHub" }
            p { "Integrated Healthcare Management System" }
        }
    }
}

/// Sign-in page. Any password is accepted; the chosen role decides where the
/// user lands.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let api = use_api();
    let toasts = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Patient);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        let toasts = toasts.clone();
        let mut session = session.clone();
        async move {
            evt.prevent_default();
            error.set(None);
            let req = LoginRequest {
                email: email(),
                password: password(),
                role: role(),
            };
            if let Err(e) = req.check() {
                notify(&toasts, ToastType::Error, "Error", e.toast_message());
                error.set(Some(e));
                return;
            }

            loading.set(true);
            notify(&toasts, ToastType::Info, "Signing in", "Please wait...");
            match api.login(req).await {
                Ok(signed_in) => {
                    let landing = signed_in.landing_path();
                    notify(
                        &toasts,
                        ToastType::Success,
                        "Login Successful",
                        format!("Welcome as {}", signed_in.role),
                    );
                    session.sign_in(signed_in);
                    navigator().push(route_for(&landing));
                }
                Err(e) => {
                    notify(&toasts, ToastType::Error, "Error", e.toast_message());
                    error.set(Some(e));
                }
            }
            loading.set(false);
        }
    };

    let field_error = move |field: &str| -> Option<String> {
        error.read().as_ref().and_then(|e| e.field_error(field)).map(String::from)
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            AuthBrand {}
            Card { class: "auth-card",
                CardHeader { title: "Sign In", description: "Access your healthcare dashboard" }
                CardContent {
                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            id: "email",
                            placeholder: "you@hospital.com",
                            value: email(),
                            error: field_error("email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            id: "password",
                            placeholder: "••••••••",
                            value: password(),
                            error: field_error("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        SelectField {
                            label: "Role",
                            id: "role",
                            value: role().as_str().to_string(),
                            options: role_options(),
                            on_change: move |key: String| role.set(Role::parse(&key).unwrap_or_default()),
                        }
                        Button { class: "auth-submit", submit: true, loading: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                    div { class: "auth-demo",
                        p { strong { "Demo Credentials:" } }
                        for cred in DEMO_CREDENTIALS {
                            p { key: "{cred.email}", "{cred.name}: {cred.email} / {DEMO_PASSWORD}" }
                        }
                    }
                }
                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Signup {}, "Sign Up" }
                    }
                }
            }
        }
    }
}
