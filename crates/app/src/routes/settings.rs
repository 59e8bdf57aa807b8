use crate::auth::use_session;
use crate::routes::route_for;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLock, LdLogOut, LdShield};
use dioxus_free_icons::Icon;
use shared_types::{Contact, ENTRY_PATH};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, Input, PageHeader,
    TabBar, ToastType,
};

const NOTIFICATION_PREFS: &[(&str, &str)] = &[
    ("Email Notifications", "Receive updates via email"),
    ("SMS Alerts", "Get important alerts via SMS"),
    ("Push Notifications", "Receive browser notifications"),
    ("Weekly Reports", "Get weekly summary reports"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Account,
    Security,
    Notifications,
}

impl SettingsTab {
    const ALL: [SettingsTab; 3] = [SettingsTab::Account, SettingsTab::Security, SettingsTab::Notifications];

    fn key(self) -> &'static str {
        match self {
            SettingsTab::Account => "account",
            SettingsTab::Security => "security",
            SettingsTab::Notifications => "notifications",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SettingsTab::Account => "Account",
            SettingsTab::Security => "Security",
            SettingsTab::Notifications => "Notifications",
        }
    }

    fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .unwrap_or(SettingsTab::Account)
    }
}

/// Account, security and notification preferences. Nothing here persists
/// beyond the page except logout.
#[component]
pub fn Settings() -> Element {
    let mut tab = use_signal(|| SettingsTab::Account);

    let options = SettingsTab::ALL
        .iter()
        .map(|t| (t.key().to_string(), t.label().to_string()))
        .collect::<Vec<_>>();

    rsx! {
        PageHeader { title: "Settings", subtitle: "Manage your account and preferences" }
        div { class: "stack",
            TabBar {
                options,
                selected: tab().key().to_string(),
                on_select: move |key: String| tab.set(SettingsTab::from_key(&key)),
            }
            {match tab() {
                SettingsTab::Account => rsx! { AccountSettings {} },
                SettingsTab::Security => rsx! { SecuritySettings {} },
                SettingsTab::Notifications => rsx! { NotificationSettings {} },
            }}
        }
    }
}

#[component]
fn AccountSettings() -> Element {
    let session = use_session();
    let toasts = use_toast();
    let identity = session
        .current
        .read()
        .as_ref()
        .map(|s| s.identity.clone())
        .unwrap_or_default();

    let mut full_name = use_signal(|| identity.display_name.clone());
    let mut email = use_signal(|| match &identity.contact {
        Some(Contact::Email(e)) => e.clone(),
        _ => String::new(),
    });
    let mut phone = use_signal(|| match &identity.contact {
        Some(Contact::Phone(p)) => p.clone(),
        _ => String::new(),
    });

    rsx! {
        Card {
            CardHeader { title: "Account Settings", description: "Update your personal information" }
            CardContent { class: "stack",
                Input { label: "Full Name", value: full_name(), on_input: move |e: FormEvent| full_name.set(e.value()) }
                Input { label: "Email", input_type: "email", value: email(), on_input: move |e: FormEvent| email.set(e.value()) }
                Input { label: "Phone", input_type: "tel", value: phone(), on_input: move |e: FormEvent| phone.set(e.value()) }
                div {
                    Button {
                        onclick: move |_| notify(&toasts, ToastType::Success, "Changes Saved", "Your account details were updated"),
                        "Save Changes"
                    }
                }
            }
        }
    }
}

#[component]
fn SecuritySettings() -> Element {
    let mut session = use_session();
    let toasts = use_toast();

    rsx! {
        Card {
            CardHeader { title: "Security Settings", description: "Manage your password and sign-in" }
            CardContent { class: "stack",
                div { class: "setting-row",
                    span { class: "setting-icon", Icon::<LdLock> { icon: LdLock, width: 20, height: 20 } }
                    div { class: "setting-text",
                        p { class: "setting-title", "Change Password" }
                        p { class: "muted", "Update your password regularly" }
                    }
                    Button { variant: ButtonVariant::Outline, "Change" }
                }
                div { class: "setting-row",
                    span { class: "setting-icon", Icon::<LdShield> { icon: LdShield, width: 20, height: 20 } }
                    div { class: "setting-text",
                        p { class: "setting-title", "Two-Factor Authentication" }
                        p { class: "muted", "Add an extra layer of security" }
                    }
                    Button { "Enable" }
                }
                div { class: "setting-row",
                    span { class: "setting-icon danger", Icon::<LdLogOut> { icon: LdLogOut, width: 20, height: 20 } }
                    div { class: "setting-text",
                        p { class: "setting-title", "Logout Everywhere" }
                        p { class: "muted", "Sign out from all devices" }
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| {
                            session.sign_out();
                            notify(&toasts, ToastType::Info, "Logged Out", "You have been signed out");
                            navigator().replace(route_for(ENTRY_PATH));
                        },
                        "Logout"
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationSettings() -> Element {
    let toasts = use_toast();
    let mut enabled = use_signal(|| vec![true; NOTIFICATION_PREFS.len()]);

    rsx! {
        Card {
            CardHeader { title: "Notification Preferences", description: "Control how you receive notifications" }
            CardContent { class: "stack",
                for (i, (title, description)) in NOTIFICATION_PREFS.iter().enumerate() {
                    label { key: "{title}", class: "setting-row",
                        div { class: "setting-text",
                            p { class: "setting-title", "{title}" }
                            p { class: "muted", "{description}" }
                        }
                        input {
                            r#type: "checkbox",
                            checked: enabled.read()[i],
                            onchange: move |_| {
                                let mut prefs = enabled.write();
                                prefs[i] = !prefs[i];
                            },
                        }
                    }
                }
                Button {
                    onclick: move |_| notify(&toasts, ToastType::Success, "Preferences Saved", "Notification settings updated"),
                    "Save Preferences"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_keys_roundtrip() {
        for tab in SettingsTab::ALL {
            assert_eq!(SettingsTab::from_key(tab.key()), tab);
        }
        assert_eq!(SettingsTab::from_key("billing"), SettingsTab::Account);
    }
}
