use serde::{Deserialize, Serialize};

use crate::role::RoleKey;

/// How the user reached the portal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    #[default]
    Password,
    Phone,
    Google,
}

impl AuthMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::Password => "password",
            AuthMethod::Phone => "phone",
            AuthMethod::Google => "google",
        }
    }

    /// Parse a stored method key, falling back to `Password`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "phone" => AuthMethod::Phone,
            "google" => AuthMethod::Google,
            _ => AuthMethod::Password,
        }
    }
}

/// Contact handle the user signed in with. Stored verbatim, never validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Contact {
    Email(String),
    Phone(String),
}

impl Contact {
    pub fn value(&self) -> &str {
        match self {
            Contact::Email(v) | Contact::Phone(v) => v,
        }
    }
}

/// Identity fields recorded alongside the role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub auth_method: AuthMethod,
}

impl Identity {
    pub fn email(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            contact: Some(Contact::Email(email.into())),
            display_name: display_name.into(),
            auth_method: AuthMethod::Password,
        }
    }

    pub fn phone(phone: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            contact: Some(Contact::Phone(phone.into())),
            display_name: display_name.into(),
            auth_method: AuthMethod::Phone,
        }
    }

    pub fn google(display_name: impl Into<String>) -> Self {
        Self {
            contact: None,
            display_name: display_name.into(),
            auth_method: AuthMethod::Google,
        }
    }

    /// Name for the top bar: display name, else the contact handle, else "Guest".
    pub fn label(&self) -> String {
        if !self.display_name.trim().is_empty() {
            return self.display_name.clone();
        }
        self.contact
            .as_ref()
            .map(|c| c.value().to_string())
            .unwrap_or_else(|| "Guest".to_string())
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.label()
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// The currently signed-in role and identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub role: RoleKey,
    pub identity: Identity,
}

impl Session {
    pub fn new(role: impl Into<RoleKey>, identity: Identity) -> Self {
        Self {
            role: role.into(),
            identity,
        }
    }

    /// Path the entry pages redirect to after sign-in.
    pub fn landing_path(&self) -> String {
        self.role.dashboard_root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[test]
    fn landing_path_follows_role() {
        let session = Session::new(Role::Doctor, Identity::email("d@x.com", "Dr. Sharma"));
        assert_eq!(session.landing_path(), "/dashboard/doctor");
    }

    #[test]
    fn label_prefers_display_name() {
        let id = Identity::email("nurse@hospital.com", "Nurse Priya");
        assert_eq!(id.label(), "Nurse Priya");
    }

    #[test]
    fn label_falls_back_to_contact_then_guest() {
        let id = Identity {
            contact: Some(Contact::Phone("9876543210".into())),
            display_name: "  ".into(),
            auth_method: AuthMethod::Phone,
        };
        assert_eq!(id.label(), "9876543210");
        assert_eq!(Identity::default().label(), "Guest");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(Identity::google("google user").initials(), "GU");
        assert_eq!(Identity::email("a@b.c", "Dr. Priya Sharma").initials(), "DP");
    }

    #[test]
    fn auth_method_parse_falls_back_to_password() {
        assert_eq!(AuthMethod::from_str_or_default("google"), AuthMethod::Google);
        assert_eq!(AuthMethod::from_str_or_default("PHONE"), AuthMethod::Phone);
        assert_eq!(AuthMethod::from_str_or_default("sso"), AuthMethod::Password);
    }

    #[test]
    fn session_json_roundtrip() {
        let session = Session::new(Role::Nurse, Identity::phone("+91 98765 43210", "Priya"));
        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, parsed);
    }
}
