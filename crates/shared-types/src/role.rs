use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal role. Exactly one is active per session and it decides both the
/// navigation rail contents and the landing route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Nurse,
    #[default]
    Patient,
}

/// All roles in the order the entry forms list them.
pub const ALL_ROLES: &[Role] = &[Role::Patient, Role::Doctor, Role::Nurse, Role::Admin];

impl Role {
    /// Lowercase key used in URLs and browser storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Nurse => "nurse",
            Role::Patient => "patient",
        }
    }

    /// Human-readable label shown in selects and the rail header.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Doctor => "Doctor",
            Role::Nurse => "Nurse",
            Role::Patient => "Patient",
        }
    }

    /// Parse a stored or submitted role key. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "doctor" => Some(Role::Doctor),
            "nurse" => Some(Role::Nurse),
            "patient" => Some(Role::Patient),
            _ => None,
        }
    }

    /// Landing path for this role, e.g. `/dashboard/nurse`.
    pub fn dashboard_root(&self) -> String {
        dashboard_root_for_key(self.as_str())
    }

    /// Path of a page below this role's dashboard root.
    pub fn dashboard_path(&self, segment: &str) -> String {
        format!("{}/{}", self.dashboard_root(), segment)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dashboard root for a raw role key, recognised or not.
pub fn dashboard_root_for_key(key: &str) -> String {
    format!("/dashboard/{key}")
}

/// Role as read back from a session record.
///
/// A key outside the closed set is kept verbatim so the shell can still admit
/// the session and show the base rail for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleKey {
    Known(Role),
    Unknown(String),
}

impl RoleKey {
    /// Parse a stored key. Blank input means there is no role at all.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim();
        if key.is_empty() {
            return None;
        }
        Some(match Role::parse(key) {
            Some(role) => RoleKey::Known(role),
            None => RoleKey::Unknown(key.to_string()),
        })
    }

    pub fn known(&self) -> Option<Role> {
        match self {
            RoleKey::Known(role) => Some(*role),
            RoleKey::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleKey::Known(role) => role.as_str(),
            RoleKey::Unknown(key) => key,
        }
    }

    /// Rail and top bar label. Unknown keys show as stored.
    pub fn display_name(&self) -> &str {
        match self {
            RoleKey::Known(role) => role.display_name(),
            RoleKey::Unknown(key) => key,
        }
    }

    pub fn dashboard_root(&self) -> String {
        dashboard_root_for_key(self.as_str())
    }
}

impl From<Role> for RoleKey {
    fn from(role: Role) -> Self {
        RoleKey::Known(role)
    }
}

impl From<String> for RoleKey {
    fn from(raw: String) -> Self {
        RoleKey::parse(&raw).unwrap_or(RoleKey::Unknown(raw))
    }
}

impl From<RoleKey> for String {
    fn from(key: RoleKey) -> Self {
        key.as_str().to_string()
    }
}

impl PartialEq<Role> for RoleKey {
    fn eq(&self, other: &Role) -> bool {
        self.known() == Some(*other)
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_role() {
        for role in ALL_ROLES {
            assert_eq!(Role::parse(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(Role::parse("  Doctor "), Some(Role::Doctor));
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Role::parse("janitor"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn dashboard_root_uses_lowercase_key() {
        assert_eq!(Role::Nurse.dashboard_root(), "/dashboard/nurse");
        assert_eq!(Role::Admin.dashboard_path("users"), "/dashboard/admin/users");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), r#""doctor""#);
        let role: Role = serde_json::from_str(r#""patient""#).unwrap();
        assert_eq!(role, Role::Patient);
    }

    #[test]
    fn role_key_keeps_unknown_values() {
        assert_eq!(RoleKey::parse(" Nurse "), Some(RoleKey::Known(Role::Nurse)));
        let key = RoleKey::parse("janitor").unwrap();
        assert_eq!(key, RoleKey::Unknown("janitor".to_string()));
        assert_eq!(key.display_name(), "janitor");
        assert_eq!(key.dashboard_root(), "/dashboard/janitor");
        assert_eq!(RoleKey::parse("   "), None);
    }

    #[test]
    fn role_key_compares_with_role() {
        assert_eq!(RoleKey::from(Role::Admin), Role::Admin);
        assert!(RoleKey::Unknown("admin2".into()) != Role::Admin);
    }

    #[test]
    fn role_key_serializes_as_plain_string() {
        let json = serde_json::to_string(&RoleKey::Unknown("janitor".into())).unwrap();
        assert_eq!(json, r#""janitor""#);
        let key: RoleKey = serde_json::from_str(r#""doctor""#).unwrap();
        assert_eq!(key, RoleKey::Known(Role::Doctor));
    }

    #[test]
    fn display_names_match_select_labels() {
        assert_eq!(Role::Admin.display_name(), "Administrator");
        assert_eq!(Role::Patient.display_name(), "Patient");
    }
}
