use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Categorization of portal errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    ValidationError,
    /// Browser storage cannot be reached; the session lasts for this page only.
    StorageUnavailable,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppErrorKind::ValidationError => "ValidationError",
            AppErrorKind::StorageUnavailable => "StorageUnavailable",
        };
        f.write_str(name)
    }
}

/// Structured error shared by the simulated API and the UI.
///
/// `field_errors` maps a form field name to the first message for it; forms
/// render these inline next to the input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: BTreeMap<String, String>,
}

impl AppError {
    fn of(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: BTreeMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: BTreeMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Validation failure for a single field.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = BTreeMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::of(AppErrorKind::StorageUnavailable, message)
    }

    /// Message for a toast: the first field error when there is one,
    /// otherwise the top-level message.
    pub fn toast_message(&self) -> String {
        self.field_errors
            .values()
            .next()
            .cloned()
            .unwrap_or_else(|| self.message.clone())
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_sets_kind_and_map() {
        let err = AppError::field("email", "Please enter your email");
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_error("email"), Some("Please enter your email"));
        assert_eq!(err.toast_message(), "Please enter your email");
    }

    #[test]
    fn toast_message_without_fields_uses_message() {
        let err = AppError::storage_unavailable("Sign-in will not survive a reload");
        assert_eq!(err.kind, AppErrorKind::StorageUnavailable);
        assert_eq!(err.toast_message(), "Sign-in will not survive a reload");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::storage_unavailable("localStorage blocked");
        assert_eq!(format!("{}", err), "StorageUnavailable: localStorage blocked");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = AppError::field("phone", "Please enter a valid phone number");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }

    #[test]
    fn empty_field_errors_are_skipped_in_json() {
        let json = serde_json::to_string(&AppError::storage_unavailable("blocked")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
