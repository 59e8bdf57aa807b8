use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::role::Role;

/// Minimum password length accepted by the signup form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum number of characters in a phone number.
pub const MIN_PHONE_LEN: usize = 10;

fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Login form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub role: Role,
}

impl LoginRequest {
    /// Passwords are checked as typed; the email must not be blank.
    pub fn check(&self) -> Result<(), AppError> {
        Self {
            email: trim(&self.email),
            ..self.clone()
        }
        .validate()?;
        Ok(())
    }
}

/// Which signup tab was used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SignupMethod {
    #[default]
    Email,
    Phone,
    Google,
}

impl SignupMethod {
    pub fn label(&self) -> &'static str {
        match self {
            SignupMethod::Email => "Email",
            SignupMethod::Phone => "Phone",
            SignupMethod::Google => "Google",
        }
    }
}

/// Signup form submission. Which fields matter depends on `method`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SignupRequest {
    pub method: SignupMethod,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country_code: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl SignupRequest {
    /// Check the form, stopping at the first problem like the form does.
    ///
    /// Google signups only need a role.
    pub fn check(&self) -> Result<(), AppError> {
        if self.method == SignupMethod::Google {
            return Ok(());
        }
        if self.name.trim().is_empty() {
            return Err(AppError::field("name", "Please enter your name"));
        }
        match self.method {
            SignupMethod::Email => {
                if self.email.trim().is_empty() {
                    return Err(AppError::field("email", "Please enter your email"));
                }
                if self.password.chars().count() < MIN_PASSWORD_LEN {
                    return Err(AppError::field(
                        "password",
                        format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
                    ));
                }
                if self.password != self.confirm_password {
                    return Err(AppError::field("confirm_password", "Passwords do not match"));
                }
            }
            SignupMethod::Phone => {
                if self.phone.trim().is_empty() {
                    return Err(AppError::field("phone", "Please enter your phone number"));
                }
                if self.phone.chars().count() < MIN_PHONE_LEN {
                    return Err(AppError::field("phone", "Please enter a valid phone number"));
                }
            }
            SignupMethod::Google => {}
        }
        Ok(())
    }
}

/// Doctor's "Add New Patient" form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct NewPatientRequest {
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub name: String,
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub age: String,
    pub gender: String,
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub email: String,
    pub condition: String,
}

impl NewPatientRequest {
    /// Validate and return the parsed age.
    pub fn check(&self) -> Result<u32, AppError> {
        Self {
            name: trim(&self.name),
            age: trim(&self.age),
            phone: trim(&self.phone),
            email: trim(&self.email),
            ..self.clone()
        }
        .validate()?;
        self.age
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::field("age", "Age must be a whole number"))
    }
}

/// Doctor's "New Prescription" form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct NewPrescriptionRequest {
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub patient_name: String,
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub patient_id: String,
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub diagnosis: String,
    #[validate(length(min = 1, message = "Please add at least one medication"))]
    pub medications: Vec<String>,
}

impl NewPrescriptionRequest {
    /// Trim the text fields and drop blank medication rows before validating.
    pub fn check(&mut self) -> Result<(), AppError> {
        self.patient_name = trim(&self.patient_name);
        self.patient_id = trim(&self.patient_id);
        self.diagnosis = trim(&self.diagnosis);
        self.medications.retain(|m| !m.trim().is_empty());
        self.validate()?;
        Ok(())
    }
}

/// Nurse's "New Report" form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct NewReportRequest {
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub patient_name: String,
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub patient_id: String,
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub report_type: String,
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub shift: String,
    pub notes: String,
}

impl NewReportRequest {
    pub fn check(&self) -> Result<(), AppError> {
        Self {
            patient_name: trim(&self.patient_name),
            patient_id: trim(&self.patient_id),
            report_type: trim(&self.report_type),
            shift: trim(&self.shift),
            ..self.clone()
        }
        .validate()?;
        Ok(())
    }
}

/// Nurse's "Update Vitals" form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct VitalsUpdate {
    #[validate(length(min = 1, message = "Please fill in all required fields (BP, Temperature, Pulse)"))]
    pub bp: String,
    #[validate(length(min = 1, message = "Please fill in all required fields (BP, Temperature, Pulse)"))]
    pub temperature: String,
    #[validate(length(min = 1, message = "Please fill in all required fields (BP, Temperature, Pulse)"))]
    pub pulse: String,
}

impl VitalsUpdate {
    pub fn check(&self) -> Result<(), AppError> {
        Self {
            bp: trim(&self.bp),
            temperature: trim(&self.temperature),
            pulse: trim(&self.pulse),
        }
        .validate()?;
        Ok(())
    }
}

/// Card details on the checkout payment step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct PaymentDetails {
    #[validate(length(min = 1, message = "Cardholder name is required"))]
    pub card_name: String,
    #[validate(length(min = 1, message = "Card number is required"))]
    pub card_number: String,
    #[validate(length(min = 1, message = "Expiry date is required"))]
    pub expiry: String,
    #[validate(length(min = 1, message = "CVV is required"))]
    pub cvv: String,
}

impl PaymentDetails {
    pub fn check(&self) -> Result<(), AppError> {
        Self {
            card_name: trim(&self.card_name),
            card_number: trim(&self.card_number),
            expiry: trim(&self.expiry),
            cvv: trim(&self.cvv),
        }
        .validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    fn email_signup() -> SignupRequest {
        SignupRequest {
            method: SignupMethod::Email,
            name: "Asha Rao".into(),
            email: "asha@hospital.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            role: Role::Nurse,
            ..Default::default()
        }
    }

    #[test]
    fn login_requires_email_and_password() {
        let req = LoginRequest {
            email: String::new(),
            password: String::new(),
            role: Role::Admin,
        };
        let err = req.check().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_error("email"), Some("Email is required"));
        assert_eq!(err.field_error("password"), Some("Password is required"));
    }

    #[test]
    fn valid_email_signup_passes() {
        assert!(email_signup().check().is_ok());
    }

    #[test]
    fn signup_name_is_checked_first() {
        let req = SignupRequest {
            name: "   ".into(),
            email: String::new(),
            ..email_signup()
        };
        let err = req.check().unwrap_err();
        assert_eq!(err.field_error("name"), Some("Please enter your name"));
    }

    #[test]
    fn signup_short_password_rejected() {
        let req = SignupRequest {
            password: "abc".into(),
            confirm_password: "abc".into(),
            ..email_signup()
        };
        let err = req.check().unwrap_err();
        assert_eq!(
            err.field_error("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn signup_password_mismatch_rejected() {
        let req = SignupRequest {
            confirm_password: "secret2".into(),
            ..email_signup()
        };
        assert_eq!(
            req.check().unwrap_err().field_error("confirm_password"),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn phone_signup_needs_ten_characters() {
        let mut req = SignupRequest {
            method: SignupMethod::Phone,
            name: "Ravi".into(),
            phone: "98765".into(),
            ..Default::default()
        };
        assert_eq!(
            req.check().unwrap_err().field_error("phone"),
            Some("Please enter a valid phone number")
        );
        req.phone = "9876543210".into();
        assert!(req.check().is_ok());
    }

    #[test]
    fn google_signup_needs_nothing_but_role() {
        let req = SignupRequest {
            method: SignupMethod::Google,
            ..Default::default()
        };
        assert!(req.check().is_ok());
    }

    #[test]
    fn new_patient_parses_age() {
        let req = NewPatientRequest {
            name: "Meera Iyer".into(),
            age: " 37 ".into(),
            gender: "Female".into(),
            phone: "+91 98765 43215".into(),
            email: "meera@email.com".into(),
            condition: "Migraine".into(),
        };
        assert_eq!(req.check().unwrap(), 37);
    }

    #[test]
    fn new_patient_missing_fields_rejected() {
        let err = NewPatientRequest::default().check().unwrap_err();
        assert_eq!(err.toast_message(), "Please fill in all required fields");
    }

    #[test]
    fn prescription_ignores_blank_medications() {
        let mut req = NewPrescriptionRequest {
            patient_name: "Rajesh Kumar".into(),
            patient_id: "P001".into(),
            diagnosis: "Type 2 Diabetes".into(),
            medications: vec!["  ".into(), String::new()],
        };
        let err = req.check().unwrap_err();
        assert_eq!(
            err.field_error("medications"),
            Some("Please add at least one medication")
        );
        req.medications = vec!["Metformin 500mg".into(), " ".into()];
        assert!(req.check().is_ok());
        assert_eq!(req.medications, vec!["Metformin 500mg".to_string()]);
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let patient = NewPatientRequest {
            name: "   ".into(),
            age: "40".into(),
            phone: "+91 98765 43215".into(),
            email: "x@email.com".into(),
            ..Default::default()
        };
        assert_eq!(
            patient.check().unwrap_err().field_error("name"),
            Some("Please fill in all required fields")
        );

        let vitals = VitalsUpdate {
            bp: "120/80".into(),
            temperature: " ".into(),
            pulse: "72".into(),
        };
        assert!(vitals.check().is_err());

        let login = LoginRequest {
            email: "  ".into(),
            password: "password".into(),
            role: Role::Doctor,
        };
        assert_eq!(login.check().unwrap_err().field_error("email"), Some("Email is required"));
    }

    #[test]
    fn prescription_fields_are_trimmed() {
        let mut req = NewPrescriptionRequest {
            patient_name: " Rajesh Kumar ".into(),
            patient_id: "P001".into(),
            diagnosis: "\t".into(),
            medications: vec!["Metformin 500mg".into()],
        };
        assert!(req.check().is_err());
        assert_eq!(req.patient_name, "Rajesh Kumar");
    }

    #[test]
    fn payment_details_required() {
        let err = PaymentDetails::default().check().unwrap_err();
        assert_eq!(err.field_error("cvv"), Some("CVV is required"));
    }
}
