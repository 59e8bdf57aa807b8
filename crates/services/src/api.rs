//! Simulated portal backend.
//!
//! Every call validates its input up front, then waits for its configured
//! delay and succeeds. There is no network; the delay comes from the injected
//! [`Latency`].

use std::rc::Rc;

use chrono::{Local, NaiveDate, Utc};
use shared_types::*;

use crate::fixtures::demo_name_for;
use crate::latency::{Latency, TimerLatency};

/// Display name given to accounts created through the Google button.
pub const GOOGLE_DISPLAY_NAME: &str = "Google User";

#[derive(Clone)]
pub struct PortalApi {
    latency: Rc<dyn Latency>,
    delays: LatencyConfig,
}

impl PartialEq for PortalApi {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.latency, &other.latency) && self.delays == other.delays
    }
}

impl PortalApi {
    pub fn new(latency: Rc<dyn Latency>, delays: LatencyConfig) -> Self {
        Self { latency, delays }
    }

    /// Real timers with the given delays.
    pub fn with_timer(delays: LatencyConfig) -> Self {
        Self::new(Rc::new(TimerLatency), delays)
    }

    pub fn delays(&self) -> &LatencyConfig {
        &self.delays
    }

    /// Sign in with email and password. Any password is accepted; demo
    /// accounts get their listed display name.
    pub async fn login(&self, req: LoginRequest) -> Result<Session, AppError> {
        req.check()?;
        self.latency.wait(self.delays.login()).await;

        let email = req.email.trim().to_string();
        let name = demo_name_for(&email).unwrap_or_default();
        tracing::info!(role = %req.role, "login accepted");
        Ok(Session::new(req.role, Identity::email(email, name)))
    }

    /// Create an account. The method decides which identity is recorded.
    pub async fn signup(&self, req: SignupRequest) -> Result<Session, AppError> {
        req.check()?;
        self.latency.wait(self.delays.signup()).await;

        let name = req.name.trim().to_string();
        let identity = match req.method {
            SignupMethod::Email => Identity::email(req.email.trim(), name),
            SignupMethod::Phone => Identity::phone(req.phone.trim(), name),
            SignupMethod::Google => Identity::google(GOOGLE_DISPLAY_NAME),
        };
        tracing::info!(role = %req.role, method = req.method.label(), "signup accepted");
        Ok(Session::new(req.role, identity))
    }

    /// Skeleton delay shown before a page's data appears.
    pub async fn page_load(&self) {
        self.latency.wait(self.delays.page_load()).await;
    }

    /// Push one NFC card to the cloud and return it marked synced.
    pub async fn sync_card(&self, mut card: NfcCard) -> NfcCard {
        tracing::info!(card = %card.card_id, "card sync started");
        self.latency.wait(self.delays.card_sync()).await;
        card.mark_synced();
        card
    }

    /// Refresh the signed-in patient's own card from the cloud copy.
    pub async fn sync_health_card(&self, mut card: HealthCard) -> HealthCard {
        tracing::info!(card = %card.card_id, "health card sync started");
        self.latency.wait(self.delays.card_sync()).await;
        card.last_synced = "Just now".to_string();
        card
    }

    /// Read an NFC card held against the reader.
    pub async fn read_card(&self, card: &NfcCard) {
        tracing::info!(card = %card.card_id, "card read started");
        self.latency.wait(self.delays.card_sync()).await;
    }

    /// Write a prescription onto a card.
    pub async fn write_card(&self, card: &NfcCard, prescription: &str) {
        tracing::info!(card = %card.card_id, chars = prescription.len(), "card write started");
        self.latency.wait(self.delays.card_sync()).await;
    }

    /// Finish every pending transfer.
    pub async fn sync_all(&self, mut operations: Vec<SyncOperation>) -> Vec<SyncOperation> {
        tracing::info!(count = operations.len(), "bulk sync started");
        self.latency.wait(self.delays.bulk_sync()).await;
        for op in operations.iter_mut().filter(|op| op.status == SyncStatus::Pending) {
            op.status = SyncStatus::Completed;
            op.progress = 100;
        }
        operations
    }

    pub async fn download_all(&self) {
        tracing::info!("bulk download started");
        self.latency.wait(self.delays.download()).await;
    }

    /// Download a single named file or document.
    pub async fn download(&self, name: &str) {
        tracing::info!(file = %name, "download started");
        self.latency.wait(self.delays.download()).await;
    }

    /// Download a medical record, which takes longer than a plain file.
    pub async fn download_record(&self, record: &MedicalRecord) {
        tracing::info!(record = record.id, "record download started");
        self.latency.wait(self.delays.record_download()).await;
    }

    /// Charge `amount` rupees to the given card.
    pub async fn pay(&self, details: &PaymentDetails, amount: u64) -> Result<u64, AppError> {
        details.check()?;
        tracing::info!(amount, "payment started");
        self.latency.wait(self.delays.payment()).await;
        Ok(amount)
    }

    // Local record creation. These have no delay; the page prepends the
    // result to its list.

    pub fn add_patient(&self, req: &NewPatientRequest) -> Result<Patient, AppError> {
        let age = req.check()?;
        Ok(Patient {
            id: stamp_id("P"),
            name: req.name.trim().to_string(),
            age,
            gender: req.gender.clone(),
            phone: req.phone.trim().to_string(),
            email: req.email.trim().to_string(),
            condition: req.condition.trim().to_string(),
            last_visit: today(),
            status: PatientStatus::Active,
        })
    }

    pub fn add_prescription(&self, mut req: NewPrescriptionRequest) -> Result<Prescription, AppError> {
        req.check()?;
        Ok(Prescription {
            id: stamp_id("RX"),
            patient_name: req.patient_name,
            patient_id: req.patient_id,
            date: today(),
            medications: req.medications,
            diagnosis: req.diagnosis,
            status: PrescriptionStatus::Active,
        })
    }

    pub fn add_report(&self, req: NewReportRequest) -> Result<NurseReport, AppError> {
        req.check()?;
        Ok(NurseReport {
            id: stamp_id("NR"),
            patient_name: req.patient_name,
            patient_id: req.patient_id,
            report_type: req.report_type,
            date: today(),
            shift: req.shift,
            status: ReportStatus::PendingReview,
            notes: req.notes,
        })
    }

    pub fn update_vitals(&self, patient: &mut WardPatient, update: VitalsUpdate) -> Result<(), AppError> {
        update.check()?;
        tracing::info!(patient = %patient.id, "vitals updated");
        patient.vitals = Vitals {
            bp: update.bp,
            temperature: update.temperature,
            pulse: update.pulse,
        };
        Ok(())
    }
}

/// `{prefix}{unix millis}`, unique enough for local-only records.
pub fn stamp_id(prefix: &str) -> String {
    format!("{prefix}{}", Utc::now().timestamp_millis())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::latency::{InstantLatency, RecordingLatency};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn api() -> PortalApi {
        PortalApi::new(Rc::new(InstantLatency), LatencyConfig::default())
    }

    fn login(email: &str, role: Role) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: "password".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn demo_login_uses_listed_name() {
        let session = api().login(login("doctor@hospital.com", Role::Doctor)).await.unwrap();
        assert_eq!(session.role, Role::Doctor);
        assert_eq!(session.identity.display_name, "Dr. Sharma");
        assert_eq!(session.landing_path(), "/dashboard/doctor");
    }

    #[tokio::test]
    async fn role_comes_from_the_form_not_the_email() {
        let session = api().login(login("doctor@hospital.com", Role::Patient)).await.unwrap();
        assert_eq!(session.role, Role::Patient);
    }

    #[tokio::test]
    async fn unknown_email_label_falls_back_to_email() {
        let session = api().login(login("  asha@clinic.org ", Role::Nurse)).await.unwrap();
        assert_eq!(session.identity.label(), "asha@clinic.org");
    }

    #[tokio::test]
    async fn invalid_login_does_not_wait() {
        let latency = Rc::new(RecordingLatency::new());
        let api = PortalApi::new(latency.clone(), LatencyConfig::default());
        let err = api.login(login("", Role::Admin)).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(latency.requested().is_empty());
    }

    #[tokio::test]
    async fn login_waits_configured_delay() {
        let latency = Rc::new(RecordingLatency::new());
        let api = PortalApi::new(latency.clone(), LatencyConfig::default());
        api.login(login("admin@hospital.com", Role::Admin)).await.unwrap();
        assert_eq!(latency.requested(), vec![Duration::from_millis(500)]);
    }

    #[tokio::test]
    async fn google_signup_names_user() {
        let req = SignupRequest {
            method: SignupMethod::Google,
            role: Role::Doctor,
            ..Default::default()
        };
        let session = api().signup(req).await.unwrap();
        assert_eq!(session.identity.display_name, GOOGLE_DISPLAY_NAME);
        assert_eq!(session.identity.auth_method, AuthMethod::Google);
        assert_eq!(session.identity.contact, None);
    }

    #[tokio::test]
    async fn phone_signup_records_phone() {
        let req = SignupRequest {
            method: SignupMethod::Phone,
            name: "Ravi Menon".into(),
            phone: "9876543210".into(),
            role: Role::Patient,
            ..Default::default()
        };
        let session = api().signup(req).await.unwrap();
        assert_eq!(session.identity.contact, Some(Contact::Phone("9876543210".into())));
        assert_eq!(session.identity.display_name, "Ravi Menon");
    }

    #[tokio::test]
    async fn sync_card_marks_synced() {
        let card = fixtures::nfc_cards().remove(1);
        let synced = api().sync_card(card).await;
        assert_eq!(synced.status, NfcStatus::Synced);
        assert_eq!(synced.last_modified, "Just now");
    }

    #[tokio::test]
    async fn health_card_sync_stamps_time() {
        let card = api().sync_health_card(fixtures::patient_health_card()).await;
        assert_eq!(card.last_synced, "Just now");
        assert_eq!(card.holder, "John Doe");
    }

    #[tokio::test]
    async fn sync_all_completes_pending() {
        let ops = api().sync_all(fixtures::sync_operations()).await;
        assert!(ops.iter().all(|o| o.status == SyncStatus::Completed && o.progress == 100));
    }

    #[tokio::test]
    async fn operations_use_their_own_delays() {
        let latency = Rc::new(RecordingLatency::new());
        let api = PortalApi::new(latency.clone(), LatencyConfig::default());
        api.page_load().await;
        api.sync_all(Vec::new()).await;
        api.download_record(&fixtures::medical_records()[0]).await;
        api.pay(
            &PaymentDetails {
                card_name: "John Doe".into(),
                card_number: "4111 1111 1111 1111".into(),
                expiry: "12/27".into(),
                cvv: "123".into(),
            },
            fixtures::CHECKOUT_AMOUNT,
        )
        .await
        .unwrap();
        assert_eq!(
            latency.requested(),
            vec![
                Duration::from_millis(1500),
                Duration::from_millis(2000),
                Duration::from_millis(2000),
                Duration::from_millis(1500),
            ]
        );
    }

    #[test]
    fn add_patient_stamps_id_and_date() {
        let patient = api()
            .add_patient(&NewPatientRequest {
                name: "Meera Iyer".into(),
                age: "37".into(),
                gender: "Female".into(),
                phone: "+91 98765 43215".into(),
                email: "meera@email.com".into(),
                condition: "Migraine".into(),
            })
            .unwrap();
        assert!(patient.id.starts_with('P'));
        assert_eq!(patient.last_visit, today());
        assert_eq!(patient.status, PatientStatus::Active);
    }

    #[test]
    fn add_report_starts_pending_review() {
        let report = api()
            .add_report(NewReportRequest {
                patient_name: "Rajesh Kumar".into(),
                patient_id: "P001".into(),
                report_type: "Vital Signs Report".into(),
                shift: "Night".into(),
                notes: String::new(),
            })
            .unwrap();
        assert!(report.id.starts_with("NR"));
        assert_eq!(report.status, ReportStatus::PendingReview);
    }

    #[test]
    fn vitals_update_requires_all_fields() {
        let mut patient = fixtures::ward_patients().remove(0);
        let err = api()
            .update_vitals(&mut patient, VitalsUpdate { bp: "120/80".into(), ..Default::default() })
            .unwrap_err();
        assert!(err.toast_message().contains("BP, Temperature, Pulse"));
        assert_eq!(patient.vitals.bp, "130/85");
    }
}
