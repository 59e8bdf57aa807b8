use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::Searchable;
use crate::role::Role;

// ── Clinical ────────────────────────────────────────────

/// Treatment status on the doctor's patient list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PatientStatus {
    #[default]
    Active,
    FollowUp,
    Recovered,
}

impl PatientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PatientStatus::Active => "Active",
            PatientStatus::FollowUp => "Follow-up",
            PatientStatus::Recovered => "Recovered",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub condition: String,
    pub last_visit: NaiveDate,
    pub status: PatientStatus,
}

impl Searchable for Patient {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str(), self.condition.as_str()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Vitals {
    pub bp: String,
    pub temperature: String,
    pub pulse: String,
}

/// Observation level for a ward patient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WardStatus {
    #[default]
    Stable,
    Monitoring,
    Critical,
}

impl WardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WardStatus::Stable => "Stable",
            WardStatus::Monitoring => "Monitoring",
            WardStatus::Critical => "Critical",
        }
    }
}

/// Patient as seen from the nurse's ward view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WardPatient {
    pub id: String,
    pub name: String,
    pub room: String,
    pub bed: String,
    pub vitals: Vitals,
    pub status: WardStatus,
}

impl Searchable for WardPatient {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str(), self.room.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PrescriptionStatus {
    #[default]
    Active,
    Completed,
}

impl PrescriptionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PrescriptionStatus::Active => "Active",
            PrescriptionStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    pub id: String,
    pub patient_name: String,
    pub patient_id: String,
    pub date: NaiveDate,
    pub medications: Vec<String>,
    pub diagnosis: String,
    pub status: PrescriptionStatus,
}

impl Searchable for Prescription {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.patient_name.as_str(), self.id.as_str(), self.diagnosis.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReportStatus {
    Completed,
    #[default]
    PendingReview,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "Completed",
            ReportStatus::PendingReview => "Pending Review",
        }
    }
}

/// Shift report filed by a nurse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NurseReport {
    pub id: String,
    pub patient_name: String,
    pub patient_id: String,
    pub report_type: String,
    pub date: NaiveDate,
    pub shift: String,
    pub status: ReportStatus,
    #[serde(default)]
    pub notes: String,
}

impl Searchable for NurseReport {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.patient_name.as_str(), self.id.as_str(), self.report_type.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordKind {
    Prescription,
    Report,
    Appointment,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Prescription => "Prescription",
            RecordKind::Report => "Report",
            RecordKind::Appointment => "Appointment",
        }
    }
}

/// Entry in a patient's own medical record list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalRecord {
    pub id: u32,
    pub kind: RecordKind,
    pub title: String,
    pub doctor: String,
    pub date: String,
    pub details: String,
}

// ── Staff ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum StaffStatus {
    #[default]
    Active,
    Inactive,
}

impl StaffStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StaffStatus::Active => "Active",
            StaffStatus::Inactive => "Inactive",
        }
    }
}

/// Hospital account shown on the admin user list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub status: StaffStatus,
}

impl Searchable for StaffUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.display_name()]
    }
}

// ── NFC cards and sync ──────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NfcStatus {
    Synced,
    NotSynced,
    Error,
}

impl NfcStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NfcStatus::Synced => "Synced",
            NfcStatus::NotSynced => "Not Synced",
            NfcStatus::Error => "Error",
        }
    }
}

/// A patient's NFC health card and the state of its cloud copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NfcCard {
    pub card_id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub status: NfcStatus,
    pub last_modified: String,
    pub hospital: String,
    pub data_size_mb: f64,
}

impl NfcCard {
    pub fn mark_synced(&mut self) {
        self.status = NfcStatus::Synced;
        self.last_modified = "Just now".to_string();
    }
}

impl Searchable for NfcCard {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.patient_name.as_str(), self.card_id.as_str()]
    }
}

/// The signed-in patient's own card, as printed and as last synced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthCard {
    pub holder: String,
    pub card_id: String,
    pub patient_id: String,
    pub blood_type: String,
    pub allergies: String,
    pub emergency_contact: String,
    pub phone: String,
    pub last_synced: String,
    pub last_hospital: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyncDirection {
    Upload,
    Download,
}

impl SyncDirection {
    pub fn label(&self) -> &'static str {
        match self {
            SyncDirection::Upload => "Upload",
            SyncDirection::Download => "Download",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Completed,
    Pending,
    Failed,
}

impl SyncStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SyncStatus::Completed => "Completed",
            SyncStatus::Pending => "Pending",
            SyncStatus::Failed => "Failed",
        }
    }
}

/// One transfer in the cloud sync history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncOperation {
    pub id: u32,
    pub direction: SyncDirection,
    pub file_name: String,
    pub status: SyncStatus,
    /// 0..=100
    pub progress: u8,
    pub timestamp: String,
    pub size_mb: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Image,
    Document,
}

impl FileKind {
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Image => "Image",
            FileKind::Document => "Document",
        }
    }
}

/// File held in cloud storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageFile {
    pub id: u32,
    pub name: String,
    pub kind: FileKind,
    pub size_mb: f64,
    pub uploaded_by: String,
    pub uploaded_at: String,
    pub hospital: String,
}

impl Searchable for StorageFile {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

/// Total size of a set of files, in megabytes.
pub fn total_size_mb(files: &[StorageFile]) -> f64 {
    files.iter().map(|f| f.size_mb).sum()
}

// ── Billing ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
        }
    }
}

/// Incoming payment on the admin payments page. Amounts are whole rupees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: String,
    pub patient_name: String,
    pub amount: u64,
    pub status: PaymentStatus,
    pub date: NaiveDate,
    pub method: String,
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.patient_name.as_str()]
    }
}

/// Totals shown above the payments table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaymentSummary {
    pub revenue: u64,
    pub pending: u64,
    pub completed_count: usize,
    pub pending_count: usize,
    pub failed_count: usize,
}

impl PaymentSummary {
    pub fn from_payments(payments: &[Payment]) -> Self {
        payments.iter().fold(Self::default(), |mut acc, p| {
            match p.status {
                PaymentStatus::Completed => {
                    acc.revenue += p.amount;
                    acc.completed_count += 1;
                }
                PaymentStatus::Pending => {
                    acc.pending += p.amount;
                    acc.pending_count += 1;
                }
                PaymentStatus::Failed => acc.failed_count += 1,
            }
            acc
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        }
    }

    pub fn is_outstanding(&self) -> bool {
        !matches!(self, InvoiceStatus::Paid)
    }
}

/// Bill addressed to the signed-in patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub date: NaiveDate,
    pub amount: u64,
    pub status: InvoiceStatus,
    pub description: String,
}

/// Sum of unpaid invoices.
pub fn outstanding_total(invoices: &[Invoice]) -> u64 {
    invoices
        .iter()
        .filter(|i| i.status.is_outstanding())
        .map(|i| i.amount)
        .sum()
}

// ── Dashboard ───────────────────────────────────────────

/// Summary tile on a role's overview page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewCard {
    pub title: String,
    pub value: String,
    /// Signed change since last period, e.g. `+15%` or `-$100`.
    pub change: String,
}

impl OverviewCard {
    pub fn new(title: &str, value: &str, change: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            change: change.to_string(),
        }
    }

    /// Negative changes render in the destructive colour.
    pub fn is_decrease(&self) -> bool {
        self.change.starts_with('-')
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub action: String,
    pub subject: String,
    pub time: String,
}

/// One day of the overview page's weekly activity summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyActivity {
    pub day: String,
    pub visits: u32,
    pub prescriptions: u32,
    pub syncs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisitStat {
    pub month: String,
    pub visits: u32,
    pub patients: u32,
    pub syncs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentStat {
    pub name: String,
    pub patients: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentStat {
    pub month: String,
    pub completed: u64,
    pub pending: u64,
    pub failed: u64,
}

/// Window selector on the analytics page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TimeRange {
    OneMonth,
    ThreeMonths,
    #[default]
    SixMonths,
    OneYear,
}

pub const ALL_TIME_RANGES: &[TimeRange] = &[
    TimeRange::OneMonth,
    TimeRange::ThreeMonths,
    TimeRange::SixMonths,
    TimeRange::OneYear,
];

impl TimeRange {
    pub fn key(&self) -> &'static str {
        match self {
            TimeRange::OneMonth => "1m",
            TimeRange::ThreeMonths => "3m",
            TimeRange::SixMonths => "6m",
            TimeRange::OneYear => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::OneMonth => "Last Month",
            TimeRange::ThreeMonths => "Last 3 Months",
            TimeRange::SixMonths => "Last 6 Months",
            TimeRange::OneYear => "Last Year",
        }
    }

    pub fn from_key(key: &str) -> Self {
        ALL_TIME_RANGES
            .iter()
            .copied()
            .find(|r| r.key() == key)
            .unwrap_or_default()
    }

    pub fn months(&self) -> usize {
        match self {
            TimeRange::OneMonth => 1,
            TimeRange::ThreeMonths => 3,
            TimeRange::SixMonths => 6,
            TimeRange::OneYear => 12,
        }
    }

    /// The most recent `months()` entries of a monthly series.
    pub fn window<'a, T>(&self, series: &'a [T]) -> &'a [T] {
        let start = series.len().saturating_sub(self.months());
        &series[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_items;

    fn payment(id: &str, amount: u64, status: PaymentStatus) -> Payment {
        Payment {
            id: id.to_string(),
            patient_name: "John Doe".to_string(),
            amount,
            status,
            date: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            method: "Credit Card".to_string(),
        }
    }

    #[test]
    fn payment_summary_splits_by_status() {
        let payments = vec![
            payment("A", 7500, PaymentStatus::Completed),
            payment("B", 22500, PaymentStatus::Pending),
            payment("C", 10000, PaymentStatus::Completed),
            payment("D", 16000, PaymentStatus::Failed),
        ];
        let summary = PaymentSummary::from_payments(&payments);
        assert_eq!(summary.revenue, 17500);
        assert_eq!(summary.pending, 22500);
        assert_eq!(summary.completed_count, 2);
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.failed_count, 1);
    }

    #[test]
    fn nfc_card_sync_updates_status() {
        let mut card = NfcCard {
            card_id: "NFC-002".into(),
            patient_id: "P-567".into(),
            patient_name: "Priya Sharma".into(),
            status: NfcStatus::NotSynced,
            last_modified: "1 day ago".into(),
            hospital: "City Medical Center".into(),
            data_size_mb: 1.8,
        };
        card.mark_synced();
        assert_eq!(card.status, NfcStatus::Synced);
        assert_eq!(card.last_modified, "Just now");
    }

    #[test]
    fn staff_search_includes_role_name() {
        let users = vec![StaffUser {
            id: "U003".into(),
            name: "Nurse Sunita Rao".into(),
            email: "sunita.rao@hospital.com".into(),
            role: Role::Nurse,
            department: "Emergency".into(),
            status: StaffStatus::Active,
        }];
        assert_eq!(filter_items(&users, "nurse").len(), 1);
        assert_eq!(filter_items(&users, "hospital.com").len(), 1);
        assert!(filter_items(&users, "doctor").is_empty());
    }

    #[test]
    fn time_range_window_takes_latest_months() {
        let series = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(TimeRange::OneMonth.window(&series), &[6]);
        assert_eq!(TimeRange::ThreeMonths.window(&series), &[4, 5, 6]);
        assert_eq!(TimeRange::OneYear.window(&series), &series[..]);
    }

    #[test]
    fn time_range_key_roundtrip() {
        for range in ALL_TIME_RANGES {
            assert_eq!(TimeRange::from_key(range.key()), *range);
        }
        assert_eq!(TimeRange::from_key("bogus"), TimeRange::SixMonths);
    }

    #[test]
    fn overview_card_decrease() {
        assert!(OverviewCard::new("Pending Payments", "$45,230", "-5%").is_decrease());
        assert!(!OverviewCard::new("My Doctors", "3", "0%").is_decrease());
    }

    #[test]
    fn outstanding_total_skips_paid() {
        let day = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
        let invoices = vec![
            Invoice { id: "1".into(), date: day, amount: 7500, status: InvoiceStatus::Paid, description: String::new() },
            Invoice { id: "2".into(), date: day, amount: 22500, status: InvoiceStatus::Pending, description: String::new() },
            Invoice { id: "3".into(), date: day, amount: 10000, status: InvoiceStatus::Overdue, description: String::new() },
        ];
        assert_eq!(outstanding_total(&invoices), 32500);
    }
}
