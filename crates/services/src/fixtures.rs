//! Hard-coded records behind every view. Nothing here is persisted; pages copy
//! these into local signals and mutate the copies.

use chrono::NaiveDate;
use shared_types::*;

/// A login shortcut listed under the sign-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCredential {
    pub role: Role,
    pub email: &'static str,
    pub name: &'static str,
}

pub const DEMO_PASSWORD: &str = "password";

pub const DEMO_CREDENTIALS: &[DemoCredential] = &[
    DemoCredential { role: Role::Admin, email: "admin@hospital.com", name: "Admin" },
    DemoCredential { role: Role::Doctor, email: "doctor@hospital.com", name: "Dr. Sharma" },
    DemoCredential { role: Role::Nurse, email: "nurse@hospital.com", name: "Nurse Priya" },
    DemoCredential { role: Role::Patient, email: "patient@hospital.com", name: "Patient" },
];

/// Display name of the demo account with this email, if any.
pub fn demo_name_for(email: &str) -> Option<&'static str> {
    let email = email.trim();
    DEMO_CREDENTIALS
        .iter()
        .find(|c| c.email.eq_ignore_ascii_case(email))
        .map(|c| c.name)
}

/// Amount due on the checkout page, in rupees.
pub const CHECKOUT_AMOUNT: u64 = 22_500;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn s(v: &str) -> String {
    v.to_string()
}

// ── Overview ────────────────────────────────────────────

pub fn overview_cards(role: Role) -> Vec<OverviewCard> {
    let rows: [(&str, &str, &str); 4] = match role {
        Role::Admin => [
            ("Total Users", "2,847", "+15%"),
            ("Total Reports", "5,234", "+23%"),
            ("Pending Payments", "$45,230", "-5%"),
            ("System Health", "99.8%", "+0.2%"),
        ],
        Role::Doctor => [
            ("My Patients", "156", "+5%"),
            ("Prescriptions", "89", "+12%"),
            ("Consultations", "34", "+8%"),
            ("Avg Rating", "4.8/5", "+0.1"),
        ],
        Role::Nurse => [
            ("Assigned Patients", "42", "+3%"),
            ("Vitals Recorded", "234", "+18%"),
            ("Tasks Completed", "156", "+22%"),
            ("Efficiency", "94%", "+6%"),
        ],
        Role::Patient => [
            ("My Doctors", "3", "0%"),
            ("Medical Records", "12", "+2"),
            ("Outstanding Bills", "$450", "-$100"),
            ("Health Score", "85/100", "+5"),
        ],
    };
    rows.iter()
        .map(|(title, value, change)| OverviewCard::new(title, value, change))
        .collect()
}

pub fn recent_activities() -> Vec<Activity> {
    [
        ("Card Synced", "Raj Kumar", "2 mins ago"),
        ("Prescription Issued", "Dr. Priya Sharma", "15 mins ago"),
        ("Report Uploaded", "Lab #5", "1 hour ago"),
        ("Payment Received", "Amit Patel", "2 hours ago"),
        ("Card Read", "Nurse #12", "3 hours ago"),
    ]
    .into_iter()
    .map(|(action, subject, time)| Activity {
        action: s(action),
        subject: s(subject),
        time: s(time),
    })
    .collect()
}

pub fn weekly_activity() -> Vec<WeeklyActivity> {
    [
        ("Mon", 240, 120, 180),
        ("Tue", 320, 150, 220),
        ("Wed", 280, 140, 200),
        ("Thu", 390, 180, 280),
        ("Fri", 450, 210, 320),
        ("Sat", 380, 190, 290),
        ("Sun", 320, 160, 240),
    ]
    .into_iter()
    .map(|(d, visits, prescriptions, syncs)| WeeklyActivity {
        day: s(d),
        visits,
        prescriptions,
        syncs,
    })
    .collect()
}

// ── Clinical ────────────────────────────────────────────

pub fn doctor_patients() -> Vec<Patient> {
    [
        ("P001", "Rajesh Kumar", 45, "Male", "+91 98765 43210", "rajesh.kumar@email.com", day(2024, 1, 15), "Diabetes", PatientStatus::Active),
        ("P002", "Priya Sharma", 32, "Female", "+91 98765 43211", "priya.sharma@email.com", day(2024, 1, 18), "Hypertension", PatientStatus::Active),
        ("P003", "Amit Patel", 58, "Male", "+91 98765 43212", "amit.patel@email.com", day(2024, 1, 10), "Heart Disease", PatientStatus::FollowUp),
        ("P004", "Sneha Reddy", 28, "Female", "+91 98765 43213", "sneha.reddy@email.com", day(2024, 1, 20), "Asthma", PatientStatus::Active),
        ("P005", "Vikram Singh", 41, "Male", "+91 98765 43214", "vikram.singh@email.com", day(2024, 1, 12), "Arthritis", PatientStatus::Recovered),
    ]
    .into_iter()
    .map(|(id, name, age, gender, phone, email, last_visit, condition, status)| Patient {
        id: s(id),
        name: s(name),
        age,
        gender: s(gender),
        phone: s(phone),
        email: s(email),
        condition: s(condition),
        last_visit,
        status,
    })
    .collect()
}

pub fn ward_patients() -> Vec<WardPatient> {
    [
        ("P001", "Rajesh Kumar", "101", "A", "130/85", "98.6°F", "78 bpm", WardStatus::Stable),
        ("P002", "Priya Sharma", "102", "B", "140/90", "99.1°F", "82 bpm", WardStatus::Monitoring),
        ("P003", "Amit Patel", "103", "A", "125/80", "98.4°F", "75 bpm", WardStatus::Stable),
        ("P004", "Sneha Reddy", "104", "C", "120/75", "98.2°F", "72 bpm", WardStatus::Stable),
    ]
    .into_iter()
    .map(|(id, name, room, bed, bp, temperature, pulse, status)| WardPatient {
        id: s(id),
        name: s(name),
        room: s(room),
        bed: s(bed),
        vitals: Vitals {
            bp: s(bp),
            temperature: s(temperature),
            pulse: s(pulse),
        },
        status,
    })
    .collect()
}

pub fn prescriptions() -> Vec<Prescription> {
    [
        ("RX001", "Rajesh Kumar", "P001", day(2024, 1, 15), ["Metformin 500mg", "Glimepiride 2mg"], "Type 2 Diabetes", PrescriptionStatus::Active),
        ("RX002", "Priya Sharma", "P002", day(2024, 1, 18), ["Amlodipine 5mg", "Losartan 50mg"], "Hypertension", PrescriptionStatus::Active),
        ("RX003", "Amit Patel", "P003", day(2024, 1, 10), ["Atorvastatin 20mg", "Aspirin 75mg"], "Coronary Artery Disease", PrescriptionStatus::Completed),
        ("RX004", "Sneha Reddy", "P004", day(2024, 1, 20), ["Salbutamol Inhaler", "Montelukast 10mg"], "Asthma", PrescriptionStatus::Active),
    ]
    .into_iter()
    .map(|(id, patient_name, patient_id, date, meds, diagnosis, status)| Prescription {
        id: s(id),
        patient_name: s(patient_name),
        patient_id: s(patient_id),
        date,
        medications: meds.iter().map(|m| s(m)).collect(),
        diagnosis: s(diagnosis),
        status,
    })
    .collect()
}

pub fn nurse_reports() -> Vec<NurseReport> {
    [
        ("NR001", "Rajesh Kumar", "P001", "Vital Signs Report", day(2024, 1, 15), "Morning", ReportStatus::Completed),
        ("NR002", "Priya Sharma", "P002", "Medication Administration", day(2024, 1, 18), "Evening", ReportStatus::Completed),
        ("NR003", "Amit Patel", "P003", "Patient Assessment", day(2024, 1, 10), "Night", ReportStatus::Completed),
        ("NR004", "Sneha Reddy", "P004", "Wound Care Report", day(2024, 1, 20), "Morning", ReportStatus::PendingReview),
    ]
    .into_iter()
    .map(|(id, patient_name, patient_id, report_type, date, shift, status)| NurseReport {
        id: s(id),
        patient_name: s(patient_name),
        patient_id: s(patient_id),
        report_type: s(report_type),
        date,
        shift: s(shift),
        status,
        notes: String::new(),
    })
    .collect()
}

pub fn medical_records() -> Vec<MedicalRecord> {
    [
        (1, RecordKind::Prescription, "Aspirin 500mg", "Dr. Priya Sharma", "2 days ago", "Take twice daily for 7 days"),
        (2, RecordKind::Report, "Blood Test Results", "Lab Center", "1 week ago", "All values within normal range"),
        (3, RecordKind::Appointment, "Follow-up Checkup", "Dr. Raj Verma", "Next Monday", "General health examination"),
        (4, RecordKind::Prescription, "Vitamin D Supplement", "Dr. Priya Sharma", "2 weeks ago", "Take once daily"),
    ]
    .into_iter()
    .map(|(id, kind, title, doctor, date, details)| MedicalRecord {
        id,
        kind,
        title: s(title),
        doctor: s(doctor),
        date: s(date),
        details: s(details),
    })
    .collect()
}

// ── Staff ───────────────────────────────────────────────

pub fn staff_users() -> Vec<StaffUser> {
    [
        ("U001", "Dr. Arun Mehta", "arun.mehta@hospital.com", Role::Doctor, "Cardiology"),
        ("U002", "Dr. Kavita Desai", "kavita.desai@hospital.com", Role::Doctor, "Pediatrics"),
        ("U003", "Nurse Sunita Rao", "sunita.rao@hospital.com", Role::Nurse, "Emergency"),
        ("U004", "Nurse Ramesh Kumar", "ramesh.kumar@hospital.com", Role::Nurse, "ICU"),
        ("U005", "Admin Priya Singh", "priya.singh@hospital.com", Role::Admin, "Administration"),
    ]
    .into_iter()
    .map(|(id, name, email, role, department)| StaffUser {
        id: s(id),
        name: s(name),
        email: s(email),
        role,
        department: s(department),
        status: StaffStatus::Active,
    })
    .collect()
}

// ── NFC and sync ────────────────────────────────────────

pub fn nfc_cards() -> Vec<NfcCard> {
    [
        ("NFC-001", "P-234", "Raj Kumar", NfcStatus::Synced, "2 hours ago", "Central Hospital", 2.4),
        ("NFC-002", "P-567", "Priya Sharma", NfcStatus::NotSynced, "1 day ago", "City Medical Center", 1.8),
        ("NFC-003", "P-890", "Amit Patel", NfcStatus::Synced, "30 minutes ago", "Central Hospital", 3.1),
    ]
    .into_iter()
    .map(|(card_id, patient_id, patient_name, status, last_modified, hospital, data_size_mb)| NfcCard {
        card_id: s(card_id),
        patient_id: s(patient_id),
        patient_name: s(patient_name),
        status,
        last_modified: s(last_modified),
        hospital: s(hospital),
        data_size_mb,
    })
    .collect()
}

pub fn patient_health_card() -> HealthCard {
    HealthCard {
        holder: s("John Doe"),
        card_id: s("NFC-001-2024"),
        patient_id: s("P-234-5678"),
        blood_type: s("O+"),
        allergies: s("Penicillin"),
        emergency_contact: s("Jane Doe"),
        phone: s("555-0123"),
        last_synced: s("2 hours ago"),
        last_hospital: s("Central Hospital"),
    }
}

/// Events listed beside the patient's card.
pub fn card_activity() -> Vec<Activity> {
    [
        ("Card read", "1 hour ago"),
        ("Data updated", "3 hours ago"),
        ("Prescription added", "1 day ago"),
    ]
    .into_iter()
    .map(|(action, time)| Activity {
        action: s(action),
        subject: String::new(),
        time: s(time),
    })
    .collect()
}

pub fn sync_operations() -> Vec<SyncOperation> {
    [
        (1, SyncDirection::Upload, "patient_report_001.pdf", SyncStatus::Completed, 100, "2 hours ago", 2.4),
        (2, SyncDirection::Download, "prescription_batch.zip", SyncStatus::Completed, 100, "1 hour ago", 5.1),
        (3, SyncDirection::Upload, "lab_results_002.pdf", SyncStatus::Pending, 65, "5 minutes ago", 1.8),
        (4, SyncDirection::Download, "patient_history.json", SyncStatus::Completed, 100, "30 minutes ago", 3.2),
    ]
    .into_iter()
    .map(|(id, direction, file_name, status, progress, timestamp, size_mb)| SyncOperation {
        id,
        direction,
        file_name: s(file_name),
        status,
        progress,
        timestamp: s(timestamp),
        size_mb,
    })
    .collect()
}

pub fn storage_files() -> Vec<StorageFile> {
    [
        (1, "patient_report_001.pdf", FileKind::Pdf, 2.4, "Dr. Smith", "2 hours ago", "Central Hospital"),
        (2, "xray_scan_patient_234.jpg", FileKind::Image, 5.1, "Nurse Johnson", "1 hour ago", "City Medical Center"),
        (3, "lab_results_batch.pdf", FileKind::Pdf, 1.8, "Lab Technician", "30 min ago", "Central Hospital"),
        (4, "ct_scan_patient_567.png", FileKind::Image, 8.2, "Dr. Wilson", "15 min ago", "City Medical Center"),
    ]
    .into_iter()
    .map(|(id, name, kind, size_mb, uploaded_by, uploaded_at, hospital)| StorageFile {
        id,
        name: s(name),
        kind,
        size_mb,
        uploaded_by: s(uploaded_by),
        uploaded_at: s(uploaded_at),
        hospital: s(hospital),
    })
    .collect()
}

// ── Billing ─────────────────────────────────────────────

pub fn payments() -> Vec<Payment> {
    [
        ("INV-2024-001", "John Doe", 7_500, PaymentStatus::Completed, day(2024, 10, 15), "Credit Card"),
        ("INV-2024-002", "Jane Smith", 22_500, PaymentStatus::Pending, day(2024, 10, 20), "Bank Transfer"),
        ("INV-2024-003", "Robert Johnson", 10_000, PaymentStatus::Completed, day(2024, 10, 18), "Credit Card"),
        ("INV-2024-004", "Sarah Williams", 16_000, PaymentStatus::Failed, day(2024, 10, 22), "Credit Card"),
    ]
    .into_iter()
    .map(|(id, patient_name, amount, status, date, method)| Payment {
        id: s(id),
        patient_name: s(patient_name),
        amount,
        status,
        date,
        method: s(method),
    })
    .collect()
}

pub fn invoices() -> Vec<Invoice> {
    [
        ("INV-2024-001", day(2024, 10, 15), 7_500, InvoiceStatus::Paid, "General Checkup"),
        ("INV-2024-002", day(2024, 10, 20), 22_500, InvoiceStatus::Pending, "Lab Tests & X-Ray"),
        ("INV-2024-003", day(2024, 10, 25), 10_000, InvoiceStatus::Overdue, "Specialist Consultation"),
    ]
    .into_iter()
    .map(|(id, date, amount, status, description)| Invoice {
        id: s(id),
        date,
        amount,
        status,
        description: s(description),
    })
    .collect()
}

// ── Analytics ───────────────────────────────────────────

pub fn visit_stats() -> Vec<VisitStat> {
    [
        ("Jan", 400, 240, 180),
        ("Feb", 520, 320, 220),
        ("Mar", 480, 280, 200),
        ("Apr", 620, 390, 280),
        ("May", 750, 450, 320),
        ("Jun", 890, 520, 380),
    ]
    .into_iter()
    .map(|(month, visits, patients, syncs)| VisitStat {
        month: s(month),
        visits,
        patients,
        syncs,
    })
    .collect()
}

pub fn department_stats() -> Vec<DepartmentStat> {
    [
        ("Cardiology", 280),
        ("Neurology", 220),
        ("Orthopedics", 180),
        ("Pediatrics", 150),
        ("Others", 170),
    ]
    .into_iter()
    .map(|(name, patients)| DepartmentStat {
        name: s(name),
        patients,
    })
    .collect()
}

pub fn payment_stats() -> Vec<PaymentStat> {
    [
        ("Jan", 12_000, 3_000, 1_000),
        ("Feb", 15_000, 4_000, 800),
        ("Mar", 14_000, 3_500, 1_200),
        ("Apr", 18_000, 5_000, 900),
        ("May", 21_000, 6_000, 1_100),
        ("Jun", 24_000, 7_000, 1_300),
    ]
    .into_iter()
    .map(|(month, completed, pending, failed)| PaymentStat {
        month: s(month),
        completed,
        pending,
        failed,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn demo_names_match_by_email() {
        assert_eq!(demo_name_for("doctor@hospital.com"), Some("Dr. Sharma"));
        assert_eq!(demo_name_for(" NURSE@hospital.com "), Some("Nurse Priya"));
        assert_eq!(demo_name_for("someone@else.com"), None);
    }

    #[test]
    fn every_role_has_four_overview_cards() {
        for role in ALL_ROLES {
            assert_eq!(overview_cards(*role).len(), 4, "{role}");
        }
        assert_eq!(overview_cards(Role::Nurse)[0].title, "Assigned Patients");
    }

    #[test]
    fn patient_filter_matches_condition() {
        let hits = filter_items(&doctor_patients(), "asth");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "P004");
    }

    #[test]
    fn nfc_search_uses_card_id() {
        assert_eq!(filter_items(&nfc_cards(), "nfc-002")[0].patient_name, "Priya Sharma");
    }

    #[test]
    fn payments_summary_from_fixtures() {
        let summary = PaymentSummary::from_payments(&payments());
        assert_eq!(summary.revenue, 17_500);
        assert_eq!(summary.pending, 22_500);
        assert_eq!(summary.failed_count, 1);
    }

    #[test]
    fn invoices_outstanding() {
        assert_eq!(outstanding_total(&invoices()), 32_500);
    }

    #[test]
    fn fixture_dates_are_real() {
        assert!(doctor_patients().iter().all(|p| p.last_visit.to_string().starts_with("2024-01")));
    }
}
