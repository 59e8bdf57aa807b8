mod patients;
mod reports;

pub use patients::NursePatients;
pub use reports::NurseReports;
