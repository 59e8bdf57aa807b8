mod patients;
mod prescriptions;

pub use patients::DoctorPatients;
pub use prescriptions::DoctorPrescriptions;
