mod billing;
mod card;
mod checkout;
mod records;

pub use billing::PatientBilling;
pub use card::PatientCard;
pub use checkout::PatientCheckout;
pub use records::PatientRecords;
