mod analytics;
mod files;
mod payments;
mod users;

pub use analytics::AdminAnalytics;
pub use files::AdminFiles;
pub use payments::AdminPayments;
pub use users::AdminUsers;
