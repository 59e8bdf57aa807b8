pub mod config;
pub mod error;
pub mod filter;
pub mod guard;
pub mod models;
pub mod navigation;
pub mod requests;
pub mod role;
pub mod session;

pub use config::*;
pub use error::*;
pub use filter::*;
pub use guard::*;
pub use models::*;
pub use navigation::*;
pub use requests::*;
pub use role::*;
pub use session::*;
