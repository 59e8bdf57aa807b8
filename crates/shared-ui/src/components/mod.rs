// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod page_header;
pub mod progress;
pub mod search_bar;
pub mod skeleton;
pub mod stat_card;
pub mod tab_bar;

// Overlays and feedback
pub mod modal;
pub mod toast;

// Layout; depends on button
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use input::*;
pub use modal::*;
pub use page_header::*;
pub use progress::*;
pub use search_bar::*;
pub use sidebar::*;
pub use skeleton::*;
pub use stat_card::*;
pub use tab_bar::*;
pub use toast::*;
