pub mod browse;
pub mod list;
pub mod nav;
pub mod session;

pub use browse::{present_browse_screen, present_confirm, present_status_bar};
pub use list::{present_list, present_list_result};
pub use nav::present_nav;
pub use session::present_session;
