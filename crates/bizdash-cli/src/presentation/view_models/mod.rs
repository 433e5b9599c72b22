pub mod common;
pub mod list;
pub mod nav;
pub mod result;
pub mod session;
pub mod tui;

pub use common::{Guidance, StatusBadge, TabularExport};
pub use list::ListViewModel;
pub use nav::{NavItemViewModel, NavViewModel};
pub use result::CommandResultViewModel;
pub use session::SessionViewModel;
pub use tui::{BrowseScreenViewModel, ConfirmViewModel, StatusBarViewModel};
