//! # Presentation Layer
//!
//! Output logic for the CLI, using the same MVVM split as the rest of the
//! tooling:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!  (owns state)     (converter)       (contract)     (console/TUI)   (text/JSON/CSV/screen)
//! ```
//!
//! ### `view_models/`
//! Pure data containers implementing `Serialize` (and `Display` for plain
//! text). No calculation logic.
//!
//! ### `presenters/`
//! Functions turning bizdash-core outputs (`TableOutput`, `NavTable`,
//! `Session`, ...) into view models.
//!
//! ### `renderers/`
//! `console.rs` paints a `CommandResultViewModel` as text, JSON or CSV.
//! `tui.rs` owns the interactive browser's event loop.
//!
//! ### `views/tui/`
//! Ratatui widgets over view models. Layout and colour only.
//!
//! ### `formatters/`
//! Small string helpers (`truncate`, `format_cents`).

pub mod formatters;
pub mod presenters;
pub mod records;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use records::ListRecord;
pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge};
