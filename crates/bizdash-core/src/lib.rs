//! bizdash-core: the list-view contract behind every bizdash data page.
//!
//! # Overview
//!
//! Every list page of the dashboard (staff, invoices, compliance items, ...)
//! follows the same shape:
//!
//! ```text
//! [ container ] --QueryState--> [ DataSource ] --QueryResult--> [ render_table ] --> TableOutput
//!                                                                     |
//!                                                     RowActions per row / presenter state
//! ```
//!
//! - [`QueryState`]: page, size, search text, loading / has-more flags.
//! - [`present`]: picks `Loading`, `Error` or `Empty` from three flags.
//! - [`render_table`]: renders rows through [`ColumnDescriptor`]s, or hands
//!   over to the presenter.
//! - [`RowActions`] and [`DeleteConfirmation`]: edit/delete buttons and the
//!   confirm-then-delete flow.
//!
//! Alongside the list contract live the navigation link table ([`NavTable`])
//! and the signed-in session context ([`SessionContext`]).
//!
//! # Quickstart
//!
//! ```
//! use bizdash_core::{ColumnDescriptor, MemorySource, QueryState, TableProps, load, render_table};
//! use bizdash_types::{StaffMember, StaffRole};
//!
//! let source = MemorySource::new(vec![StaffMember {
//!     id: 1,
//!     name: "Ada".to_string(),
//!     role: StaffRole::Owner,
//!     email: "ada@example.com".to_string(),
//!     active: true,
//! }]);
//!
//! let mut query = QueryState::new(20);
//! query.set_search("ada");
//! let result = load(&source, &mut query);
//!
//! let columns = vec![ColumnDescriptor::field("name").label("Name")];
//! let output = render_table(&TableProps::new(&result.data, &columns).flags(result.flags));
//! assert_eq!(output.rows()[0].cells, vec!["Ada".to_string()]);
//! ```

pub mod actions;
pub mod confirm;
pub mod error;
pub mod nav;
pub mod presenter;
pub mod query;
pub mod session;
pub mod source;
pub mod table;

pub use actions::{ActionButton, ActionKind, RowActions};
pub use confirm::{ConfirmState, DeleteConfirmation, run_delete};
pub use error::{Error, Result};
pub use nav::{NavEntry, NavLink, NavTable};
pub use presenter::{FetchFlags, RenderState, StatusLevel, present, present_flags};
pub use query::{DEFAULT_PAGE_SIZE, QueryParams, QueryState};
pub use session::{AuthChange, AuthEvents, LocalAuth, Session, SessionContext};
pub use source::{DataSource, MemorySource, Page, QueryResult, load};
pub use table::{
    Accessor, ColumnDescriptor, RenderedRow, RenderedTable, TableOutput, TableProps, render_table,
};

pub use bizdash_types as types;
