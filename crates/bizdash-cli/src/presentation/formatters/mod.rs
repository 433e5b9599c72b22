pub mod money;
pub mod text;

pub use money::format_cents;
pub use text::{pad_right, truncate};
