pub mod error;
pub mod identity;
pub mod records;

pub use error::{Error, Result};
pub use identity::{Identified, Searchable};
pub use records::*;
