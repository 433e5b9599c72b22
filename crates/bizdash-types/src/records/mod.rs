//! Record shapes mirrored from the dashboard's REST responses.

mod invoice;
mod staff;

pub use invoice::{Invoice, InvoiceStatus};
pub use staff::{StaffMember, StaffRole};

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::Result;

/// Decode a JSON array of records.
pub fn parse_records<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and decode a JSON array of records from disk.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)?;
    parse_records(&content)
}
