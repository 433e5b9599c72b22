use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Identified, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Owner,
    Manager,
    Staff,
    Contractor,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Owner => "owner",
            StaffRole::Manager => "manager",
            StaffRole::Staff => "staff",
            StaffRole::Contractor => "contractor",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staff directory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u64,
    pub name: String,
    pub role: StaffRole,
    pub email: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl StaffMember {
    /// Flip the active flag, returning the new value.
    pub fn toggle_active(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }
}

impl Identified for StaffMember {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

impl Searchable for StaffMember {
    fn haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.email, self.role.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> StaffMember {
        StaffMember {
            id: 1,
            name: "Grace Hopper".to_string(),
            role: StaffRole::Manager,
            email: "grace@example.com".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_search_matches_name_email_and_role() {
        let m = member();
        assert!(m.matches("hopper"));
        assert!(m.matches("EXAMPLE.COM"));
        assert!(m.matches("manager"));
        assert!(!m.matches("contractor"));
    }

    #[test]
    fn test_blank_search_matches_everything() {
        assert!(member().matches(""));
        assert!(member().matches("   "));
    }
}
