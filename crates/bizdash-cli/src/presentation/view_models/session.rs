use serde::Serialize;
use std::fmt;

use super::common::TabularExport;

#[derive(Debug, Serialize)]
pub struct SessionViewModel {
    pub signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl fmt::Display for SessionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.user {
            Some(user) if self.roles.is_empty() => writeln!(f, "Signed in as {}", user),
            Some(user) => writeln!(f, "Signed in as {} ({})", user, self.roles.join(", ")),
            None => writeln!(f, "Not signed in"),
        }
    }
}

impl TabularExport for SessionViewModel {}
