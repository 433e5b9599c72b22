use serde::Serialize;
use std::fmt;

use super::common::TabularExport;

#[derive(Debug, Serialize)]
pub struct NavItemViewModel {
    pub label: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub depth: usize,
}

#[derive(Debug, Serialize)]
pub struct NavViewModel {
    /// Full tree in display order, or the breadcrumb chain when a route was given
    pub items: Vec<NavItemViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

impl fmt::Display for NavViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ref route) = self.route {
            if self.items.is_empty() {
                return writeln!(f, "No navigation entry matches {}", route);
            }
            let labels: Vec<&str> = self.items.iter().map(|i| i.label.as_str()).collect();
            writeln!(f, "{}", labels.join(" › "))?;
            if let Some(last) = self.items.last() {
                writeln!(
                    f,
                    "{} [{}]",
                    last.path,
                    last.icon.as_deref().unwrap_or("-")
                )?;
            }
            return Ok(());
        }

        for item in &self.items {
            writeln!(
                f,
                "{}{:<16} {:<22} {}",
                "  ".repeat(item.depth),
                item.label,
                item.path,
                item.icon.as_deref().unwrap_or("")
            )?;
        }
        Ok(())
    }
}

impl TabularExport for NavViewModel {
    fn csv_table(&self) -> Option<(Vec<String>, Vec<Vec<String>>)> {
        let header = vec![
            "label".to_string(),
            "path".to_string(),
            "icon".to_string(),
            "depth".to_string(),
        ];
        let rows = self
            .items
            .iter()
            .map(|i| {
                vec![
                    i.label.clone(),
                    i.path.clone(),
                    i.icon.clone().unwrap_or_default(),
                    i.depth.to_string(),
                ]
            })
            .collect();
        Some((header, rows))
    }
}
