//! Navigation link table.
//!
//! The dashboard's sidebar is a nested link tree. Route → icon/label lookups
//! used to walk that tree on every render; here it is flattened once into an
//! arena with a path index and answered from there.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{Error, Result};

/// Nested link as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavLink>,
}

impl NavLink {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn child(mut self, link: NavLink) -> Self {
        self.children.push(link);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: String,
    pub path: String,
    /// Own icon, or the nearest ancestor's
    pub icon: Option<String>,
    pub depth: usize,
    #[serde(skip)]
    pub parent: Option<usize>,
    #[serde(skip)]
    children: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct NavTable {
    entries: Vec<NavEntry>,
    by_path: HashMap<String, usize>,
    roots: Vec<usize>,
}

impl NavTable {
    /// Flatten `links` in pre-order. Duplicate paths are rejected.
    pub fn build(links: &[NavLink]) -> Result<Self> {
        let mut table = NavTable::default();
        for link in links {
            let idx = table.insert(link, None, 0)?;
            table.roots.push(idx);
        }
        tracing::debug!(entries = table.entries.len(), "navigation table built");
        Ok(table)
    }

    fn insert(&mut self, link: &NavLink, parent: Option<usize>, depth: usize) -> Result<usize> {
        let path = normalize(&link.path);
        if self.by_path.contains_key(&path) {
            return Err(Error::DuplicateNavPath(path));
        }

        let inherited = parent.and_then(|p| self.entries[p].icon.clone());
        let idx = self.entries.len();
        self.entries.push(NavEntry {
            label: link.label.clone(),
            path: path.clone(),
            icon: link.icon.clone().or(inherited),
            depth,
            parent,
            children: Vec::new(),
        });
        self.by_path.insert(path, idx);

        for child in &link.children {
            let child_idx = self.insert(child, Some(idx), depth + 1)?;
            self.entries[idx].children.push(child_idx);
        }
        Ok(idx)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in pre-order (parents before children, siblings in order).
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn roots(&self) -> impl Iterator<Item = &NavEntry> {
        self.roots.iter().map(|&i| &self.entries[i])
    }

    pub fn lookup(&self, path: &str) -> Option<&NavEntry> {
        self.by_path.get(&normalize(path)).map(|&i| &self.entries[i])
    }

    /// Entry for the longest registered prefix of `path`.
    ///
    /// `/staff/42/edit` resolves to `/staff` when only that is registered.
    pub fn resolve(&self, path: &str) -> Option<&NavEntry> {
        let mut candidate = normalize(path);
        loop {
            if let Some(&i) = self.by_path.get(&candidate) {
                return Some(&self.entries[i]);
            }
            if candidate == "/" {
                return None;
            }
            candidate = match candidate.rfind('/') {
                Some(0) | None => "/".to_string(),
                Some(cut) => candidate[..cut].to_string(),
            };
        }
    }

    pub fn icon_for(&self, path: &str) -> Option<&str> {
        self.resolve(path).and_then(|e| e.icon.as_deref())
    }

    /// Root-to-entry chain for the resolved entry of `path`.
    pub fn breadcrumb(&self, path: &str) -> Vec<&NavEntry> {
        let Some(entry) = self.resolve(path) else {
            return Vec::new();
        };
        let mut chain = vec![entry];
        let mut parent = entry.parent;
        while let Some(p) = parent {
            chain.push(&self.entries[p]);
            parent = self.entries[p].parent;
        }
        chain.reverse();
        chain
    }

    pub fn children(&self, path: &str) -> Vec<&NavEntry> {
        self.lookup(path)
            .map(|e| e.children.iter().map(|&c| &self.entries[c]).collect())
            .unwrap_or_default()
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
