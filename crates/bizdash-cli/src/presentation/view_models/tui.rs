//! View models for the interactive browser.
//!
//! Built fresh by the presenter on every frame; the views only read them.

use bizdash_core::StatusLevel;
use serde::Serialize;

use super::list::ListViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub page: u32,
    pub shown: usize,
    pub total: usize,
    pub has_more: bool,
    pub search: String,
    /// True while the search prompt has focus
    pub editing_search: bool,
    pub message: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmViewModel {
    pub title: String,
    pub target: String,
    /// Delete in flight: both buttons are disabled
    pub busy: bool,
}

#[derive(Debug, Serialize)]
pub struct BrowseScreenViewModel {
    pub breadcrumb: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub list: ListViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmViewModel>,
    pub status_bar: StatusBarViewModel,
}
