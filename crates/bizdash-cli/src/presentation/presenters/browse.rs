use bizdash_core::{DeleteConfirmation, NavTable, QueryState, Session, StatusLevel};

use crate::presentation::records::ListRecord;
use crate::presentation::view_models::{
    BrowseScreenViewModel, ConfirmViewModel, ListViewModel, StatusBarViewModel,
};

/// Status bar for the browser. A toast, when present, replaces the list's own status.
pub fn present_status_bar(
    query: &QueryState,
    list: &ListViewModel,
    search_input: Option<&str>,
    toast: Option<(StatusLevel, &str)>,
) -> StatusBarViewModel {
    let (level, message) = match (toast, list.table.status()) {
        (Some((level, text)), _) => (level, text.to_string()),
        (None, Some(state)) => (state.level(), state.message().to_string()),
        (None, None) => (StatusLevel::Info, "Ready".to_string()),
    };

    StatusBarViewModel {
        page: query.page(),
        shown: list.shown(),
        total: list.total,
        has_more: query.has_more(),
        search: search_input.unwrap_or(query.search()).to_string(),
        editing_search: search_input.is_some(),
        message,
        level,
    }
}

pub fn present_confirm<Row: ListRecord>(
    dialog: &DeleteConfirmation<Row::Id>,
    rows: &[Row],
) -> Option<ConfirmViewModel> {
    let target = dialog.target()?;
    let label = rows
        .iter()
        .find(|row| row.id() == target)
        .map(ListRecord::describe)
        .unwrap_or_else(|| target.to_string());

    Some(ConfirmViewModel {
        title: format!("Delete from {}", Row::TITLE),
        target: label,
        busy: dialog.is_busy(),
    })
}

pub fn present_browse_screen(
    nav: &NavTable,
    route: &str,
    session: Option<&Session>,
    list: ListViewModel,
    selected: Option<usize>,
    confirm: Option<ConfirmViewModel>,
    status_bar: StatusBarViewModel,
) -> BrowseScreenViewModel {
    let mut breadcrumb: Vec<String> = nav
        .breadcrumb(route)
        .into_iter()
        .map(|entry| entry.label.clone())
        .collect();
    if breadcrumb.is_empty() {
        breadcrumb.push(list.title.clone());
    }

    BrowseScreenViewModel {
        breadcrumb,
        user: session.map(|s| s.user.clone()),
        selected: selected.filter(|&i| i < list.shown()),
        list,
        confirm,
        status_bar,
    }
}
