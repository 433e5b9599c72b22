use bizdash_core::{
    ColumnDescriptor, QueryResult, QueryState, RenderState, RowActions, TableProps, render_table,
};

use crate::presentation::records::ListRecord;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ListViewModel, StatusBadge,
};

pub fn present_list<Row: ListRecord>(
    query: &QueryState,
    result: &QueryResult<Row>,
    columns: &[ColumnDescriptor<Row>],
    actions: Option<&RowActions<'_, Row>>,
    max_width: Option<usize>,
) -> ListViewModel {
    let mut props = TableProps::new(&result.data, columns).flags(result.flags);
    if let Some(actions) = actions {
        props = props.actions(actions);
    }

    let search = query.search().trim();
    ListViewModel {
        title: Row::TITLE.to_string(),
        route: Row::ROUTE.to_string(),
        search: (!search.is_empty()).then(|| search.to_string()),
        page: query.page(),
        size: query.size(),
        total: result.total,
        has_more: query.has_more(),
        columns: columns.iter().map(|c| c.label.clone()).collect(),
        table: render_table(&props),
        max_width,
    }
}

/// Wrap a list for the console, with a badge and follow-ups for the
/// empty, failed and paged cases. `command` is the invocation that
/// produced the list, used to build the suggested next command.
pub fn present_list_result(
    list: ListViewModel,
    command: &str,
) -> CommandResultViewModel<ListViewModel> {
    let status = list.table.status();
    let page = list.page;
    let has_more = list.has_more;
    let searched = list.search.is_some();
    let title = list.title.clone();

    let mut result = CommandResultViewModel::new(list);
    match status {
        Some(RenderState::Error) => {
            result = result
                .with_badge(StatusBadge::error(format!("Could not load {}", title)))
                .with_suggestion(Guidance::new(
                    "Check that the file is a JSON array of records",
                ))
                .with_suggestion(
                    Guidance::new("Show the underlying error")
                        .with_command(format!("{} --log-level debug", command)),
                );
        }
        Some(RenderState::Empty) if searched => {
            result = result
                .with_suggestion(Guidance::new("Try a broader search, or drop --search"));
        }
        Some(RenderState::Empty) if page > 1 => {
            result = result.with_suggestion(
                Guidance::new("This page is past the last record")
                    .with_command(format!("{} --page 1", command)),
            );
        }
        Some(_) => {}
        None if has_more => {
            result = result.with_suggestion(
                Guidance::new("More records on the next page")
                    .with_command(format!("{} --page {}", command, page + 1)),
            );
        }
        None => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizdash_core::{MemorySource, load};
    use bizdash_types::{StaffMember, StaffRole};

    fn staff(n: u64) -> Vec<StaffMember> {
        (1..=n)
            .map(|id| StaffMember {
                id,
                name: format!("Member {}", id),
                role: StaffRole::Staff,
                email: format!("m{}@example.com", id),
                active: true,
            })
            .collect()
    }

    #[test]
    fn test_present_list_first_page() {
        let source = MemorySource::new(staff(3));
        let mut query = QueryState::new(2);
        let result = load(&source, &mut query);
        let columns = StaffMember::columns();

        let vm = present_list(&query, &result, &columns, None, None);
        assert_eq!(vm.title, "Staff");
        assert_eq!(vm.total, 3);
        assert!(vm.has_more);
        assert_eq!(vm.shown(), 2);
        assert_eq!(vm.columns, vec!["ID", "Name", "Role", "Email", "Active"]);

        let result = present_list_result(vm, "bizdash list staff --file s.json");
        assert!(result.badge.is_none());
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("bizdash list staff --file s.json --page 2")
        );
    }

    #[test]
    fn test_present_list_empty_search() {
        let source = MemorySource::new(staff(3));
        let mut query = QueryState::new(10);
        query.set_search("nobody");
        let result = load(&source, &mut query);
        let columns = StaffMember::columns();

        let vm = present_list(&query, &result, &columns, None, None);
        assert_eq!(vm.table.status(), Some(RenderState::Empty));
        assert_eq!(vm.search.as_deref(), Some("nobody"));
        assert_eq!(vm.to_string(), "No records found.\nSearch: nobody\n");
    }

    #[test]
    fn test_present_list_failed_fetch_has_error_badge() {
        let query = QueryState::new(10);
        let result = QueryResult::<StaffMember>::failed();
        let columns = StaffMember::columns();

        let vm = present_list(&query, &result, &columns, None, None);
        let result = present_list_result(vm, "bizdash list staff --file s.json");
        let badge = result.badge.unwrap();
        assert_eq!(badge.label, "Could not load Staff");
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn test_plain_text_table() {
        let source = MemorySource::new(staff(1));
        let mut query = QueryState::new(10);
        let result = load(&source, &mut query);
        let columns = StaffMember::columns();

        let vm = present_list(&query, &result, &columns, None, None);
        let text = vm.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID  Name      Role   Email           Active");
        assert_eq!(lines[2], "1   Member 1  staff  m1@example.com  yes");
        assert_eq!(lines[4], "Staff · page 1 · showing 1 of 1");
    }
}
