//! List View Flow Tests
//!
//! Drives a page-level container the way the dashboard does: query state,
//! data source, table render, row actions and the delete confirmation.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use bizdash_core::types::{Invoice, InvoiceStatus};
use bizdash_core::{
    ColumnDescriptor, ConfirmState, DeleteConfirmation, Error, MemorySource, QueryState,
    RenderState, RowActions, TableOutput, TableProps, load, render_table, run_delete,
};
use futures::FutureExt;

fn invoices() -> Vec<Invoice> {
    ["Acme", "Globex", "Initech"]
        .iter()
        .enumerate()
        .map(|(i, client)| Invoice {
            id: format!("INV-{:04}", i + 1),
            client: client.to_string(),
            amount_cents: 10_000 * (i as i64 + 1),
            status: InvoiceStatus::Sent,
            issued_on: chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            due_on: None,
        })
        .collect()
}

fn columns() -> Vec<ColumnDescriptor<Invoice>> {
    vec![
        ColumnDescriptor::field("id").label("Invoice"),
        ColumnDescriptor::field("client").label("Client"),
        ColumnDescriptor::derived("amount", |inv: &Invoice| {
            format!("{}.{:02}", inv.amount_cents / 100, inv.amount_cents % 100)
        })
        .label("Amount"),
    ]
}

#[tokio::test(start_paused = true)]
async fn test_confirmed_delete_removes_row_on_next_load() {
    // Given: a page showing three invoices with a delete action
    let source = Rc::new(RefCell::new(MemorySource::new(invoices())));
    let mut query = QueryState::new(10);
    let columns = columns();

    let delete_source = Rc::clone(&source);
    let actions = RowActions::<Invoice>::new().with_delete(move |id, _row| {
        let source = Rc::clone(&delete_source);
        let id = id.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            source.borrow_mut().remove(&id).map(|_| ())
        }
        .boxed_local()
    });

    let result = load(&*source.borrow(), &mut query);
    let output = render_table(&TableProps::new(&result.data, &columns).actions(&actions));
    assert_eq!(output.rows().len(), 3);
    assert_eq!(output.cell_count(), 9);

    // When: the user confirms deleting the second invoice
    let target = &result.data[1];
    let dialog = RefCell::new(DeleteConfirmation::new());
    assert!(dialog.borrow_mut().open_for(&actions, target));
    run_delete(&dialog, &actions, target).await;

    // Then: the dialog is closed and the next load no longer has the row
    assert_eq!(dialog.borrow().state(), &ConfirmState::Idle);
    let result = load(&*source.borrow(), &mut query);
    let output = render_table(&TableProps::new(&result.data, &columns));
    let keys: Vec<&str> = output.rows().iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["INV-0001", "INV-0003"]);
}

#[tokio::test(start_paused = true)]
async fn test_failed_delete_closes_dialog_and_keeps_row() {
    let source = Rc::new(RefCell::new(MemorySource::new(invoices())));
    let mut query = QueryState::new(10);
    let reported = Rc::new(RefCell::new(Vec::new()));

    // The caller's callback owns error reporting (the toast collaborator).
    let toasts = Rc::clone(&reported);
    let actions = RowActions::<Invoice>::new().with_delete(move |id, _row| {
        let toasts = Rc::clone(&toasts);
        let id = id.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let err = Error::Action(format!("{} is locked", id));
            toasts.borrow_mut().push(err.to_string());
            Err(err)
        }
        .boxed_local()
    });

    let result = load(&*source.borrow(), &mut query);
    let dialog = RefCell::new(DeleteConfirmation::new());
    dialog.borrow_mut().open(result.data[0].id.clone());
    run_delete(&dialog, &actions, &result.data[0]).await;

    assert!(!dialog.borrow().is_open());
    assert_eq!(
        reported.borrow().as_slice(),
        &["Action failed: INV-0001 is locked".to_string()]
    );
    assert_eq!(load(&*source.borrow(), &mut query).data.len(), 3);
}

#[test]
fn test_search_then_page_flow() {
    let source = MemorySource::new(invoices());
    let mut query = QueryState::new(1);
    let columns = columns();

    query.set_page(3);
    query.set_search("globex");
    assert_eq!(query.page(), 1);

    let result = load(&source, &mut query);
    let output = render_table(&TableProps::new(&result.data, &columns));
    let TableOutput::Table(table) = output else {
        panic!("expected rows");
    };
    assert_eq!(table.rows[0].cells, vec!["INV-0002", "Globex", "200.00"]);

    query.set_search("nobody");
    let result = load(&source, &mut query);
    let output = render_table(&TableProps::new(&result.data, &columns).flags(result.flags));
    assert_eq!(output.status(), Some(RenderState::Empty));
}

#[test]
fn test_edit_callback_mutates_through_source() {
    let source = Rc::new(RefCell::new(MemorySource::new(invoices())));
    let edit_source = Rc::clone(&source);
    let actions = RowActions::<Invoice>::new().with_edit(move |id, _row| {
        let _ = edit_source.borrow_mut().update(id, Invoice::mark_paid);
    });

    let snapshot = source.borrow().rows()[2].clone();
    assert!(actions.edit(&snapshot));
    assert_eq!(source.borrow().rows()[2].status, InvoiceStatus::Paid);
}
