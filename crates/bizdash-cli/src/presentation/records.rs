//! Column layouts and one-key edits for each listable record type.

use bizdash_core::ColumnDescriptor;
use bizdash_types::{Identified, Invoice, InvoiceStatus, Searchable, StaffMember};
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::formatters::format_cents;

pub trait ListRecord:
    Identified + Searchable + Clone + Serialize + DeserializeOwned + 'static
{
    const TITLE: &'static str;
    /// Dashboard route of the list page
    const ROUTE: &'static str;

    fn columns() -> Vec<ColumnDescriptor<Self>>;

    /// Short name shown in the delete prompt.
    fn describe(&self) -> String;

    /// The edit bound to the browser's edit key; returns what changed.
    fn quick_edit(&mut self) -> String;
}

impl ListRecord for StaffMember {
    const TITLE: &'static str = "Staff";
    const ROUTE: &'static str = "/staff";

    fn columns() -> Vec<ColumnDescriptor<Self>> {
        vec![
            ColumnDescriptor::field("id").label("ID"),
            ColumnDescriptor::field("name").label("Name"),
            ColumnDescriptor::field("role").label("Role"),
            ColumnDescriptor::field("email").label("Email"),
            ColumnDescriptor::derived("active", |m: &StaffMember| {
                let text = if m.active { "yes" } else { "no" };
                text.to_string()
            })
            .label("Active"),
        ]
    }

    fn describe(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    fn quick_edit(&mut self) -> String {
        if self.toggle_active() {
            "marked active".to_string()
        } else {
            "marked inactive".to_string()
        }
    }
}

impl ListRecord for Invoice {
    const TITLE: &'static str = "Invoices";
    const ROUTE: &'static str = "/invoices";

    fn columns() -> Vec<ColumnDescriptor<Self>> {
        invoice_columns(chrono::Local::now().date_naive())
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.id, self.client)
    }

    fn quick_edit(&mut self) -> String {
        self.mark_paid();
        "marked paid".to_string()
    }
}

/// Invoice layout as of `today`; sent invoices past due show as overdue.
fn invoice_columns(today: NaiveDate) -> Vec<ColumnDescriptor<Invoice>> {
    vec![
        ColumnDescriptor::field("id").label("Invoice"),
        ColumnDescriptor::field("client").label("Client"),
        ColumnDescriptor::derived("amount", |inv: &Invoice| format_cents(inv.amount_cents))
            .label("Amount"),
        ColumnDescriptor::derived("status", move |inv: &Invoice| {
            if inv.is_overdue_on(today) {
                InvoiceStatus::Overdue.to_string()
            } else {
                inv.status.to_string()
            }
        })
        .label("Status"),
        ColumnDescriptor::field("issued_on").label("Issued"),
        ColumnDescriptor::field("due_on")
            .label("Due")
            .render_with(|_, raw| if raw.is_empty() { "-".to_string() } else { raw }),
    ]
}
