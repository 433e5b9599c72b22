use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Identified, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invoice as listed on the invoicing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub client: String,
    /// Total in minor currency units
    pub amount_cents: i64,
    pub status: InvoiceStatus,
    pub issued_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_on: Option<NaiveDate>,
}

impl Invoice {
    /// Whether the invoice is unpaid past its due date.
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        match (self.status, self.due_on) {
            (InvoiceStatus::Paid | InvoiceStatus::Draft, _) => false,
            (InvoiceStatus::Overdue, _) => true,
            (InvoiceStatus::Sent, Some(due)) => due < today,
            (InvoiceStatus::Sent, None) => false,
        }
    }

    pub fn mark_paid(&mut self) {
        self.status = InvoiceStatus::Paid;
    }
}

impl Identified for Invoice {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

impl Searchable for Invoice {
    fn haystack(&self) -> Vec<&str> {
        vec![&self.id, &self.client, self.status.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(status: InvoiceStatus, due_on: Option<NaiveDate>) -> Invoice {
        Invoice {
            id: "INV-0001".to_string(),
            client: "Acme Ltd".to_string(),
            amount_cents: 12_500,
            status,
            issued_on: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            due_on,
        }
    }

    #[test]
    fn test_overdue_only_for_unpaid_past_due() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let past = NaiveDate::from_ymd_opt(2026, 1, 20);
        let future = NaiveDate::from_ymd_opt(2026, 3, 1);

        assert!(invoice(InvoiceStatus::Sent, past).is_overdue_on(today));
        assert!(!invoice(InvoiceStatus::Sent, future).is_overdue_on(today));
        assert!(!invoice(InvoiceStatus::Paid, past).is_overdue_on(today));
        assert!(!invoice(InvoiceStatus::Sent, None).is_overdue_on(today));
    }

    #[test]
    fn test_deserialize_without_due_date() {
        let json = r#"{"id":"INV-9","client":"Globex","amount_cents":99,"status":"draft","issued_on":"2026-04-01"}"#;
        let parsed: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.due_on, None);
        assert_eq!(parsed.status, InvoiceStatus::Draft);
    }
}
