//! Test Data Builders
//!
//! Builders let a test name only the fields it cares about.

use domain_claims::{CellValue, ClaimRecord, ClaimSet};
use rust_decimal::Decimal;

/// Builder for a single claim record
#[derive(Debug, Clone, Default)]
pub struct ClaimRecordBuilder {
    paid_status: Option<String>,
    claim_amount: Option<Decimal>,
    approved_amount: Option<Decimal>,
    pay_text: Option<String>,
}

impl ClaimRecordBuilder {
    /// Creates a builder with every field blank
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paid_status(mut self, status: impl Into<String>) -> Self {
        self.paid_status = Some(status.into());
        self
    }

    pub fn claim_amount(mut self, amount: Decimal) -> Self {
        self.claim_amount = Some(amount);
        self
    }

    pub fn approved_amount(mut self, amount: Decimal) -> Self {
        self.approved_amount = Some(amount);
        self
    }

    pub fn pay_text(mut self, text: impl Into<String>) -> Self {
        self.pay_text = Some(text.into());
        self
    }

    /// Builds the record with cells in [`ClaimSetBuilder::COLUMNS`] order
    pub fn build(self) -> ClaimRecord {
        let text = |v: &Option<String>| v.clone().map_or(CellValue::Empty, CellValue::Text);
        let number = |v: &Option<Decimal>| v.map_or(CellValue::Empty, CellValue::Number);

        let cells = vec![
            text(&self.paid_status),
            number(&self.claim_amount),
            number(&self.approved_amount),
            text(&self.pay_text),
        ];

        ClaimRecord {
            paid_status: self.paid_status,
            claim_amount: self.claim_amount,
            approved_amount: self.approved_amount,
            pay_text: self.pay_text,
            cells,
        }
    }
}

/// Builder for a claim set with the minimal four-column header
#[derive(Debug, Clone, Default)]
pub struct ClaimSetBuilder {
    records: Vec<ClaimRecord>,
}

impl ClaimSetBuilder {
    pub const COLUMNS: [&'static str; 4] =
        ["Paid_Status", "Claim_Amount", "Approved_Amount", "Pay_Text"];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(mut self, record: ClaimRecordBuilder) -> Self {
        self.records.push(record.build());
        self
    }

    /// Shorthand for the common status/amount/text triple
    pub fn claim(self, status: &str, amount: Decimal, pay_text: &str) -> Self {
        self.record(
            ClaimRecordBuilder::new()
                .paid_status(status)
                .claim_amount(amount)
                .pay_text(pay_text),
        )
    }

    pub fn build(self) -> ClaimSet {
        ClaimSet::new(
            Self::COLUMNS.iter().map(|s| s.to_string()).collect(),
            self.records,
        )
    }
}
