//! Claim records and the claim set

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Claim category derived from the payment text
///
/// Variants are declared in alphabetical order of their labels so that
/// keyed aggregates iterate as `Non-OPD`, `OPD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    #[serde(rename = "Non-OPD")]
    NonOpd,
    #[serde(rename = "OPD")]
    Opd,
}

impl ClaimType {
    /// Classifies a payment text.
    ///
    /// Any text containing `OPD` in any case is an outpatient claim, so
    /// `"opd consult"` and `"OPDX"` both count. Missing text is `Non-OPD`.
    pub fn classify(pay_text: Option<&str>) -> Self {
        match pay_text {
            Some(text) if text.to_uppercase().contains("OPD") => ClaimType::Opd,
            _ => ClaimType::NonOpd,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimType::NonOpd => "Non-OPD",
            ClaimType::Opd => "OPD",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single raw spreadsheet cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(#[serde(with = "rust_decimal::serde::float")] Decimal),
    Text(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Text rendering used by the raw table; empty cells render as ""
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Number(n) => n.normalize().to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

/// One row of the claims sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// `Paid_Status`, expected `YES` or `NO`
    pub paid_status: Option<String>,
    /// `Claim_Amount`
    #[serde(with = "rust_decimal::serde::float_option")]
    pub claim_amount: Option<Decimal>,
    /// `Approved_Amount`
    #[serde(with = "rust_decimal::serde::float_option")]
    pub approved_amount: Option<Decimal>,
    /// `Pay_Text`, free text describing the payment category
    pub pay_text: Option<String>,
    /// Every cell of the row, aligned with [`ClaimSet::columns`]
    pub cells: Vec<CellValue>,
}

impl ClaimRecord {
    /// Creates a record from the four typed fields with no extra cells
    pub fn new(
        paid_status: Option<String>,
        claim_amount: Option<Decimal>,
        approved_amount: Option<Decimal>,
        pay_text: Option<String>,
    ) -> Self {
        Self {
            paid_status,
            claim_amount,
            approved_amount,
            pay_text,
            cells: Vec::new(),
        }
    }

    /// Derived claim category; a pure function of `pay_text`
    pub fn claim_type(&self) -> ClaimType {
        ClaimType::classify(self.pay_text.as_deref())
    }
}

/// An ordered sequence of claim records plus the sheet's header row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimSet {
    pub columns: Vec<String>,
    pub records: Vec<ClaimRecord>,
}

impl ClaimSet {
    pub fn new(columns: Vec<String>, records: Vec<ClaimRecord>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClaimRecord> {
        self.records.iter()
    }

    /// Keeps the records matching `predicate`, preserving order
    pub fn retain<F>(mut self, predicate: F) -> Self
    where
        F: FnMut(&ClaimRecord) -> bool,
    {
        self.records.retain(predicate);
        self
    }
}
