//! Claims table schema
//!
//! The dashboard only understands one sheet layout. Resolving the header row
//! against [`ClaimSchema`] up front turns a missing column into a single
//! [`SchemaError`] instead of a failure deep inside the pipeline.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::SchemaError;
use crate::record::{CellValue, ClaimRecord};

/// Names of the columns the pipeline reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSchema {
    pub paid_status: String,
    pub claim_amount: String,
    pub approved_amount: String,
    pub pay_text: String,
}

impl Default for ClaimSchema {
    fn default() -> Self {
        Self {
            paid_status: "Paid_Status".to_string(),
            claim_amount: "Claim_Amount".to_string(),
            approved_amount: "Approved_Amount".to_string(),
            pay_text: "Pay_Text".to_string(),
        }
    }
}

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub paid_status: usize,
    pub claim_amount: usize,
    pub approved_amount: usize,
    pub pay_text: usize,
}

impl ClaimSchema {
    /// Locates every required column in `headers`.
    ///
    /// Headers are compared after trimming whitespace; the comparison is
    /// otherwise exact. All absent columns are reported together.
    pub fn resolve(&self, headers: &[String]) -> Result<ColumnIndex, SchemaError> {
        if headers.is_empty() {
            return Err(SchemaError::EmptySheet);
        }

        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let paid_status = find(&self.paid_status);
        let claim_amount = find(&self.claim_amount);
        let approved_amount = find(&self.approved_amount);
        let pay_text = find(&self.pay_text);

        match (paid_status, claim_amount, approved_amount, pay_text) {
            (Some(paid_status), Some(claim_amount), Some(approved_amount), Some(pay_text)) => {
                Ok(ColumnIndex {
                    paid_status,
                    claim_amount,
                    approved_amount,
                    pay_text,
                })
            }
            _ => {
                let missing = [
                    (paid_status, &self.paid_status),
                    (claim_amount, &self.claim_amount),
                    (approved_amount, &self.approved_amount),
                    (pay_text, &self.pay_text),
                ]
                .into_iter()
                .filter(|(pos, _)| pos.is_none())
                .map(|(_, name)| name.clone())
                .collect();
                Err(SchemaError::MissingColumns(missing))
            }
        }
    }

    /// Builds a typed record from one data row.
    ///
    /// `row_number` is the 1-based sheet row used in error messages.
    pub fn record_from_row(
        &self,
        index: &ColumnIndex,
        cells: Vec<CellValue>,
        row_number: usize,
    ) -> Result<ClaimRecord, SchemaError> {
        let cell = |i: usize| cells.get(i).unwrap_or(&CellValue::Empty);

        let claim_amount = parse_amount(cell(index.claim_amount), &self.claim_amount, row_number)?;
        let approved_amount =
            parse_amount(cell(index.approved_amount), &self.approved_amount, row_number)?;
        let paid_status = text_of(cell(index.paid_status));
        let pay_text = text_of(cell(index.pay_text));

        Ok(ClaimRecord {
            paid_status,
            claim_amount,
            approved_amount,
            pay_text,
            cells,
        })
    }
}

fn text_of(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Empty => None,
        other => Some(other.display()),
    }
}

/// Reads an amount cell. Text cells may carry digit-grouping commas or
/// surrounding whitespace; anything else non-numeric is a schema error.
fn parse_amount(
    cell: &CellValue,
    column: &str,
    row_number: usize,
) -> Result<Option<Decimal>, SchemaError> {
    match cell {
        CellValue::Empty => Ok(None),
        CellValue::Number(n) => Ok(Some(*n)),
        CellValue::Text(s) if s.trim().is_empty() => Ok(None),
        CellValue::Text(s) => {
            let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
            Decimal::from_str(&cleaned)
                .or_else(|_| Decimal::from_scientific(&cleaned))
                .map(Some)
                .map_err(|_| SchemaError::InvalidCell {
                    row: row_number,
                    column: column.to_string(),
                    value: s.clone(),
                })
        }
        CellValue::Bool(b) => Err(SchemaError::InvalidCell {
            row: row_number,
            column: column.to_string(),
            value: b.to_string(),
        }),
    }
}
