//! Pre-built Test Fixtures
//!
//! Ready-to-use claim rows. Column order of [`ClaimFixtures::columns`] matches
//! the layout of the processed medical bills workbook.

use domain_claims::{CellValue, ClaimRecord, ClaimSet};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for claim sheets
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Header row of the processed workbook
    pub fn columns() -> Vec<String> {
        ["Bill_No", "Patient_Name", "Paid_Status", "Claim_Amount", "Approved_Amount", "Pay_Text"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// A paid outpatient claim above the high-claim threshold
    pub fn paid_opd_high() -> ClaimRecord {
        Self::row("B-1001", "A. Sharma", "YES", dec!(60000), dec!(55000), "OPD Consultation")
    }

    /// An unpaid inpatient claim below the threshold
    pub fn unpaid_inpatient() -> ClaimRecord {
        Self::row("B-1002", "R. Iyer", "NO", dec!(30000), dec!(0), "Inpatient")
    }

    /// The two-row sheet used throughout the pipeline examples
    pub fn two_claims() -> ClaimSet {
        ClaimSet::new(
            Self::columns(),
            vec![Self::paid_opd_high(), Self::unpaid_inpatient()],
        )
    }

    /// A larger sheet mixing statuses, types, blanks and duplicates
    pub fn mixed_claims() -> ClaimSet {
        let blank_amounts = {
            let mut r = Self::row("B-1006", "K. Das", "YES", dec!(0), dec!(0), "Pharmacy");
            r.claim_amount = None;
            r.approved_amount = None;
            r.cells[3] = CellValue::Empty;
            r.cells[4] = CellValue::Empty;
            r
        };
        let no_status = {
            let mut r = Self::row("B-1007", "M. Rao", "", dec!(75000), dec!(70000), "opd follow-up");
            r.paid_status = None;
            r.cells[2] = CellValue::Empty;
            r
        };

        ClaimSet::new(
            Self::columns(),
            vec![
                Self::paid_opd_high(),
                Self::unpaid_inpatient(),
                Self::row("B-1003", "S. Khan", "YES", dec!(120000), dec!(100000), "Surgery"),
                Self::row("B-1004", "P. Nair", "NO", dec!(52000.50), dec!(0), "OPDX Dental"),
                Self::row("B-1005", "T. Bose", "YES", dec!(1500), dec!(1500), "Opd Pharmacy"),
                blank_amounts,
                no_status,
                Self::paid_opd_high(),
            ],
        )
    }

    fn row(
        bill: &str,
        patient: &str,
        status: &str,
        claim: Decimal,
        approved: Decimal,
        pay_text: &str,
    ) -> ClaimRecord {
        ClaimRecord {
            paid_status: Some(status.to_string()),
            claim_amount: Some(claim),
            approved_amount: Some(approved),
            pay_text: Some(pay_text.to_string()),
            cells: vec![
                CellValue::Text(bill.to_string()),
                CellValue::Text(patient.to_string()),
                CellValue::Text(status.to_string()),
                CellValue::Number(claim),
                CellValue::Number(approved),
                CellValue::Text(pay_text.to_string()),
            ],
        }
    }
}
