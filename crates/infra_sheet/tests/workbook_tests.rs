//! Tests for the workbook adapter
//!
//! Sheet contents are built as calamine ranges in memory; file handling is
//! exercised against `tests/fixtures/claims.xlsx` (sheets `All_Cleaned_Data`
//! and `Summary`) and paths that cannot be opened as workbooks.

use std::fs;
use std::path::PathBuf;

use calamine::{Data, Range};
use rust_decimal_macros::dec;

use domain_claims::{CellValue, ClaimError, ClaimSchema, ClaimSource, ClaimType, SchemaError};
use infra_sheet::{claim_set_from_range, WorkbookClaimSource, DEFAULT_SHEET, DEFAULT_WORKBOOK};

fn sheet(rows: Vec<Vec<Data>>) -> Range<Data> {
    let height = rows.len() as u32;
    let width = rows.iter().map(Vec::len).max().unwrap_or(0) as u32;
    let mut range = Range::new((0, 0), (height - 1, width - 1));
    for (r, row) in rows.into_iter().enumerate() {
        for (c, value) in row.into_iter().enumerate() {
            range.set_value((r as u32, c as u32), value);
        }
    }
    range
}

fn fixture_workbook() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/claims.xlsx")
}

fn text(s: &str) -> Data {
    Data::String(s.to_string())
}

fn header() -> Vec<Data> {
    vec![
        text("Bill_No"),
        text("Paid_Status"),
        text("Claim_Amount"),
        text("Approved_Amount"),
        text("Pay_Text"),
    ]
}

mod conversion {
    use super::*;

    #[test]
    fn test_rows_map_onto_records() {
        let range = sheet(vec![
            header(),
            vec![text("B-1"), text("YES"), Data::Float(60000.0), Data::Int(55000), text("OPD Consultation")],
            vec![text("B-2"), text("NO"), Data::Int(30000), Data::Float(0.0), text("Inpatient")],
        ]);

        let claims = claim_set_from_range(&range, &ClaimSchema::default()).unwrap();

        assert_eq!(
            claims.columns,
            vec!["Bill_No", "Paid_Status", "Claim_Amount", "Approved_Amount", "Pay_Text"]
        );
        assert_eq!(claims.len(), 2);

        let first = &claims.records[0];
        assert_eq!(first.paid_status.as_deref(), Some("YES"));
        assert_eq!(first.claim_amount, Some(dec!(60000)));
        assert_eq!(first.approved_amount, Some(dec!(55000)));
        assert_eq!(first.claim_type(), ClaimType::Opd);
        assert_eq!(first.cells[0], CellValue::Text("B-1".into()));

        assert_eq!(claims.records[1].claim_type(), ClaimType::NonOpd);
    }

    #[test]
    fn test_blank_cells_become_missing_values() {
        let range = sheet(vec![
            header(),
            vec![text("B-3"), Data::Empty, Data::Empty, Data::Empty, Data::Empty],
        ]);

        let claims = claim_set_from_range(&range, &ClaimSchema::default()).unwrap();
        let record = &claims.records[0];

        assert_eq!(record.paid_status, None);
        assert_eq!(record.claim_amount, None);
        assert_eq!(record.approved_amount, None);
        assert_eq!(record.claim_type(), ClaimType::NonOpd);
        assert_eq!(record.cells.len(), 5);
    }

    #[test]
    fn test_fully_blank_rows_are_skipped() {
        let range = sheet(vec![
            header(),
            vec![Data::Empty, Data::Empty, Data::Empty, Data::Empty, Data::Empty],
            vec![text("B-4"), text("YES"), Data::Int(10), Data::Int(10), text("OPD")],
        ]);

        let claims = claim_set_from_range(&range, &ClaimSchema::default()).unwrap();
        assert_eq!(claims.len(), 1);
        assert_eq!(claims.records[0].cells[0], CellValue::Text("B-4".into()));
    }

    #[test]
    fn test_text_amounts_are_parsed() {
        let range = sheet(vec![
            header(),
            vec![text("B-5"), text("YES"), text("75,000"), text(" 1200.50 "), text("Surgery")],
        ]);

        let claims = claim_set_from_range(&range, &ClaimSchema::default()).unwrap();
        assert_eq!(claims.records[0].claim_amount, Some(dec!(75000)));
        assert_eq!(claims.records[0].approved_amount, Some(dec!(1200.50)));
    }

    #[test]
    fn test_missing_columns_fail_fast() {
        let range = sheet(vec![
            vec![text("Bill_No"), text("Paid_Status"), text("Claim_Amount")],
            vec![text("B-6"), text("YES"), Data::Int(1)],
        ]);

        let err = claim_set_from_range(&range, &ClaimSchema::default()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingColumns(vec!["Approved_Amount".into(), "Pay_Text".into()])
        );
    }

    #[test]
    fn test_bad_amount_reports_sheet_row() {
        let range = sheet(vec![
            header(),
            vec![text("B-7"), text("YES"), Data::Int(1), Data::Int(1), text("OPD")],
            vec![text("B-8"), text("NO"), text("n/a"), Data::Int(1), text("OPD")],
        ]);

        let err = claim_set_from_range(&range, &ClaimSchema::default()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidCell {
                row: 3,
                column: "Claim_Amount".into(),
                value: "n/a".into(),
            }
        );
    }

    #[test]
    fn test_empty_range_is_empty_sheet() {
        let range: Range<Data> = Range::empty();
        let err = claim_set_from_range(&range, &ClaimSchema::default()).unwrap_err();
        assert_eq!(err, SchemaError::EmptySheet);
    }

    #[test]
    fn test_custom_schema() {
        let schema = ClaimSchema {
            paid_status: "Status".into(),
            claim_amount: "Claimed".into(),
            approved_amount: "Approved".into(),
            pay_text: "Category".into(),
        };
        let range = sheet(vec![
            vec![text("Status"), text("Claimed"), text("Approved"), text("Category")],
            vec![text("YES"), Data::Int(51000), Data::Int(50000), text("OPD")],
        ]);

        let claims = claim_set_from_range(&range, &schema).unwrap();
        assert_eq!(claims.records[0].claim_amount, Some(dec!(51000)));
    }
}

mod source {
    use super::*;

    #[test]
    fn test_defaults_match_the_processed_workbook() {
        let source = WorkbookClaimSource::default();
        assert_eq!(source.path().to_str(), Some(DEFAULT_WORKBOOK));
        assert_eq!(source.sheet(), DEFAULT_SHEET);
        assert_eq!(source.describe(), "Cleaned_Medical_Bills_Processed.xlsx#All_Cleaned_Data");
    }

    #[test]
    fn test_missing_file_is_a_data_load_error() {
        let source = WorkbookClaimSource::new("/nonexistent/claims.xlsx", DEFAULT_SHEET);
        let err = source.load().unwrap_err();

        assert!(matches!(err, ClaimError::DataLoad(_)));
        assert!(err.to_string().contains("/nonexistent/claims.xlsx"));
    }

    #[test]
    fn test_non_spreadsheet_file_is_a_data_load_error() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let source = WorkbookClaimSource::new(manifest, DEFAULT_SHEET);

        assert!(matches!(source.load(), Err(ClaimError::DataLoad(_))));
    }

    #[test]
    fn test_loads_the_claims_sheet() {
        let source = WorkbookClaimSource::new(fixture_workbook(), DEFAULT_SHEET);
        let claims = source.load().unwrap();

        assert_eq!(
            claims.columns,
            ["Bill_No", "Patient_Name", "Paid_Status", "Claim_Amount", "Approved_Amount", "Pay_Text"]
        );
        // The blank fourth sheet row is skipped
        assert_eq!(claims.len(), 4);

        let first = &claims.records[0];
        assert_eq!(first.paid_status.as_deref(), Some("YES"));
        assert_eq!(first.claim_amount, Some(dec!(60000)));
        assert_eq!(first.approved_amount, Some(dec!(55000)));
        assert_eq!(first.claim_type(), ClaimType::Opd);
        assert_eq!(first.cells[1], CellValue::Text("A. Sharma".into()));

        let grouped_text = &claims.records[2];
        assert_eq!(grouped_text.claim_amount, Some(dec!(120000)));
        assert_eq!(grouped_text.approved_amount, Some(dec!(100000.5)));

        let missing_approved = &claims.records[3];
        assert_eq!(missing_approved.approved_amount, None);
        assert_eq!(missing_approved.claim_type(), ClaimType::Opd);
    }

    #[test]
    fn test_unknown_sheet_lists_the_available_ones() {
        let source = WorkbookClaimSource::new(fixture_workbook(), "Claims2024");
        let err = source.load().unwrap_err();

        assert!(matches!(err, ClaimError::DataLoad(_)));
        let message = err.to_string();
        assert!(message.contains("Claims2024"));
        assert!(message.contains("All_Cleaned_Data, Summary"));
    }

    #[test]
    fn test_sheet_without_claim_columns_is_a_schema_error() {
        let source = WorkbookClaimSource::new(fixture_workbook(), "Summary");

        match source.load() {
            Err(ClaimError::Schema(SchemaError::MissingColumns(missing))) => {
                assert_eq!(missing.len(), 4);
            }
            other => panic!("expected missing columns, got {:?}", other),
        }
    }

    #[test]
    fn test_every_load_reopens_the_file() {
        let dir = std::env::temp_dir().join(format!("infra_sheet_reload_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("claims.xlsx");
        fs::copy(fixture_workbook(), &path).unwrap();

        let source = WorkbookClaimSource::new(&path, DEFAULT_SHEET);
        assert_eq!(source.load().unwrap().len(), 4);
        assert_eq!(source.load().unwrap().len(), 4);

        // Nothing is held open or cached between loads
        fs::remove_file(&path).unwrap();
        assert!(matches!(source.load(), Err(ClaimError::DataLoad(_))));

        fs::remove_dir_all(&dir).ok();
    }
}
