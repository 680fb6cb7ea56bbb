//! Spreadsheet Infrastructure Layer
//!
//! This crate provides the workbook adapter behind the claims dashboard.
//! It implements the [`ClaimSource`](domain_claims::ClaimSource) port on top
//! of `calamine`, so `.xlsx`, `.xls` and `.ods` files are all accepted.
//!
//! # Loading
//!
//! Each call to `load` opens the workbook, reads one sheet into memory,
//! validates its header row against the claims schema and closes the file
//! again before returning. Nothing is cached between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_sheet::WorkbookClaimSource;
//!
//! let source = WorkbookClaimSource::new("Cleaned_Medical_Bills_Processed.xlsx", "All_Cleaned_Data");
//! let claims = source.load()?;
//! ```

pub mod convert;
pub mod error;
pub mod workbook;

pub use convert::{cell_value, claim_set_from_range, header_names};
pub use error::SheetError;
pub use workbook::{WorkbookClaimSource, DEFAULT_SHEET, DEFAULT_WORKBOOK};
