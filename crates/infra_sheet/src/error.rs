//! Workbook error types
//!
//! These errors stay inside the adapter; the pipeline sees them as
//! [`ClaimError::DataLoad`].

use std::path::PathBuf;

use domain_claims::ClaimError;
use thiserror::Error;

/// Errors raised while opening or reading a workbook
#[derive(Debug, Error)]
pub enum SheetError {
    /// The file is missing, unreadable or not a supported spreadsheet
    #[error("Failed to open workbook {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The workbook has no sheet with the configured name
    #[error("Sheet {sheet:?} not found in {}; available: {}", path.display(), available.join(", "))]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },

    /// The sheet exists but its cells could not be decoded
    #[error("Failed to read sheet {sheet:?}: {source}")]
    Read {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

impl From<SheetError> for ClaimError {
    fn from(err: SheetError) -> Self {
        ClaimError::DataLoad(err.to_string())
    }
}
