//! Workbook-backed claim source

use std::path::{Path, PathBuf};
use std::time::Instant;

use calamine::{open_workbook_auto, Reader};
use tracing::{debug, info, warn};

use domain_claims::{ClaimError, ClaimSchema, ClaimSet, ClaimSource};

use crate::convert::claim_set_from_range;
use crate::error::SheetError;

/// Workbook read when no path is configured
pub const DEFAULT_WORKBOOK: &str = "Cleaned_Medical_Bills_Processed.xlsx";

/// Sheet holding the cleaned claim rows
pub const DEFAULT_SHEET: &str = "All_Cleaned_Data";

/// Reads claims from one sheet of a spreadsheet file
///
/// The file is opened fresh on every [`load`](ClaimSource::load) and closed
/// before it returns, so edits to the workbook show up on the next cycle.
#[derive(Debug, Clone)]
pub struct WorkbookClaimSource {
    path: PathBuf,
    sheet: String,
    schema: ClaimSchema,
}

impl Default for WorkbookClaimSource {
    fn default() -> Self {
        Self::new(DEFAULT_WORKBOOK, DEFAULT_SHEET)
    }
}

impl WorkbookClaimSource {
    /// Creates a source for `sheet` in the workbook at `path`
    ///
    /// # Arguments
    ///
    /// * `path` - Path to an `.xlsx`, `.xlsm`, `.xls` or `.ods` file
    /// * `sheet` - Name of the sheet containing the claim rows
    pub fn new(path: impl Into<PathBuf>, sheet: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet: sheet.into(),
            schema: ClaimSchema::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    fn read(&self) -> Result<ClaimSet, ClaimError> {
        let started = Instant::now();

        let range = {
            let mut workbook = open_workbook_auto(&self.path).map_err(|source| SheetError::Open {
                path: self.path.clone(),
                source,
            })?;

            let available = workbook.sheet_names();
            if !available.iter().any(|name| name == &self.sheet) {
                return Err(SheetError::SheetNotFound {
                    path: self.path.clone(),
                    sheet: self.sheet.clone(),
                    available,
                }
                .into());
            }

            workbook
                .worksheet_range(&self.sheet)
                .map_err(|source| SheetError::Read {
                    sheet: self.sheet.clone(),
                    source,
                })?
            // workbook handle dropped here
        };

        debug!(
            sheet = %self.sheet,
            height = range.height(),
            width = range.width(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Sheet read"
        );

        let claims = claim_set_from_range(&range, &self.schema)?;

        info!(
            path = %self.path.display(),
            sheet = %self.sheet,
            rows = claims.len(),
            "Workbook loaded"
        );

        Ok(claims)
    }
}

impl ClaimSource for WorkbookClaimSource {
    fn describe(&self) -> String {
        format!("{}#{}", self.path.display(), self.sheet)
    }

    fn load(&self) -> Result<ClaimSet, ClaimError> {
        self.read().map_err(|err| {
            warn!(source = %self.describe(), error = %err, "Workbook load failed");
            err
        })
    }
}
