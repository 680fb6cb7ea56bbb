//! Claim source port
//!
//! The pipeline only knows how to ask for a [`ClaimSet`]; where the rows come
//! from is decided by the adapter handed to it.
//!
//! ```rust,ignore
//! // In infra_sheet - spreadsheet adapter
//! impl ClaimSource for WorkbookClaimSource { ... }
//!
//! // In test_utils - in-memory adapter
//! impl ClaimSource for InMemoryClaimSource { ... }
//! ```

use crate::error::ClaimError;
use crate::record::ClaimSet;

/// Loads the full, unfiltered claim set.
///
/// Every call must re-read the underlying data and release whatever it
/// opened before returning.
pub trait ClaimSource: Send + Sync {
    /// Human-readable description for logs and error messages
    fn describe(&self) -> String;

    fn load(&self) -> Result<ClaimSet, ClaimError>;
}

impl<T: ClaimSource + ?Sized> ClaimSource for std::sync::Arc<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn load(&self) -> Result<ClaimSet, ClaimError> {
        (**self).load()
    }
}
