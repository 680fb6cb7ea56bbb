//! Claims pipeline errors

use thiserror::Error;

/// Errors that end a rendering cycle
#[derive(Debug, Error)]
pub enum ClaimError {
    /// The source could not be opened or parsed as tabular data
    #[error("Data load failed: {0}")]
    DataLoad(String),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),
}

impl ClaimError {
    pub fn data_load(message: impl Into<String>) -> Self {
        ClaimError::DataLoad(message.into())
    }
}

/// The sheet does not have the shape of a claims table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Invalid value {value:?} in column {column} at row {row}")]
    InvalidCell {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Sheet has no header row")]
    EmptySheet,
}

/// A filter value outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Unknown paid status filter {0:?}, expected one of All, YES, NO")]
    UnknownPaidStatus(String),
}
