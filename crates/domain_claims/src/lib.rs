//! Claims Pipeline Domain
//!
//! This crate implements the load, filter and aggregate pipeline behind the
//! medical claims dashboard.
//!
//! # Rendering cycle
//!
//! ```text
//! ClaimSource::load -> paid filter -> high-claims filter -> classify -> counts -> sums
//! ```
//!
//! Every stage works on the output of the previous one; aggregates are only
//! ever derived from the filtered set.

pub mod record;
pub mod schema;
pub mod filter;
pub mod aggregate;
pub mod pipeline;
pub mod ports;
pub mod error;

pub use record::{CellValue, ClaimRecord, ClaimSet, ClaimType};
pub use schema::{ClaimSchema, ColumnIndex};
pub use filter::{ClaimFilter, PaidFilter, HIGH_CLAIM_THRESHOLD};
pub use aggregate::{AmountTotals, TypeAggregate, TypeCounts, TypeSums};
pub use pipeline::{process, run, ClaimsPipeline, PipelineOutput};
pub use ports::ClaimSource;
pub use error::{ClaimError, FilterError, SchemaError};
