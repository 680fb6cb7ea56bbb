//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims dashboard test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claim rows and sheets
//! - `builders`: Builder patterns for claim records
//! - `sources`: In-memory and failing `ClaimSource` adapters
//! - `assertions`: Invariant checks for pipeline output
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod sources;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use sources::*;
pub use assertions::*;
pub use generators::*;
