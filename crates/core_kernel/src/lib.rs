//! Core Kernel - Foundational value types for the claims dashboard
//!
//! This crate provides the building blocks shared by the other crates:
//! - Money types with precise decimal arithmetic and locale-aware display
//! - Common error types

pub mod money;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use error::CoreError;
