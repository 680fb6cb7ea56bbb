//! Request handlers

pub mod charts;
pub mod dashboard;
pub mod health;
pub mod page;
