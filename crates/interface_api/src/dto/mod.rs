//! Request and response bodies

pub mod dashboard;
