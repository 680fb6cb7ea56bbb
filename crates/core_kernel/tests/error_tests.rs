//! Tests for core_kernel error types

use core_kernel::error::CoreError;

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration(String::from("sheet name must not be empty"));

    match error {
        CoreError::Configuration(msg) => assert_eq!(msg, "sheet name must not be empty"),
    }
}

#[test]
fn test_core_error_display() {
    let error = CoreError::configuration("refresh interval must be positive");
    let display = format!("{}", error);

    assert!(display.contains("Configuration error"));
    assert!(display.contains("refresh interval"));
}
