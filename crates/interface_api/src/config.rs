//! Dashboard configuration

use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use core_kernel::{CoreError, Currency};
use infra_sheet::{DEFAULT_SHEET, DEFAULT_WORKBOOK};
use serde::Deserialize;

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Workbook holding the claim rows
    pub data_path: PathBuf,
    /// Sheet within the workbook
    pub sheet_name: String,
    /// Seconds between automatic page refreshes
    pub refresh_interval_secs: u64,
    /// Currency used when displaying amounts
    pub currency: Currency,
    /// Log level
    pub log_level: String,
    /// Log output: `pretty` or `json`
    pub log_format: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
            data_path: PathBuf::from(DEFAULT_WORKBOOK),
            sheet_name: DEFAULT_SHEET.to_string(),
            refresh_interval_secs: 120,
            currency: Currency::INR,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Loads configuration from `DASHBOARD_*` environment variables,
    /// falling back to the defaults for anything unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix("DASHBOARD"))
    }

    /// Loads configuration from an explicit environment source
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("data_path", defaults.data_path.to_string_lossy().into_owned())?
            .set_default("sheet_name", defaults.sheet_name)?
            .set_default("refresh_interval_secs", defaults.refresh_interval_secs as i64)?
            .set_default("currency", defaults.currency.code())?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", defaults.log_format)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Rejects settings the dashboard cannot run with
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.refresh_interval_secs == 0 {
            return Err(CoreError::configuration("refresh interval must be at least one second"));
        }
        if self.sheet_name.trim().is_empty() {
            return Err(CoreError::configuration("sheet name must not be empty"));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(CoreError::configuration("data path must not be empty"));
        }
        if !matches!(self.log_format.as_str(), "pretty" | "json") {
            return Err(CoreError::configuration(format!(
                "unknown log format {:?}, expected pretty or json",
                self.log_format
            )));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
