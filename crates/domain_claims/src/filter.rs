//! Row filters selected from the dashboard sidebar

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;
use crate::record::ClaimRecord;

/// Claims strictly above this amount count as high claims
pub const HIGH_CLAIM_THRESHOLD: Decimal = dec!(50000);

/// Paid-status selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaidFilter {
    #[default]
    All,
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

impl PaidFilter {
    pub const OPTIONS: [PaidFilter; 3] = [PaidFilter::All, PaidFilter::Yes, PaidFilter::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaidFilter::All => "All",
            PaidFilter::Yes => "YES",
            PaidFilter::No => "NO",
        }
    }

    /// `All` accepts every record; otherwise the status must match exactly
    pub fn matches(&self, record: &ClaimRecord) -> bool {
        match self {
            PaidFilter::All => true,
            status => record.paid_status.as_deref() == Some(status.as_str()),
        }
    }
}

impl fmt::Display for PaidFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaidFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(PaidFilter::All),
            "YES" => Ok(PaidFilter::Yes),
            "NO" => Ok(PaidFilter::No),
            other => Err(FilterError::UnknownPaidStatus(other.to_string())),
        }
    }
}

/// The full set of active filters; conjunctive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimFilter {
    pub paid: PaidFilter,
    pub high_claims_only: bool,
}

impl ClaimFilter {
    pub fn new(paid: PaidFilter, high_claims_only: bool) -> Self {
        Self { paid, high_claims_only }
    }

    /// A record with no claim amount is never a high claim
    pub fn is_high_claim(record: &ClaimRecord) -> bool {
        record
            .claim_amount
            .map_or(false, |amount| amount > HIGH_CLAIM_THRESHOLD)
    }

    pub fn matches(&self, record: &ClaimRecord) -> bool {
        self.paid.matches(record) && (!self.high_claims_only || Self::is_high_claim(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: Option<&str>, amount: Option<Decimal>) -> ClaimRecord {
        ClaimRecord::new(status.map(String::from), amount, None, None)
    }

    #[test]
    fn test_paid_filter_parse() {
        assert_eq!("All".parse::<PaidFilter>(), Ok(PaidFilter::All));
        assert_eq!("YES".parse::<PaidFilter>(), Ok(PaidFilter::Yes));
        assert_eq!("NO".parse::<PaidFilter>(), Ok(PaidFilter::No));
        assert_eq!(
            "yes".parse::<PaidFilter>(),
            Err(FilterError::UnknownPaidStatus("yes".to_string()))
        );
    }

    #[test]
    fn test_paid_filter_is_exact_match() {
        assert!(PaidFilter::Yes.matches(&record(Some("YES"), None)));
        assert!(!PaidFilter::Yes.matches(&record(Some("Yes"), None)));
        assert!(!PaidFilter::Yes.matches(&record(Some("YES "), None)));
        assert!(!PaidFilter::No.matches(&record(None, None)));
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(PaidFilter::All.matches(&record(None, None)));
        assert!(PaidFilter::All.matches(&record(Some("maybe"), None)));
    }

    #[test]
    fn test_high_claim_threshold_is_strict() {
        assert!(!ClaimFilter::is_high_claim(&record(None, Some(dec!(50000)))));
        assert!(ClaimFilter::is_high_claim(&record(None, Some(dec!(50000.01)))));
        assert!(!ClaimFilter::is_high_claim(&record(None, None)));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let filter = ClaimFilter::new(PaidFilter::Yes, true);
        assert!(filter.matches(&record(Some("YES"), Some(dec!(60000)))));
        assert!(!filter.matches(&record(Some("YES"), Some(dec!(100)))));
        assert!(!filter.matches(&record(Some("NO"), Some(dec!(60000)))));
    }

    #[test]
    fn test_paid_filter_serde_labels() {
        let json = serde_json::to_string(&PaidFilter::Yes).unwrap();
        assert_eq!(json, "\"YES\"");
        let parsed: PaidFilter = serde_json::from_str("\"All\"").unwrap();
        assert_eq!(parsed, PaidFilter::All);
    }
}
