//! Property-Based Test Generators
//!
//! Proptest strategies for claim rows. Amounts straddle the high-claim
//! threshold and statuses include values the paid filter never selects.

use domain_claims::{ClaimRecord, ClaimSet, PaidFilter};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::ClaimSetBuilder;

/// Paid statuses as they appear in real sheets, including noise
pub fn paid_status_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => Just(Some("YES".to_string())),
        4 => Just(Some("NO".to_string())),
        1 => Just(Some("yes".to_string())),
        1 => Just(Some("PENDING".to_string())),
        1 => Just(None),
    ]
}

/// Amounts in rupees with paise, from 0 to 1,00,000
pub fn amount_strategy() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![
        9 => (0i64..10_000_000i64).prop_map(|paise| Some(Decimal::new(paise, 2))),
        1 => Just(None),
    ]
}

/// Pay texts covering OPD, lowercase opd, embedded OPD and other categories
pub fn pay_text_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("OPD Consultation".to_string())),
        Just(Some("opd pharmacy".to_string())),
        Just(Some("OPDX".to_string())),
        Just(Some("Inpatient".to_string())),
        Just(Some("Surgery".to_string())),
        Just(Some("O.P.D".to_string())),
        "[a-zA-Z ]{0,12}".prop_map(Some),
        Just(None),
    ]
}

pub fn claim_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    (
        paid_status_strategy(),
        amount_strategy(),
        amount_strategy(),
        pay_text_strategy(),
    )
        .prop_map(|(status, claim, approved, text)| ClaimRecord::new(status, claim, approved, text))
}

pub fn claim_set_strategy() -> impl Strategy<Value = ClaimSet> {
    prop::collection::vec(claim_record_strategy(), 0..40).prop_map(|records| {
        let mut set = ClaimSetBuilder::new().build();
        set.records = records;
        set
    })
}

pub fn paid_filter_strategy() -> impl Strategy<Value = PaidFilter> {
    prop_oneof![
        Just(PaidFilter::All),
        Just(PaidFilter::Yes),
        Just(PaidFilter::No),
    ]
}
