//! Custom Test Assertions
//!
//! Checks for the invariants every pipeline output must satisfy, with
//! messages that point at the offending record or type.

use std::collections::BTreeSet;

use domain_claims::{ClaimFilter, ClaimSet, ClaimType, PipelineOutput};
use rust_decimal::Decimal;

/// Asserts the filtered set is an order-preserving subsequence of `loaded`
/// and that every kept record satisfies `filter`
pub fn assert_filtered_subset(loaded: &ClaimSet, output: &PipelineOutput, filter: &ClaimFilter) {
    let mut remaining = loaded.iter();
    for (i, record) in output.claims.iter().enumerate() {
        assert!(
            filter.matches(record),
            "Record {} does not satisfy {:?}: {:?}",
            i,
            filter,
            record
        );
        assert!(
            remaining.any(|candidate| candidate == record),
            "Record {} is not in the loaded set (or is out of order): {:?}",
            i,
            record
        );
    }

    let expected = loaded.iter().filter(|r| filter.matches(r)).count();
    assert_eq!(
        output.claims.len(),
        expected,
        "Filtered set has {} rows, expected {}",
        output.claims.len(),
        expected
    );
}

/// Asserts counts and sums are keyed by exactly the types present in the
/// filtered set and agree with it
pub fn assert_aggregates_consistent(output: &PipelineOutput) {
    let present: BTreeSet<ClaimType> = output.claims.iter().map(|r| r.claim_type()).collect();
    let counted: BTreeSet<ClaimType> = output.type_counts.iter().map(|(t, _)| t).collect();
    let summed: BTreeSet<ClaimType> = output.type_sums.iter().map(|(t, _)| t).collect();

    assert_eq!(counted, present, "Count keys differ from types present");
    assert_eq!(summed, present, "Sum keys differ from types present");
    assert_eq!(
        output.type_counts.total(),
        output.claims.len(),
        "Counts do not add up to the filtered row count"
    );

    for (claim_type, count) in output.type_counts.iter() {
        assert!(count > 0, "Zero count for {}", claim_type);
    }

    for (claim_type, totals) in output.type_sums.iter() {
        let of_type = || output.claims.iter().filter(move |r| r.claim_type() == claim_type);
        let claimed: Decimal = of_type().filter_map(|r| r.claim_amount).sum();
        let approved: Decimal = of_type().filter_map(|r| r.approved_amount).sum();

        assert_eq!(totals.claim_amount, claimed, "Claim total mismatch for {}", claim_type);
        assert_eq!(totals.approved_amount, approved, "Approved total mismatch for {}", claim_type);
    }
}
