//! Per-type aggregates over a filtered claim set

use core_kernel::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::record::{ClaimSet, ClaimType};

/// Number of records per claim type.
///
/// Only types that occur in the set are present, so no count is ever zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCounts(BTreeMap<ClaimType, usize>);

impl TypeCounts {
    pub fn from_claims(claims: &ClaimSet) -> Self {
        let mut counts = BTreeMap::new();
        for record in claims.iter() {
            *counts.entry(record.claim_type()).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn get(&self, claim_type: ClaimType) -> usize {
        self.0.get(&claim_type).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (ClaimType, usize)> + '_ {
        self.0.iter().map(|(t, c)| (*t, *c))
    }

    /// Entries by descending count, ties in key order. Chart slices use this.
    pub fn ranked(&self) -> Vec<(ClaimType, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

/// Summed amounts for one claim type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountTotals {
    #[serde(with = "rust_decimal::serde::float")]
    pub claim_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub approved_amount: Decimal,
}

impl AmountTotals {
    pub fn claimed(&self, currency: Currency) -> Money {
        Money::new(self.claim_amount, currency)
    }

    pub fn approved(&self, currency: Currency) -> Money {
        Money::new(self.approved_amount, currency)
    }
}

/// Claimed and approved totals per claim type.
///
/// Missing amounts are skipped, so a type whose amounts are all blank still
/// appears with zero totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeSums(BTreeMap<ClaimType, AmountTotals>);

impl TypeSums {
    pub fn from_claims(claims: &ClaimSet) -> Self {
        let mut sums: BTreeMap<ClaimType, AmountTotals> = BTreeMap::new();
        for record in claims.iter() {
            let totals = sums.entry(record.claim_type()).or_default();
            totals.claim_amount += record.claim_amount.unwrap_or_default();
            totals.approved_amount += record.approved_amount.unwrap_or_default();
        }
        Self(sums)
    }

    pub fn get(&self, claim_type: ClaimType) -> Option<&AmountTotals> {
        self.0.get(&claim_type)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClaimType, &AmountTotals)> + '_ {
        self.0.iter().map(|(t, s)| (*t, s))
    }

    /// Totals across every type
    pub fn grand_total(&self) -> AmountTotals {
        self.0.values().fold(AmountTotals::default(), |acc, s| AmountTotals {
            claim_amount: acc.claim_amount + s.claim_amount,
            approved_amount: acc.approved_amount + s.approved_amount,
        })
    }
}

/// Count and totals for one claim type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAggregate {
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    pub count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub claim_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub approved_amount: Decimal,
}

impl TypeAggregate {
    /// Joins counts and sums; both are keyed by the same set of types
    pub fn combine(counts: &TypeCounts, sums: &TypeSums) -> Vec<TypeAggregate> {
        counts
            .iter()
            .map(|(claim_type, count)| {
                let totals = sums.get(claim_type).copied().unwrap_or_default();
                TypeAggregate {
                    claim_type,
                    count,
                    claim_amount: totals.claim_amount,
                    approved_amount: totals.approved_amount,
                }
            })
            .collect()
    }
}
