//! The claims pipeline

use serde::Serialize;
use tracing::{debug, info};

use crate::aggregate::{TypeAggregate, TypeCounts, TypeSums};
use crate::error::ClaimError;
use crate::filter::{ClaimFilter, PaidFilter};
use crate::ports::ClaimSource;
use crate::record::ClaimSet;

/// Everything the presentation layer needs for one rendering cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    /// Records passing every active filter, in sheet order
    pub claims: ClaimSet,
    pub type_counts: TypeCounts,
    pub type_sums: TypeSums,
}

impl PipelineOutput {
    pub fn aggregates(&self) -> Vec<TypeAggregate> {
        TypeAggregate::combine(&self.type_counts, &self.type_sums)
    }
}

/// Load, filter and aggregate in one synchronous pass
pub struct ClaimsPipeline<S> {
    source: S,
}

impl<S: ClaimSource> ClaimsPipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs one cycle: load, paid filter, high-claims filter, classify,
    /// count, sum.
    ///
    /// # Errors
    ///
    /// Returns whatever the source reports while loading; the stages after
    /// loading cannot fail.
    pub fn run(&self, filter: &ClaimFilter) -> Result<PipelineOutput, ClaimError> {
        let loaded = self.source.load()?;
        info!(source = %self.source.describe(), rows = loaded.len(), "Claims loaded");

        Ok(process(loaded, filter))
    }
}

/// The pure part of the cycle, applied to an already loaded set
pub fn process(loaded: ClaimSet, filter: &ClaimFilter) -> PipelineOutput {
    let paid = filter.paid;
    let after_paid = loaded.retain(|r| paid.matches(r));
    debug!(paid = %paid, rows = after_paid.len(), "Paid status filter applied");

    let claims = if filter.high_claims_only {
        let high = after_paid.retain(ClaimFilter::is_high_claim);
        debug!(rows = high.len(), "High claims filter applied");
        high
    } else {
        after_paid
    };

    let type_counts = TypeCounts::from_claims(&claims);
    let type_sums = TypeSums::from_claims(&claims);

    info!(
        paid = %filter.paid,
        high_claims_only = filter.high_claims_only,
        rows = claims.len(),
        types = type_counts.len(),
        "Claims aggregated"
    );

    PipelineOutput {
        claims,
        type_counts,
        type_sums,
    }
}

/// Convenience wrapper taking the raw sidebar values
///
/// # Errors
///
/// Fails with [`ClaimError::Filter`] when `paid_filter` is not one of
/// `All`, `YES`, `NO`, and with the source's error when loading fails.
pub fn run<S: ClaimSource>(
    source: S,
    paid_filter: &str,
    high_claims_only: bool,
) -> Result<PipelineOutput, ClaimError> {
    let paid: PaidFilter = paid_filter.parse()?;
    ClaimsPipeline::new(source).run(&ClaimFilter::new(paid, high_claims_only))
}
