//! Claim sources for tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use domain_claims::{ClaimError, ClaimSet, ClaimSource, SchemaError};

/// Serves a fixed claim set and counts how often it was loaded
#[derive(Debug, Default)]
pub struct InMemoryClaimSource {
    claims: Mutex<ClaimSet>,
    loads: AtomicUsize,
}

impl InMemoryClaimSource {
    pub fn new(claims: ClaimSet) -> Self {
        Self {
            claims: Mutex::new(claims),
            loads: AtomicUsize::new(0),
        }
    }

    /// Replaces the data returned by the next load
    pub fn replace(&self, claims: ClaimSet) {
        *self.claims.lock().unwrap() = claims;
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ClaimSource for InMemoryClaimSource {
    fn describe(&self) -> String {
        "in-memory".to_string()
    }

    fn load(&self) -> Result<ClaimSet, ClaimError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.claims.lock().unwrap().clone())
    }
}

/// What a [`FailingClaimSource`] reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Unreadable,
    MissingColumns,
}

/// Always fails to load
#[derive(Debug)]
pub struct FailingClaimSource {
    failure: Failure,
}

impl FailingClaimSource {
    pub fn unreadable() -> Self {
        Self { failure: Failure::Unreadable }
    }

    pub fn missing_columns() -> Self {
        Self { failure: Failure::MissingColumns }
    }
}

impl ClaimSource for FailingClaimSource {
    fn describe(&self) -> String {
        format!("failing ({:?})", self.failure)
    }

    fn load(&self) -> Result<ClaimSet, ClaimError> {
        match self.failure {
            Failure::Unreadable => Err(ClaimError::data_load("fixture workbook is unreadable")),
            Failure::MissingColumns => Err(SchemaError::MissingColumns(vec![
                "Pay_Text".to_string(),
            ])
            .into()),
        }
    }
}

/// Sleeps inside `load` and records the peak number of concurrent loads
#[derive(Debug)]
pub struct SlowClaimSource {
    inner: InMemoryClaimSource,
    delay: Duration,
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl SlowClaimSource {
    pub fn new(claims: ClaimSet, delay: Duration) -> Self {
        Self {
            inner: InMemoryClaimSource::new(claims),
            delay,
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn load_count(&self) -> usize {
        self.inner.load_count()
    }
}

impl ClaimSource for SlowClaimSource {
    fn describe(&self) -> String {
        "slow in-memory".to_string()
    }

    fn load(&self) -> Result<ClaimSet, ClaimError> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        thread::sleep(self.delay);
        let result = self.inner.load();
        self.active.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
