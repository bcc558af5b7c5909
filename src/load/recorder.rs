use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

/// Aggregated outcomes of a run.
///
/// `total` counts attempts that got an HTTP response. `errors` counts
/// responses with status >= 400 plus transport failures, and
/// `transport_errors` is the transport-failure part of `errors`. A transport
/// failure never adds to `total` or `latencies_ms`, so `errors` may exceed
/// `total`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SampleSet {
    pub total: u64,
    pub errors: u64,
    pub transport_errors: u64,
    pub latencies_ms: Vec<f64>,
}

/// Concurrency-safe accumulator shared by every worker of a run.
#[derive(Debug, Default)]
pub struct SampleRecorder {
    total: AtomicU64,
    errors: AtomicU64,
    transport_errors: AtomicU64,
    latencies_ms: Mutex<Vec<f64>>,
}

impl SampleRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a request that produced a response. `is_error` marks an
    /// HTTP status >= 400.
    pub fn record_success(&self, latency_ms: f64, is_error: bool) {
        self.latencies_ms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(latency_ms);
        self.total.fetch_add(1, Ordering::Relaxed);
        if is_error {
            self.errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records a transport-level failure (connect, DNS, timeout, reset).
    pub fn record_failure(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        self.transport_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Copies the current state. Intended to be called once every worker
    /// has been joined.
    #[must_use]
    pub fn snapshot(&self) -> SampleSet {
        let latencies_ms = self
            .latencies_ms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        SampleSet {
            total: self.total.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            transport_errors: self.transport_errors.load(Ordering::Relaxed),
            latencies_ms,
        }
    }
}
