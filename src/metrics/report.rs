use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::load::SampleSet;

use super::percentile::{mean, percentile_of_sorted};

/// Standard percentile labels.
const PERCENTILE_P50: f64 = 50.0;
const PERCENTILE_P90: f64 = 90.0;
const PERCENTILE_P99: f64 = 99.0;

/// Facts about the run itself, independent of the samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInfo {
    pub started_at: String,
    pub base_url: String,
    pub concurrency: usize,
    pub duration: Duration,
    pub elapsed: Duration,
    pub interrupted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatencyStats {
    pub samples: usize,
    pub avg_ms: f64,
    pub p50_ms: f64,
    pub p90_ms: f64,
    pub p99_ms: f64,
}

impl LatencyStats {
    /// `None` when there is nothing to summarize.
    #[must_use]
    pub fn from_samples(latencies_ms: &[f64]) -> Option<Self> {
        if latencies_ms.is_empty() {
            return None;
        }
        let mut sorted = latencies_ms.to_vec();
        sorted.sort_by(f64::total_cmp);
        Some(Self {
            samples: sorted.len(),
            avg_ms: mean(&sorted),
            p50_ms: percentile_of_sorted(&sorted, PERCENTILE_P50),
            p90_ms: percentile_of_sorted(&sorted, PERCENTILE_P90),
            p99_ms: percentile_of_sorted(&sorted, PERCENTILE_P99),
        })
    }
}

/// Final summary of a run.
///
/// `errors` includes `transport_errors`; transport failures are not part of
/// `total` and carry no latency sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub started_at: String,
    pub base_url: String,
    pub concurrency: usize,
    pub duration_ms: u64,
    pub elapsed_ms: u64,
    pub interrupted: bool,
    pub total: u64,
    pub errors: u64,
    pub transport_errors: u64,
    pub latency: Option<LatencyStats>,
}

impl Report {
    #[must_use]
    pub fn new(info: RunInfo, samples: &SampleSet) -> Self {
        Self {
            started_at: info.started_at,
            base_url: info.base_url,
            concurrency: info.concurrency,
            duration_ms: millis(info.duration),
            elapsed_ms: millis(info.elapsed),
            interrupted: info.interrupted,
            total: samples.total,
            errors: samples.errors,
            transport_errors: samples.transport_errors,
            latency: LatencyStats::from_samples(&samples.latencies_ms),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Load test summary ===")?;
        writeln!(f, "Total requests: {}", self.total)?;
        writeln!(
            f,
            "Errors: {} (transport: {})",
            self.errors, self.transport_errors
        )?;
        match self.latency {
            Some(latency) => write!(
                f,
                "Latency ms: avg={:.1} p50={:.1} p90={:.1} p99={:.1}",
                latency.avg_ms, latency.p50_ms, latency.p90_ms, latency.p99_ms
            )?,
            None => write!(f, "Latency ms: no samples")?,
        }
        if self.interrupted {
            write!(
                f,
                "\nInterrupted after {}ms of {}ms.",
                self.elapsed_ms, self.duration_ms
            )?;
        }
        Ok(())
    }
}

/// Writes the report to stdout in the requested format.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub fn print_report(report: &Report, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", report);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
