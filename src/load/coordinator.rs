use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{build_client, resolve_targets};
use crate::metrics::{Report, RunInfo};
use crate::shutdown::ShutdownSender;

use super::worker::{Worker, WorkerExit};
use super::{EndpointSelector, RunConfig, SampleRecorder};

/// Runs the load test described by `config` and returns its report.
///
/// Every worker shares one client, one recorder and one deadline computed
/// once at start. The call returns after all workers have stopped, which is
/// the deadline plus at most one in-flight request per worker (bounded by
/// the request timeout). A message on `shutdown_tx` stops workers early.
///
/// # Errors
///
/// Returns an error before any worker starts when the catalog is empty, an
/// endpoint cannot be resolved, the deadline overflows, or the HTTP client
/// cannot be built; and after the run when a worker task panicked.
pub async fn run_load(config: &RunConfig, shutdown_tx: &ShutdownSender) -> AppResult<Report> {
    let targets = resolve_targets(&config.base_url, &config.endpoints)?;
    let selector = EndpointSelector::new(targets)?;
    let client = build_client(config.request_timeout)?;
    let recorder = Arc::new(SampleRecorder::new());

    let started_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let run_start = Instant::now();
    let deadline = run_start
        .checked_add(config.duration)
        .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;

    let concurrency = config.concurrency.get();
    info!(
        concurrency,
        duration_ms = u64::try_from(config.duration.as_millis()).unwrap_or(u64::MAX),
        endpoints = selector.len(),
        base = %config.base_url,
        "Starting workers."
    );

    let mut handles = Vec::with_capacity(concurrency);
    for id in 0..concurrency {
        let worker = Worker {
            id,
            client: client.clone(),
            selector: selector.clone(),
            recorder: Arc::clone(&recorder),
            deadline,
            max_jitter: config.max_jitter,
            rng: worker_rng(config.seed, id),
            shutdown_rx: shutdown_tx.subscribe(),
        };
        handles.push(tokio::spawn(worker.run()));
    }

    let mut interrupted = false;
    for handle in handles {
        if handle.await? == WorkerExit::Shutdown {
            interrupted = true;
        }
    }

    let elapsed = run_start.elapsed();
    let samples = recorder.snapshot();
    debug!(
        total = samples.total,
        errors = samples.errors,
        transport_errors = samples.transport_errors,
        "All workers joined."
    );

    let info = RunInfo {
        started_at,
        base_url: config.base_url.to_string(),
        concurrency,
        duration: config.duration,
        elapsed,
        interrupted,
    };
    Ok(Report::new(info, &samples))
}

/// Worker `id` of a seeded run draws from `seed + id`; unseeded runs use OS
/// entropy.
pub(crate) fn worker_rng(seed: Option<u64>, id: usize) -> StdRng {
    match seed {
        Some(seed) => {
            let offset = u64::try_from(id).unwrap_or(u64::MAX);
            StdRng::seed_from_u64(seed.wrapping_add(offset))
        }
        None => StdRng::from_entropy(),
    }
}
