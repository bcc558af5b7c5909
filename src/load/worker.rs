use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use reqwest::Client;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, trace, warn};

use crate::http::{RequestTarget, execute_request};
use crate::shutdown::{ShutdownReceiver, stop_pending, stop_requested};

use super::{EndpointSelector, SampleRecorder};

const MILLIS_PER_SEC: f64 = 1_000.0;

/// Why a worker left its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    Deadline,
    Shutdown,
}

pub(crate) struct Worker<R> {
    pub(crate) id: usize,
    pub(crate) client: Client,
    pub(crate) selector: EndpointSelector<RequestTarget>,
    pub(crate) recorder: Arc<SampleRecorder>,
    pub(crate) deadline: Instant,
    pub(crate) max_jitter: Duration,
    pub(crate) rng: R,
    pub(crate) shutdown_rx: ShutdownReceiver,
}

impl<R> Worker<R>
where
    R: Rng + Send,
{
    /// Issues requests until the shared deadline passes or a stop is
    /// requested. A request already in flight always completes and is
    /// recorded; only the pause between requests is cut short by a stop.
    pub(crate) async fn run(mut self) -> WorkerExit {
        let mut issued: u64 = 0;
        loop {
            if Instant::now() >= self.deadline {
                debug!(worker = self.id, issued, "Deadline reached.");
                return WorkerExit::Deadline;
            }
            if stop_pending(&mut self.shutdown_rx) {
                debug!(worker = self.id, issued, "Stop requested.");
                return WorkerExit::Shutdown;
            }
            let Some(target) = self.selector.select(&mut self.rng) else {
                warn!(worker = self.id, "Endpoint catalog is empty, stopping worker.");
                return WorkerExit::Deadline;
            };

            let started = Instant::now();
            match execute_request(&self.client, target).await {
                Ok(outcome) => {
                    let latency_ms = duration_ms(started.elapsed());
                    trace!(
                        worker = self.id,
                        endpoint = %target.endpoint,
                        status = outcome.status,
                        bytes = outcome.response_bytes,
                        latency_ms,
                        "Request completed."
                    );
                    self.recorder.record_success(latency_ms, outcome.is_error());
                }
                Err(err) => {
                    debug!(
                        worker = self.id,
                        endpoint = %target.endpoint,
                        "Request failed: {}",
                        err
                    );
                    self.recorder.record_failure();
                }
            }
            issued = issued.saturating_add(1);

            let pause = jitter(&mut self.rng, self.max_jitter);
            let wake_at = Instant::now()
                .checked_add(pause)
                .map_or(self.deadline, |at| at.min(self.deadline));
            tokio::select! {
                () = sleep_until(wake_at) => {}
                () = stop_requested(&mut self.shutdown_rx) => {
                    debug!(worker = self.id, issued, "Stop requested.");
                    return WorkerExit::Shutdown;
                }
            }
        }
    }
}

/// Uniform draw from `[0, max_jitter)`.
pub(crate) fn jitter<R>(rng: &mut R, max_jitter: Duration) -> Duration
where
    R: Rng + ?Sized,
{
    if max_jitter.is_zero() {
        return Duration::ZERO;
    }
    rng.gen_range(Duration::ZERO..max_jitter)
}

#[expect(
    clippy::float_arithmetic,
    reason = "latency samples are fractional milliseconds"
)]
fn duration_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * MILLIS_PER_SEC
}
