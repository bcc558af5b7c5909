use std::time::Duration;

use reqwest::Client;
use tracing::error;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::HttpError;

/// Builds the client shared by every worker of a run.
///
/// The idle pool is unbounded per host so each worker can keep its own
/// connection alive; `request_timeout` covers the whole exchange including
/// the body transfer.
///
/// # Errors
///
/// Returns an error when the TLS backend or client cannot be initialised.
pub fn build_client(request_timeout: Duration) -> Result<Client, HttpError> {
    Client::builder()
        .timeout(request_timeout)
        .connect_timeout(request_timeout)
        .pool_max_idle_per_host(usize::MAX)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|source| {
            error!("Failed to build HTTP client: {}", source);
            HttpError::BuildClientFailed { source }
        })
}
