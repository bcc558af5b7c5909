use futures_util::StreamExt;
use reqwest::Client;

use super::RequestTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOutcome {
    pub status: u16,
    pub response_bytes: u64,
}

impl RequestOutcome {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// Sends one request and drains the body so that transfer time is part of
/// the measured latency.
///
/// # Errors
///
/// Returns the transport error when the request cannot be sent or the body
/// cannot be read to the end (connect failure, DNS, timeout, reset).
pub async fn execute_request(
    client: &Client,
    target: &RequestTarget,
) -> Result<RequestOutcome, reqwest::Error> {
    let response = client
        .request(target.method.clone(), target.url.clone())
        .send()
        .await?;
    let status = response.status().as_u16();
    let response_bytes = drain_response_body(response).await?;
    Ok(RequestOutcome {
        status,
        response_bytes,
    })
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
