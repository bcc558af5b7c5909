use std::time::Duration;

use reqwest::Url;

use crate::args::{LoadArgs, PositiveUsize, default_endpoints};
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::parse_base_url;

use super::Endpoint;

/// Immutable settings for one run, validated before any worker starts.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub concurrency: PositiveUsize,
    pub duration: Duration,
    pub base_url: Url,
    pub endpoints: Vec<Endpoint>,
    pub request_timeout: Duration,
    pub max_jitter: Duration,
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Validates merged CLI/config arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the duration is zero or the base URL is missing,
    /// malformed, or not http(s). An empty endpoint list falls back to the
    /// built-in catalog.
    pub fn from_args(args: &LoadArgs) -> AppResult<Self> {
        if args.duration.is_zero() {
            return Err(AppError::validation(ValidationError::DurationZero));
        }
        if args.url.trim().is_empty() {
            return Err(AppError::validation(ValidationError::MissingUrl));
        }
        let base_url = parse_base_url(&args.url)?;
        let endpoints = if args.endpoints.is_empty() {
            default_endpoints()
        } else {
            args.endpoints.clone()
        };

        Ok(Self {
            concurrency: args.concurrency,
            duration: args.duration,
            base_url,
            endpoints,
            request_timeout: args.request_timeout,
            max_jitter: args.max_jitter,
            seed: args.seed,
        })
    }
}
