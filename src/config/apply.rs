use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{LoadArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use crate::load::Endpoint;

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments. Values given explicitly
/// on the command line win over the file.
///
/// # Errors
///
/// Returns an error when a config value is out of range or an endpoint is
/// malformed.
pub fn apply_config(
    args: &mut LoadArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.as_ref()
    {
        url.clone_into(&mut args.url);
    }

    if !is_cli(matches, "concurrency")
        && let Some(concurrency) = config.concurrency
    {
        args.concurrency = PositiveUsize::try_from(concurrency).map_err(|source| {
            AppError::config(ConfigError::FieldMustBePositive {
                field: "concurrency",
                source,
            })
        })?;
    }

    if !is_cli(matches, "duration")
        && let Some(duration) = config.duration.as_ref()
    {
        args.duration = config_duration(duration, "duration")?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = config_duration(timeout, "timeout")?;
    }

    if !is_cli(matches, "max_jitter")
        && let Some(max_jitter) = config.max_jitter.as_ref()
    {
        args.max_jitter = max_jitter.to_duration_or_zero().map_err(|source| {
            AppError::config(ConfigError::InvalidDuration {
                field: "max_jitter",
                source,
            })
        })?;
    }

    if !is_cli(matches, "seed")
        && let Some(seed) = config.seed
    {
        args.seed = Some(seed);
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_cli(matches, "endpoints")
        && let Some(endpoints) = config.endpoints.as_ref()
    {
        if endpoints.is_empty() {
            return Err(AppError::validation(ValidationError::EmptyEndpointCatalog));
        }
        let mut parsed = Vec::with_capacity(endpoints.len());
        for (index, endpoint) in endpoints.iter().enumerate() {
            let endpoint = Endpoint::try_new(endpoint.method, &endpoint.path)
                .map_err(|source| AppError::config(ConfigError::InvalidEndpoint { index, source }))?;
            parsed.push(endpoint);
        }
        args.endpoints = parsed;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn config_duration(value: &DurationValue, field: &'static str) -> AppResult<std::time::Duration> {
    value
        .to_duration()
        .map_err(|source| AppError::config(ConfigError::InvalidDuration { field, source }))
}
