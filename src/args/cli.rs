use clap::Parser;
use std::time::Duration;

use crate::load::Endpoint;

use super::defaults::DEFAULT_BASE_URL;
use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_duration_or_zero, parse_endpoint, parse_positive_usize,
};
use super::types::{OutputFormat, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load generator: N jittered workers hit a target until a shared deadline, then report latency percentiles.",
    next_help_heading = "Advanced Options"
)]
pub struct LoadArgs {
    /// Number of concurrent workers
    #[arg(
        long,
        short = 'c',
        default_value = "20",
        value_parser = parse_positive_usize,
        help_heading = "Common Options"
    )]
    pub concurrency: PositiveUsize,

    /// Duration of the run (seconds, or with a ms/s/m/h suffix)
    #[arg(
        long,
        short = 'd',
        default_value = "15",
        value_parser = parse_duration_arg,
        help_heading = "Common Options"
    )]
    pub duration: Duration,

    /// Base URL of the target service
    #[arg(long, short = 'u', default_value = DEFAULT_BASE_URL, help_heading = "Common Options")]
    pub url: String,

    /// Endpoint in 'METHOD /path' format (repeatable); defaults to the built-in catalog
    #[arg(long = "endpoint", short = 'e', value_parser = parse_endpoint, help_heading = "Common Options")]
    pub endpoints: Vec<Endpoint>,

    /// Per-request timeout, including body transfer
    #[arg(long = "timeout", default_value = "30s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Upper bound (exclusive) of the random pause between a worker's requests; 0 disables it
    #[arg(long = "max-jitter", default_value = "200ms", value_parser = parse_duration_or_zero)]
    pub max_jitter: Duration,

    /// Seed for endpoint selection and jitter; worker i uses seed + i
    #[arg(long)]
    pub seed: Option<u64>,

    /// Summary output format
    #[arg(long = "output-format", default_value = "text", value_enum)]
    pub output_format: OutputFormat,

    /// Path to a TOML or JSON config file (defaults to ./loadburst.toml or ./loadburst.json)
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by LOADBURST_LOG/RUST_LOG)
    #[arg(long, short = 'v', help_heading = "Common Options")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
