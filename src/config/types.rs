use std::time::Duration;

use serde::Deserialize;

use crate::args::{HttpMethod, OutputFormat, parse_duration_arg, parse_duration_or_zero};
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(alias = "base_url")]
    pub url: Option<String>,
    #[serde(alias = "workers")]
    pub concurrency: Option<usize>,
    pub duration: Option<DurationValue>,
    pub timeout: Option<DurationValue>,
    pub max_jitter: Option<DurationValue>,
    pub seed: Option<u64>,
    pub output_format: Option<OutputFormat>,
    pub endpoints: Option<Vec<EndpointConfig>>,
}

#[derive(Debug, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_method")]
    pub method: HttpMethod,
    pub path: String,
}

const fn default_method() -> HttpMethod {
    HttpMethod::Get
}

/// Either a whole number of seconds or a string with a unit (`250ms`, `2m`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }

    /// Like [`DurationValue::to_duration`], but zero is accepted.
    pub(crate) fn to_duration_or_zero(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_or_zero(text),
        }
    }
}
