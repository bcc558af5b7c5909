use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid endpoint '{value}'. Expected 'METHOD /path'.")]
    InvalidEndpointFormat { value: String },
    #[error("Invalid HTTP method '{value}'. Use GET, POST, PUT, PATCH, DELETE, or HEAD.")]
    InvalidHttpMethod { value: String },
    #[error("Endpoint path '{value}' must start with '/'.")]
    EndpointPathNotAbsolute { value: String },
    #[error("Endpoint catalog must contain at least one endpoint.")]
    EmptyEndpointCatalog,
    #[error("Missing base URL (set --url or provide in config).")]
    MissingUrl,
}
