//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::LoadArgs;
pub use types::{HttpMethod, OutputFormat, PositiveUsize};

pub(crate) use defaults::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, default_endpoints};
pub(crate) use parsers::{parse_duration_arg, parse_duration_or_zero};
