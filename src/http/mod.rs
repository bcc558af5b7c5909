//! HTTP client construction, target resolution and request execution.
mod client;
mod execution;
mod target;


pub use client::build_client;
pub use execution::{RequestOutcome, execute_request};
pub use target::{RequestTarget, parse_base_url, resolve_target, resolve_targets};
