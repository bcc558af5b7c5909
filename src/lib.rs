//! Core library for the `loadburst` CLI.
//!
//! A fixed catalog of endpoints is hammered by N concurrent workers until a
//! single shared deadline. Each worker picks an endpoint uniformly at random,
//! times the full request including the body, records the outcome, then
//! pauses a random jitter before the next request. After every worker has
//! stopped, the samples are reduced to a summary with linear-interpolated
//! percentiles.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod load;
mod logger;
pub mod metrics;
pub mod shutdown;
