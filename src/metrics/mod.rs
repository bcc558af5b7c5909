//! Percentile estimation and run reports.
mod percentile;
mod report;


pub use percentile::{mean, percentile, percentile_of_sorted};
pub use report::{LatencyStats, Report, RunInfo, print_report};
