//! Load-test latency reports: per-kind statistics appended to a text
//! summary, plus a log-scale histogram image per kind.

pub mod chart;
pub mod cli;
pub mod histogram;
pub mod input;
pub mod metrics;
pub mod model;
pub mod report;
mod text_summary;
