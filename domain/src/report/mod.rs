//! Result reporting and aggregation
//!
//! The reporter derives a status from a raw execution result using
//! per-tool-family extraction rules; the aggregator reduces many processed
//! results into one response via the fixed severity ordering.

pub mod aggregate;
pub mod patterns;
pub mod process;
