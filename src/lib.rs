#![forbid(unsafe_code)]

//! csv-reports: tabular reports from CSV exports
//!
//! Reads one or more CSV files, checks that they exist and look like CSV,
//! and renders the rows through one of the registered report kinds.

pub mod cli;
pub mod error;
pub mod input;
pub mod report;
pub mod types;

pub use error::ReportError;
pub use types::{Dataset, Row};
