//! Report kinds and their lookup table

pub mod performance;
pub mod registry;

pub use performance::PerformanceReport;
pub use registry::{available_reports, get_report};

use crate::error::ReportError;
use crate::types::Dataset;
use std::io::Write;

/// A report that can check and render a dataset
///
/// `generate_report` does not require `validate_data` to have been called
/// first; a report must cope with, or reject, rows it cannot render.
pub trait Report: Sync {
    /// Name the report is registered under
    fn name(&self) -> &'static str;

    /// Check that the dataset has what this report needs
    fn validate_data(&self, data: &Dataset) -> Result<(), ReportError>;

    /// Write the report for `data` to `out`
    fn generate_report(&self, data: &Dataset, out: &mut dyn Write) -> Result<(), ReportError>;
}
