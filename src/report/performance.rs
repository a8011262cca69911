#![forbid(unsafe_code)]

//! Performance report: one line per employee position and its score

use crate::error::ReportError;
use crate::report::Report;
use crate::types::{Dataset, Row};
use std::io::Write;

pub const POSITION_COLUMN: &str = "position";
pub const PERFORMANCE_COLUMN: &str = "performance";

const INDEX_WIDTH: usize = 5;
const POSITION_WIDTH: usize = 20;
const PERFORMANCE_WIDTH: usize = 15;
const RULE_WIDTH: usize = 45;

const INDEX_LABEL: &str = "№";
const POSITION_LABEL: &str = "Должность";
const PERFORMANCE_LABEL: &str = "Эффективность";

/// Tabular report of `position` and `performance` columns
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceReport;

impl PerformanceReport {
    pub const NAME: &'static str = "performance";

    /// Format one table line with the fixed column widths
    fn line(index: &str, position: &str, performance: &str) -> String {
        format!(
            "{:<iw$} | {:<pw$} | {:<fw$}",
            index,
            position,
            performance,
            iw = INDEX_WIDTH,
            pw = POSITION_WIDTH,
            fw = PERFORMANCE_WIDTH,
        )
    }

    fn column<'a>(
        row: &'a Row,
        number: usize,
        column: &'static str,
    ) -> Result<&'a str, ReportError> {
        row.get(column)
            .ok_or(ReportError::MissingColumn { row: number, column })
    }
}

impl Report for PerformanceReport {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate_data(&self, data: &Dataset) -> Result<(), ReportError> {
        if data.is_empty() {
            return Err(ReportError::EmptyDataset);
        }

        let complete = data
            .iter()
            .all(|row| row.contains(PERFORMANCE_COLUMN) && row.contains(POSITION_COLUMN));
        if !complete {
            return Err(ReportError::InvalidSchema);
        }

        Ok(())
    }

    fn generate_report(&self, data: &Dataset, out: &mut dyn Write) -> Result<(), ReportError> {
        writeln!(
            out,
            "{}",
            Self::line(INDEX_LABEL, POSITION_LABEL, PERFORMANCE_LABEL)
        )?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

        for (i, row) in data.iter().enumerate() {
            let number = i + 1;
            let position = Self::column(row, number, POSITION_COLUMN)?;
            let performance = Self::column(row, number, PERFORMANCE_COLUMN)?;
            writeln!(
                out,
                "{}",
                Self::line(&number.to_string(), position, performance)
            )?;
        }

        Ok(())
    }
}
