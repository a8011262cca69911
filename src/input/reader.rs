#![forbid(unsafe_code)]

//! CSV loading
//!
//! Every file is validated before any of them is opened. Each file's first
//! line is its header; every following record becomes a [`Row`] keyed by
//! those column names. Record widths may differ from the header:
//!
//! * missing trailing fields leave their columns out of the row
//! * surplus fields are joined with `,` under [`OVERFLOW_COLUMN`]

use crate::error::ReportError;
use crate::input::validate::validate_files;
use crate::types::{Dataset, OVERFLOW_COLUMN, Row};
use csv::{ReaderBuilder, StringRecord};

/// Read all files into one dataset, in the order the paths are given
///
/// # Errors
///
/// Validation failures from [`validate_files`] are returned before any file
/// is opened. Read and UTF-8 decoding failures are returned as
/// [`ReportError::Csv`] naming the offending file.
pub fn read_csv<S: AsRef<str>>(paths: &[S]) -> Result<Dataset, ReportError> {
    validate_files(paths)?;

    let mut dataset = Dataset::new();
    for path in paths {
        let rows = read_file(path.as_ref())?;
        log::debug!("read {} rows from {}", rows.len(), path.as_ref());
        dataset.extend_from(rows);
    }

    Ok(dataset)
}

fn read_file(path: &str) -> Result<Vec<Row>, ReportError> {
    let csv_error = |source| ReportError::Csv {
        path: path.to_string(),
        source,
    };

    // The reader owns the file handle and closes it when dropped
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        rows.push(record_to_row(&headers, &record));
    }

    Ok(rows)
}

fn record_to_row(headers: &StringRecord, record: &StringRecord) -> Row {
    let named = headers
        .iter()
        .zip(record.iter())
        .map(|(column, value)| (column.to_string(), value.to_string()));

    if record.len() <= headers.len() {
        return named.collect();
    }

    let overflow: Vec<&str> = record.iter().skip(headers.len()).collect();
    named
        .chain(std::iter::once((
            OVERFLOW_COLUMN.to_string(),
            overflow.join(","),
        )))
        .collect()
}
