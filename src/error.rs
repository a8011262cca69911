#![forbid(unsafe_code)]

//! Error types shared by the reader, the reports and the entry point

use std::io;
use thiserror::Error;

/// Everything that can go wrong between reading the files and printing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Файл не найден: {path}")]
    FileNotFound { path: String },

    #[error("Файл не является CSV: {path}")]
    InvalidFileType { path: String },

    #[error("Нет данных для отчета")]
    EmptyDataset,

    #[error("Неверная структура данных для отчета производительности")]
    InvalidSchema,

    #[error("Тип отчета \"{name}\" не поддерживается. Доступные типы: {available}")]
    UnsupportedReportType { name: String, available: String },

    #[error("В строке {row} отсутствует столбец \"{column}\"")]
    MissingColumn { row: usize, column: &'static str },

    #[error("Не удалось прочитать {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),
}

impl ReportError {
    /// Returns true for failures caused by the operator's input.
    ///
    /// These are printed to stdout and the process still exits successfully.
    /// Anything else is treated as fatal.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            ReportError::FileNotFound { .. }
                | ReportError::InvalidFileType { .. }
                | ReportError::EmptyDataset
                | ReportError::InvalidSchema
                | ReportError::UnsupportedReportType { .. }
        )
    }
}
