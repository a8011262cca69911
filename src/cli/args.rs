#![forbid(unsafe_code)]

//! Command-line argument definitions

use clap::Parser;

/// Options for one invocation
///
/// Values are taken as given; paths and report names are checked later.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "csv-reports", version, about = "Обработка файлов и отчетов", long_about = None)]
pub struct Options {
    /// Список файлов для обработки
    #[arg(long, num_args = 1.., value_name = "FILE")]
    pub files: Option<Vec<String>>,

    /// Тип отчета
    #[arg(long, value_name = "NAME")]
    pub report: Option<String>,
}
