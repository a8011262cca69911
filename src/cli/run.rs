#![forbid(unsafe_code)]

//! Top-level orchestration: read the files, resolve the report, print it
//!
//! Failures caused by the operator's input are printed to stdout after an
//! `Ошибка:` label and the process still exits successfully. Anything else
//! (unreadable files, rows the report cannot render, broken output) goes
//! to stderr with a non-zero exit code.

use crate::cli::args::Options;
use crate::error::ReportError;
use crate::input::read_csv;
use crate::report::get_report;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

const ERROR_LABEL: &str = "Ошибка:";

/// Run one invocation against stdout and return the process exit code
pub fn run(options: &Options) -> i32 {
    let result = execute(options, &mut io::stdout().lock());

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) if e.is_expected() => {
            log::debug!("input error: {:?}", e);
            let stdout = StandardStream::stdout(color_choice(io::stdout().is_terminal()));
            match print_error(stdout, &e) {
                Ok(()) => EXIT_SUCCESS,
                Err(_) => EXIT_ERROR,
            }
        }
        Err(e) => {
            log::debug!("fatal error: {:?}", e);
            let stderr = StandardStream::stderr(color_choice(io::stderr().is_terminal()));
            // Nothing left to report to if stderr is gone too
            let _ = print_error(stderr, &e);
            EXIT_ERROR
        }
    }
}

/// Read the requested files and write the requested report to `out`
///
/// Without `--files` nothing happens. With files but no `--report` the files
/// are still validated and parsed, but nothing is written. The report is
/// rendered without calling its `validate_data` first.
pub fn execute(options: &Options, out: &mut dyn Write) -> Result<(), ReportError> {
    let Some(files) = options.files.as_deref() else {
        log::debug!("no input files given");
        return Ok(());
    };

    let data = read_csv(files)?;
    log::debug!("loaded {} rows from {} files", data.len(), files.len());

    if let Some(report_type) = options.report.as_deref() {
        let report = get_report(report_type)?;
        log::debug!("rendering {} report", report.name());
        report.generate_report(&data, out)?;
        out.flush()?;
    }

    Ok(())
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn print_error(mut stream: StandardStream, err: &ReportError) -> io::Result<()> {
    stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stream, "{}", ERROR_LABEL)?;
    stream.reset()?;
    writeln!(stream, " {}", err)?;
    stream.flush()
}
