#![forbid(unsafe_code)]

//! Fixed table of supported report kinds

use crate::error::ReportError;
use crate::report::{PerformanceReport, Report};

/// Registered reports, in registration order
static REPORTS: &[&dyn Report] = &[&PerformanceReport];

/// Names of all registered reports, in registration order
pub fn available_reports() -> Vec<&'static str> {
    REPORTS.iter().map(|report| report.name()).collect()
}

/// Look up a report by its exact (case-sensitive) name
///
/// # Errors
///
/// [`ReportError::UnsupportedReportType`] listing every registered name
/// when `report_type` is not one of them.
pub fn get_report(report_type: &str) -> Result<&'static dyn Report, ReportError> {
    REPORTS
        .iter()
        .copied()
        .find(|report| report.name() == report_type)
        .ok_or_else(|| ReportError::UnsupportedReportType {
            name: report_type.to_string(),
            available: format_names(&available_reports()),
        })
}

/// Render names as `['a', 'b']`
fn format_names(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("'{}'", name)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dataset;

    #[test]
    fn test_get_report_performance() {
        let report = get_report("performance").unwrap();

        assert_eq!(report.name(), PerformanceReport::NAME);
        // Both operations are available on the resolved report
        assert!(report.validate_data(&Dataset::new()).is_err());
        let mut out = Vec::new();
        assert!(report.generate_report(&Dataset::new(), &mut out).is_ok());
    }

    #[test]
    fn test_get_report_invalid_type() {
        let err = get_report("invalid").err().unwrap();

        assert!(matches!(
            &err,
            ReportError::UnsupportedReportType { name, .. } if name == "invalid"
        ));
        assert!(
            err.to_string()
                .starts_with("Тип отчета \"invalid\" не поддерживается")
        );
    }

    #[test]
    fn test_get_report_available_types_message() {
        let message = get_report("invalid").err().unwrap().to_string();

        assert!(message.contains("performance"));
        assert!(message.contains("Доступные типы: ['performance']"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(get_report("Performance").is_err());
        assert!(get_report("performance ").is_err());
        assert!(get_report("").is_err());
    }

    #[test]
    fn test_available_reports() {
        assert_eq!(available_reports(), vec!["performance"]);
    }

    #[test]
    fn test_format_names() {
        assert_eq!(format_names(&[]), "[]");
        assert_eq!(format_names(&["a", "b"]), "['a', 'b']");
    }
}
