use crate::cli::OutputFormat;
use crate::error::Result;
use crate::ui;
use exception::{DriverException, ErrorCategory, NativeError, Query};
use informix_dbal::InformixDriver;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ClassificationReport<'a> {
    code: &'a str,
    category: ErrorCategory,
    constraint_violation: bool,
    message: String,
    sql: Option<&'a str>,
}

impl<'a> From<&'a DriverException> for ClassificationReport<'a> {
    fn from(err: &'a DriverException) -> Self {
        Self {
            code: err.code(),
            category: err.category(),
            constraint_violation: err.category().is_constraint_violation(),
            message: err.to_string(),
            sql: err.query().map(|q| q.sql.as_str()),
        }
    }
}

pub fn execute(
    code: String,
    message: String,
    sql: Option<String>,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("Classifying code '{code}' with message '{message}'");
    }

    let driver = InformixDriver::new();
    let converted = driver.convert_exception(NativeError::new(code, message), sql.map(Query::new));
    let report = ClassificationReport::from(&converted);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            ui::section_header("Error Classification");
            ui::field("Code", if report.code.is_empty() { "(none)" } else { report.code });
            ui::field("Category", report.category.as_str());
            ui::field("Message", &report.message);
            if let Some(sql) = report.sql {
                ui::field("Query", sql);
            }
            if report.category == ErrorCategory::Generic {
                ui::warning_message("No specific category matched; the error stays generic");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_shape() {
        let err = InformixDriver::new().convert_exception(
            NativeError::new("-268", "Unique constraint (informix.u_name) violated."),
            Some(Query::new("INSERT INTO users (name) VALUES ('bob')")),
        );

        let json = serde_json::to_value(ClassificationReport::from(&err)).unwrap();

        assert_eq!(json["code"], "-268");
        assert_eq!(json["category"], "unique_constraint_violation");
        assert_eq!(json["constraint_violation"], true);
        assert_eq!(
            json["message"],
            "An exception occurred while executing a query: Unique constraint (informix.u_name) violated."
        );
        assert_eq!(json["sql"], "INSERT INTO users (name) VALUES ('bob')");
    }

    #[test]
    fn test_execute_never_fails() {
        assert!(execute(String::new(), String::new(), None, OutputFormat::Text, false).is_ok());
        assert!(execute("999999".into(), "something else".into(), None, OutputFormat::Json, true).is_ok());
    }
}
