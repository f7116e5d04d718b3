// Log export - one log stream as a downloadable JSON document
use crate::domain::snapshot::LogBundle;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct LogExport {
    pub filename: String,
    pub body: String,
}

/// Build the `{kind}-logs-{date}.json` download. A stream the backend did not
/// send exports as an empty array.
pub fn export_logs(kind: &str, logs: &LogBundle, date: NaiveDate) -> anyhow::Result<LogExport> {
    let lines = logs.lines(kind);
    Ok(LogExport {
        filename: format!("{}-logs-{}.json", kind, date.format("%Y-%m-%d")),
        body: serde_json::to_string_pretty(&lines)?,
    })
}

/// Stream names are restricted so they are safe inside a filename.
pub fn is_valid_kind(kind: &str) -> bool {
    !kind.is_empty()
        && kind
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_export_logs() {
        let logs: LogBundle = serde_json::from_value(json!({
            "auth": ["sshd: Accepted publickey", "sudo: session opened"]
        }))
        .unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 2, 19).unwrap();

        let export = export_logs("auth", &logs, date).unwrap();

        assert_eq!(export.filename, "auth-logs-2026-02-19.json");
        let body: Vec<String> = serde_json::from_str(&export.body).unwrap();
        assert_eq!(body, vec!["sshd: Accepted publickey", "sudo: session opened"]);
        assert!(export.body.contains('\n'));
    }

    #[test]
    fn test_missing_stream_exports_empty() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let export = export_logs("kern", &LogBundle::default(), date).unwrap();
        assert_eq!(export.body, "[]");
    }

    #[test]
    fn test_kind_validation() {
        assert!(is_valid_kind("syslog"));
        assert!(is_valid_kind("kern_2"));
        assert!(!is_valid_kind(""));
        assert!(!is_valid_kind("../etc"));
    }
}
