// Logs page
use super::{html_escape, placeholder};
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::LogBundle;

pub const STREAMS: [&str; 2] = ["syslog", "auth"];

pub fn render(logs: &LogBundle) -> Fragment {
    let mut fragment = Fragment::new(Page::Logs);
    for stream in STREAMS {
        let lines: String = logs
            .lines(stream)
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!(r#"<div class="log-line">{}</div>"#, html_escape(line)))
            .collect();
        fragment.push(
            format!("logs-{}", stream),
            if lines.is_empty() {
                placeholder("No logs available")
            } else {
                lines
            },
        );
    }
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renders_both_streams() {
        let logs: LogBundle = serde_json::from_value(json!({
            "syslog": ["Oct 15 kernel: <6> eth0 up", ""],
            "auth": []
        }))
        .unwrap();

        let fragment = render(&logs);
        let syslog = fragment.get("logs-syslog").unwrap();
        assert_eq!(syslog.matches("log-line").count(), 1);
        assert!(syslog.contains("&lt;6&gt;"));
        assert!(fragment.get("logs-auth").unwrap().contains("No logs available"));
    }
}
