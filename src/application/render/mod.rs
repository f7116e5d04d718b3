// Page renderers - pure functions from fetched data to HTML fragments
//
// Missing data never fails a render: absent values show `-`, `N/A` or the
// page's empty-list message. Every interpolated string is escaped.
pub mod docker;
pub mod hardware;
pub mod kubernetes;
pub mod logs;
pub mod network;
pub mod overview;
pub mod processes;
pub mod security;
pub mod server_status;
pub mod services;
pub mod storage;

use crate::application::widgets::WidgetState;
use crate::domain::format::{bar_width, format_percent, GaugeStatus};
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::Snapshot;

pub const DASH: &str = "-";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DATA: &str = "No data";

/// Render a snapshot-backed page. Pages with their own endpoints (logs,
/// kubernetes) return `None`; the dashboard service fetches and renders those.
pub fn render_snapshot_page(page: Page, snapshot: &Snapshot, widgets: &mut WidgetState) -> Option<Fragment> {
    let fragment = match page {
        Page::Overview => overview::render(snapshot, widgets),
        Page::ServerStatus => server_status::render(snapshot),
        Page::Hardware => hardware::render(snapshot),
        Page::Network => network::render(snapshot),
        Page::Services => services::render(snapshot),
        Page::Processes => processes::render(snapshot),
        Page::Security => security::render(snapshot),
        Page::Storage => storage::render(snapshot),
        Page::Docker => docker::render(snapshot),
        Page::Kubernetes | Page::Logs => return None,
    };
    Some(fragment)
}

pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escaped text, or the placeholder when absent or empty.
pub fn text_or(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => html_escape(v),
        _ => placeholder.to_string(),
    }
}

pub fn info_row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="info-row"><span class="label">{}</span><span class="value">{}</span></div>"#,
        html_escape(label),
        value
    )
}

/// Empty-state line shown in place of a list.
pub fn placeholder(message: &str) -> String {
    format!(r#"<div class="loading">{}</div>"#, html_escape(message))
}

pub fn badge(class: &str, text: &str) -> String {
    format!(
        r#"<span class="status-badge {}">{}</span>"#,
        class,
        html_escape(text)
    )
}

pub fn active_badge(active: bool, text: &str) -> String {
    badge(if active { "status-active" } else { "status-inactive" }, text)
}

/// Progress bar coloured by threshold.
pub fn progress_bar(percent: f64) -> String {
    let status = GaugeStatus::from_percent(percent);
    format!(
        r#"<div class="progress-bar"><div class="progress-fill {}" style="width: {}; background: {}"></div></div>"#,
        status.as_str(),
        bar_width(percent),
        status.color()
    )
}

/// Large percentage readout with its bar. `None` renders the placeholder
/// value over an empty bar.
pub fn gauge(percent: Option<f64>) -> String {
    let readout = percent.map(format_percent).unwrap_or_else(|| DASH.to_string());
    format!(
        r#"<div class="metric-medium"><div class="metric-value">{}</div></div>{}"#,
        readout,
        progress_bar(percent.unwrap_or(0.0))
    )
}

/// Rows from an iterator, or the placeholder when there are none.
pub fn list_or<I>(items: I, empty: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    let html: String = items.into_iter().collect();
    if html.is_empty() {
        placeholder(empty)
    } else {
        html
    }
}
