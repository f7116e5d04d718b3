// Server status page
use super::{badge, html_escape, list_or, placeholder, progress_bar, text_or, DASH};
use crate::domain::format::format_percent;
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::{ServerStatus, Snapshot};

pub fn render(snapshot: &Snapshot) -> Fragment {
    let mut fragment = Fragment::new(Page::ServerStatus);
    let default_status = ServerStatus::default();
    let status = snapshot.server_status.as_ref().unwrap_or(&default_status);

    let (icon_class, label) = if status.online {
        ("status-icon text-success", "Online")
    } else {
        ("status-icon text-danger", "Offline")
    };
    fragment.push(
        "server-online-status",
        format!(r#"<span class="{}"></span>{}"#, icon_class, label),
    );
    fragment.push(
        "status-uptime",
        text_or(snapshot.system.as_ref().and_then(|s| s.uptime.as_deref()), DASH),
    );
    fragment.push("status-ports", status.open_ports.to_string());
    fragment.push("status-connections", status.connections.to_string());

    fragment.push(
        "status-services",
        list_or(
            status.services.iter().map(|svc| {
                format!(
                    r#"<div class="service-item"><div class="service-name">{}</div><div class="service-status">{}<span class="service-pid">PID: {}</span></div></div>"#,
                    html_escape(&svc.name),
                    badge("status-active", "Running"),
                    svc.pid.as_ref().map(|p| html_escape(&p.to_string())).unwrap_or_else(|| DASH.to_string())
                )
            }),
            "No running services",
        ),
    );

    fragment.push(
        "status-listening-ports",
        list_or(
            status.listening_ports.iter().map(|port| {
                format!(
                    r#"<div class="port-item"><span class="port-number">{}</span><span class="port-service">{}</span></div>"#,
                    port.port.as_ref().map(|p| html_escape(&p.to_string())).unwrap_or_else(|| DASH.to_string()),
                    html_escape(&port.process)
                )
            }),
            "No listening ports",
        ),
    );

    let cpu = snapshot.cpu.as_ref().map(|c| c.usage_total.unwrap_or(0.0));
    let mem = snapshot.memory.as_ref().and_then(|m| m.ram.as_ref()).map(|r| r.percent);
    let disk = snapshot.root_partition().map(|p| p.percent);
    fragment.push("status-cpu", resource_bar(cpu));
    fragment.push("status-mem", resource_bar(mem));
    fragment.push("status-disk", resource_bar(disk));

    let alerts: String = status
        .alerts
        .iter()
        .map(|alert| {
            format!(
                r#"<div class="alert-item {}">{}</div>"#,
                html_escape(&alert.level),
                html_escape(&alert.message)
            )
        })
        .collect();
    fragment.push(
        "status-alerts",
        if alerts.is_empty() {
            r#"<div class="alert-item success">All systems operational</div>"#.to_string()
        } else {
            alerts
        },
    );

    fragment.push(
        "status-top-processes",
        list_or(
            status.top_processes.iter().map(|proc| {
                format!(
                    r#"<div class="process-item"><span class="process-name">{} ({})</span><span class="process-value">CPU: {}</span></div>"#,
                    html_escape(&proc.name),
                    proc.pid.as_ref().map(|p| html_escape(&p.to_string())).unwrap_or_else(|| DASH.to_string()),
                    format_percent(proc.cpu.unwrap_or(0.0))
                )
            }),
            "No processes",
        ),
    );

    fragment
}

fn resource_bar(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!(
            r#"{}<span class="resource-text">{}</span>"#,
            progress_bar(p),
            format_percent(p)
        ),
        None => placeholder(DASH),
    }
}
