// Network page: interfaces, connection counts, firewall, live traffic
use super::{active_badge, html_escape, info_row, list_or, placeholder, text_or, NOT_AVAILABLE, NO_DATA};
use crate::domain::format::format_bytes;
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::{Interface, Snapshot, TrafficInterface};

pub const TRAFFIC_TARGET: &str = "network-traffic-details";
const MAX_FIREWALL_PORTS: usize = 10;

pub fn render(snapshot: &Snapshot) -> Fragment {
    let mut fragment = Fragment::new(Page::Network);
    let Some(network) = snapshot.network.as_ref() else {
        for id in ["network-interfaces", "network-connections", "network-firewall"] {
            fragment.push(id, placeholder(NO_DATA));
        }
        return fragment;
    };

    fragment.push(
        "network-interfaces",
        list_or(network.interfaces.iter().map(interface_card), NO_DATA),
    );

    fragment.push(
        "network-connections",
        match &network.connections {
            Some(conns) => [
                info_row("Total Connections", &conns.total.to_string()),
                info_row("Established", &conns.established.to_string()),
                info_row("Public IP", &text_or(network.public_ip.as_deref(), NOT_AVAILABLE)),
            ]
            .concat(),
            None => placeholder(NO_DATA),
        },
    );

    fragment.push(
        "network-firewall",
        match &network.firewall {
            Some(firewall) => {
                let ports: Vec<String> = firewall
                    .open_ports
                    .iter()
                    .filter(|p| !p.trim().is_empty())
                    .take(MAX_FIREWALL_PORTS)
                    .map(|p| active_badge(true, p))
                    .collect();
                let ports = if ports.is_empty() {
                    format!(r#"<span class="muted">{}</span>"#, NO_DATA)
                } else {
                    ports.join(" ")
                };
                format!(
                    r#"{}<div class="open-ports"><div class="open-ports-label">Open Ports:</div>{}</div>"#,
                    info_row("UFW Status", &text_or(firewall.ufw_status.as_deref(), NOT_AVAILABLE)),
                    ports
                )
            }
            None => placeholder(NO_DATA),
        },
    );

    fragment
}

fn interface_card(iface: &Interface) -> String {
    format!(
        r#"<div class="iface-card"><div class="disk-header"><span class="disk-path">{}</span>{}</div>{}</div>"#,
        html_escape(&iface.name),
        active_badge(iface.status == "UP", &iface.status),
        [
            info_row("IP Address", &text_or(iface.ip.as_deref(), NOT_AVAILABLE)),
            info_row("MAC Address", &text_or(iface.mac.as_deref(), NOT_AVAILABLE)),
            info_row("Link Speed", &text_or(iface.link_speed.as_deref(), NOT_AVAILABLE)),
            info_row("Bytes Sent", &format_bytes(iface.bytes_sent)),
            info_row("Bytes Received", &format_bytes(iface.bytes_recv)),
            info_row("Packets Sent", &iface.packets_sent.to_string()),
            info_row("Packets Received", &iface.packets_recv.to_string()),
            info_row("Errors", &format!("In: {} / Out: {}", iface.errin, iface.errout)),
        ]
        .concat()
    )
}

/// Live traffic panel from `/api/network/traffic`. Loopback is skipped.
pub fn render_traffic(interfaces: &[TrafficInterface]) -> Fragment {
    let mut fragment = Fragment::new(Page::Network);
    fragment.push(
        TRAFFIC_TARGET,
        list_or(
            interfaces
                .iter()
                .filter(|iface| iface.name != "lo")
                .map(traffic_card),
            NO_DATA,
        ),
    );
    fragment
}

fn traffic_card(iface: &TrafficInterface) -> String {
    let stat = |label: &str, value: &str| {
        format!(
            r#"<div class="stat-item"><span class="stat-label">{}</span><span class="stat-value">{}</span></div>"#,
            label,
            html_escape(value)
        )
    };
    format!(
        r#"<div class="traffic-interface"><div class="interface-header"><span class="interface-name">{}</span>{}</div><div class="traffic-stats">{}{}{}{}</div>{}{}{}</div>"#,
        html_escape(&iface.name),
        active_badge(iface.status == "up", &iface.status),
        stat("Upload", &iface.upload_rate_human),
        stat("Download", &iface.download_rate_human),
        stat("Total Sent", &iface.bytes_sent_human),
        stat("Total Recv", &iface.bytes_recv_human),
        info_row(
            "Packets Sent/Recv",
            &format!("{}/s | {}/s", iface.packets_sent_rate, iface.packets_recv_rate)
        ),
        info_row("Errors (In/Out)", &format!("{} / {}", iface.errors_in, iface.errors_out)),
        info_row("Drops (In/Out)", &format!("{} / {}", iface.drops_in, iface.drops_out)),
    )
}
