// Overview page: system, CPU, memory and disk cards plus the line charts
use super::{gauge, info_row, text_or, DASH, NOT_AVAILABLE};
use crate::application::widgets::WidgetState;
use crate::domain::format::{format_bytes, format_fixed};
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::{CpuInfo, Snapshot};

pub const SYSTEM_CARD: &str = "overview-system";
pub const CPU_CARD: &str = "overview-cpu";
pub const MEMORY_CARD: &str = "overview-memory";
pub const DISK_CARD: &str = "overview-disk";

pub fn render(snapshot: &Snapshot, widgets: &mut WidgetState) -> Fragment {
    let mut fragment = Fragment::new(Page::Overview);

    let system = snapshot.system.as_ref();
    fragment.push(
        SYSTEM_CARD,
        [
            info_row("Hostname", &text_or(system.and_then(|s| s.hostname.as_deref()), DASH)),
            info_row("OS", &text_or(system.and_then(|s| s.os.as_deref()), DASH)),
            info_row("Kernel", &text_or(system.and_then(|s| s.kernel.as_deref()), DASH)),
            info_row("Uptime", &text_or(system.and_then(|s| s.uptime.as_deref()), DASH)),
        ]
        .concat(),
    );

    fragment.push(CPU_CARD, cpu_card(snapshot.cpu.as_ref()));

    let ram = snapshot.memory.as_ref().and_then(|m| m.ram.as_ref());
    fragment.push(
        MEMORY_CARD,
        [
            gauge(ram.map(|r| r.percent)),
            info_row("Used", &ram.map(|r| format_bytes(r.used)).unwrap_or_else(|| DASH.to_string())),
            info_row("Free", &ram.map(|r| format_bytes(r.free)).unwrap_or_else(|| DASH.to_string())),
        ]
        .concat(),
    );

    let root = snapshot.root_partition();
    fragment.push(
        DISK_CARD,
        [
            gauge(root.map(|p| p.percent)),
            info_row("Used", &root.map(|p| format_bytes(p.used)).unwrap_or_else(|| DASH.to_string())),
            info_row("Free", &root.map(|p| format_bytes(p.free)).unwrap_or_else(|| DASH.to_string())),
        ]
        .concat(),
    );

    // Charts only advance when every input is present
    if let (Some(cpu), Some(memory), Some(network)) =
        (&snapshot.cpu, &snapshot.memory, &snapshot.network)
    {
        let (sent, recv) = network.non_loopback_totals();
        let mem_percent = memory.ram.as_ref().map(|r| r.percent).unwrap_or(0.0);
        widgets.push_sample(cpu.usage_total.unwrap_or(0.0), mem_percent, sent, recv);
    }

    fragment
}

fn cpu_card(cpu: Option<&CpuInfo>) -> String {
    let load = cpu
        .and_then(|c| c.load_average.as_ref())
        .map(|l| format_fixed(l.one, 2))
        .unwrap_or_else(|| DASH.to_string());
    [
        gauge(cpu.map(|c| c.usage_total.unwrap_or(0.0))),
        info_row("Load", &load),
        info_row("Temp", &temperature(cpu)),
    ]
    .concat()
}

/// A zero reading means the sensor is missing.
pub(super) fn temperature(cpu: Option<&CpuInfo>) -> String {
    match cpu.and_then(|c| c.temperature) {
        Some(t) if t != 0.0 => format!("{}°C", format_fixed(t, 1)),
        _ => NOT_AVAILABLE.to_string(),
    }
}
