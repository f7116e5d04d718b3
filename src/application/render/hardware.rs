// Hardware page: CPU details, memory breakdown, per-partition disk cards
use super::overview::temperature;
use super::{html_escape, info_row, placeholder, progress_bar, text_or, DASH, NOT_AVAILABLE, NO_DATA};
use crate::domain::format::{format_bytes, format_fixed, format_percent};
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::{CpuInfo, LoadAverage, MemoryInfo, Partition, Snapshot};

pub fn render(snapshot: &Snapshot) -> Fragment {
    let mut fragment = Fragment::new(Page::Hardware);

    fragment.push("hardware-cpu", cpu_details(snapshot.cpu.as_ref()));
    fragment.push(
        "hardware-memory",
        snapshot
            .memory
            .as_ref()
            .map(memory_details)
            .unwrap_or_else(|| placeholder(NO_DATA)),
    );

    let partitions = snapshot
        .disk
        .as_ref()
        .map(|d| d.partitions.as_slice())
        .unwrap_or_default();
    let disks: String = partitions.iter().map(disk_card).collect();
    fragment.push(
        "hardware-disk",
        if disks.is_empty() { placeholder(NO_DATA) } else { disks },
    );

    fragment
}

fn cpu_details(cpu: Option<&CpuInfo>) -> String {
    let count = |v: Option<u32>| match v {
        Some(n) if n > 0 => n.to_string(),
        _ => DASH.to_string(),
    };
    let load = cpu.and_then(|c| c.load_average.as_ref());
    let load_row = |pick: fn(&LoadAverage) -> f64| {
        load.map(|l| format_fixed(pick(l), 2))
            .unwrap_or_else(|| DASH.to_string())
    };

    [
        info_row("Model", &text_or(cpu.and_then(|c| c.model.as_deref()), DASH)),
        info_row("Cores", &count(cpu.and_then(|c| c.cores))),
        info_row("Threads", &count(cpu.and_then(|c| c.threads))),
        info_row(
            "Frequency",
            &cpu.and_then(|c| c.frequency.as_ref())
                .map(|f| format!("{} MHz", format_fixed(f.current, 2)))
                .unwrap_or_else(|| DASH.to_string()),
        ),
        info_row("Cache Size", &text_or(cpu.and_then(|c| c.cache_size.as_deref()), DASH)),
        info_row("Temperature", &temperature(cpu)),
        info_row("Load Average (1m)", &load_row(|l| l.one)),
        info_row("Load Average (5m)", &load_row(|l| l.five)),
        info_row("Load Average (15m)", &load_row(|l| l.fifteen)),
    ]
    .concat()
}

fn memory_details(memory: &MemoryInfo) -> String {
    let ram = memory.ram.clone().unwrap_or_default();
    let swap = memory.swap.clone().unwrap_or_default();

    let mut html = [
        info_row("Total RAM", &format_bytes(ram.total)),
        info_row("Used RAM", &format_bytes(ram.used)),
        info_row("Free RAM", &format_bytes(ram.free)),
        info_row("Available", &format_bytes(ram.available)),
        info_row("Buffers", &format_bytes(ram.buffers)),
        info_row("Cached", &format_bytes(ram.cached)),
        info_row("Swap Total", &format_bytes(swap.total)),
        info_row("Swap Used", &format_bytes(swap.used)),
    ]
    .concat();

    if !memory.zram.is_empty() {
        html.push_str(r#"<div class="zram-devices"><div class="zram-title">ZRAM Devices</div>"#);
        for zram in &memory.zram {
            html.push_str(&info_row(&zram.device, &html_escape(&zram.disksize)));
        }
        html.push_str("</div>");
    }

    html
}

fn disk_card(part: &Partition) -> String {
    format!(
        r#"<div class="disk-card"><div class="disk-header"><span class="disk-path">{}</span><span class="disk-usage">{}</span></div>{}{}</div>"#,
        html_escape(&part.mountpoint),
        format_percent(part.percent),
        progress_bar(part.percent),
        [
            info_row("Device", &html_escape(&part.device)),
            info_row("Filesystem", &html_escape(&part.fstype)),
            info_row("Total", &format_bytes(part.total)),
            info_row("Used", &format_bytes(part.used)),
            info_row("Free", &format_bytes(part.free)),
            info_row(
                "SMART Status",
                &text_or(part.smart_status.as_deref(), NOT_AVAILABLE)
            ),
        ]
        .concat()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cpu_details() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "cpu": {
                "model": "AMD EPYC 7B13",
                "cores": 4,
                "threads": 8,
                "frequency": {"current": 2450.0},
                "load_average": {"1min": 0.5, "5min": 0.25, "15min": 1.75}
            }
        }))
        .unwrap();

        let html = render(&snapshot).get("hardware-cpu").unwrap().to_string();
        assert!(html.contains("AMD EPYC 7B13"));
        assert!(html.contains("2450.00 MHz"));
        assert!(html.contains("0.50") && html.contains("0.25") && html.contains("1.75"));
        assert!(html.contains("N/A"));
    }

    #[test]
    fn test_missing_sections() {
        let fragment = render(&Snapshot::default());
        assert!(fragment.get("hardware-cpu").unwrap().contains(">-<"));
        assert_eq!(fragment.get("hardware-memory"), Some(placeholder(NO_DATA).as_str()));
        assert_eq!(fragment.get("hardware-disk"), Some(placeholder(NO_DATA).as_str()));
    }

    #[test]
    fn test_memory_with_zram() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "memory": {
                "ram": {"total": 8589934592u64, "used": 4294967296u64},
                "zram": [{"device": "/dev/zram0", "disksize": "4G"}]
            }
        }))
        .unwrap();

        let html = render(&snapshot).get("hardware-memory").unwrap().to_string();
        assert!(html.contains("8 GB") && html.contains("4 GB"));
        assert!(html.contains("ZRAM Devices") && html.contains("/dev/zram0"));
        // Missing swap reads as zero
        assert!(html.contains("0 B"));
    }

    #[test]
    fn test_disk_cards() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "disk": {"partitions": [
                {"mountpoint": "/", "device": "/dev/sda1", "fstype": "ext4", "percent": 42.0, "smart_status": "PASSED"},
                {"mountpoint": "/boot", "device": "/dev/sda2", "fstype": "vfat", "percent": 10.0}
            ]}
        }))
        .unwrap();

        let html = render(&snapshot).get("hardware-disk").unwrap().to_string();
        assert_eq!(html.matches("disk-card").count(), 2);
        assert!(html.contains("PASSED") && html.contains("42.0%"));
    }
}
