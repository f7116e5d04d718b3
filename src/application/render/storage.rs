// Storage page: partition details and the large-file browser
use super::{badge, html_escape, info_row, list_or, placeholder, progress_bar, NO_DATA};
use crate::domain::format::{format_bytes, format_percent, GaugeStatus};
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::{LargeFile, Partition, Snapshot, StoragePartition};

pub const DETAILS_TARGET: &str = "storage-details";
pub const BROWSER_TARGET: &str = "storage-browser";

pub fn render(snapshot: &Snapshot) -> Fragment {
    let mut fragment = Fragment::new(Page::Storage);
    let partitions = snapshot
        .disk
        .as_ref()
        .map(|d| d.partitions.as_slice())
        .unwrap_or_default();
    fragment.push(DETAILS_TARGET, list_or(partitions.iter().map(partition_card), NO_DATA));
    fragment
}

fn partition_card(part: &Partition) -> String {
    let status = GaugeStatus::from_percent(part.percent);
    format!(
        r#"<div class="disk-card"><div class="disk-header"><span class="disk-path">{}</span>{}</div>{}{}</div>"#,
        html_escape(&part.mountpoint),
        badge(status.badge_class(), &format_percent(part.percent)),
        progress_bar(part.percent),
        [
            info_row("Device", &html_escape(&part.device)),
            info_row("Filesystem", &html_escape(&part.fstype)),
            info_row("Total", &format_bytes(part.total)),
            info_row("Used", &format_bytes(part.used)),
            info_row("Free", &format_bytes(part.free)),
            info_row("Read Count", &part.read_count.to_string()),
            info_row("Write Count", &part.write_count.to_string()),
        ]
        .concat()
    )
}

/// DOM id of a partition's disclosure panel: slashes become dashes.
pub fn panel_id(mountpoint: &str) -> String {
    format!("partition-{}", mountpoint.replace('/', "-"))
}

/// Browser rows from `/api/storage/summary`, panels collapsed.
pub fn render_browser(partitions: &[StoragePartition]) -> Fragment {
    let mut fragment = Fragment::new(Page::Storage);
    fragment.push(
        BROWSER_TARGET,
        list_or(
            partitions.iter().map(|p| {
                format!(
                    r#"<div class="storage-partition"><div class="partition-header" data-mountpoint="{}"><span>{}</span><span class="partition-size">{} / {}</span></div><div id="{}" class="partition-content" hidden></div></div>"#,
                    html_escape(&p.mountpoint),
                    html_escape(&p.mountpoint),
                    html_escape(&p.used_human),
                    html_escape(&p.total_human),
                    html_escape(&panel_id(&p.mountpoint))
                )
            }),
            NO_DATA,
        ),
    );
    fragment
}

#[derive(Debug, Clone, Copy)]
pub enum PanelState<'a> {
    Closed,
    Failed,
    Open(&'a [LargeFile]),
}

pub fn render_panel(mountpoint: &str, state: PanelState<'_>) -> Fragment {
    let mut fragment = Fragment::new(Page::Storage);
    let html = match state {
        PanelState::Closed => String::new(),
        PanelState::Failed => placeholder("Error loading files"),
        PanelState::Open(files) => list_or(
            files.iter().map(|f| {
                format!(
                    r#"<div class="file-item"><span class="file-name">{}</span><span class="file-size">{}</span></div>"#,
                    html_escape(&f.name),
                    html_escape(&f.size_human)
                )
            }),
            "No large files (>100MB) found",
        ),
    };
    fragment.push(panel_id(mountpoint), html);
    fragment
}
