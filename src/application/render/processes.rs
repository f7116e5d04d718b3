// Processes page: top CPU and top memory consumers
use super::{html_escape, list_or, DASH, NO_DATA};
use crate::domain::format::format_percent;
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::{ProcessEntry, Snapshot};

pub fn render(snapshot: &Snapshot) -> Fragment {
    let mut fragment = Fragment::new(Page::Processes);
    let processes = snapshot.processes.as_ref();

    let top_cpu = processes.and_then(|p| p.top_cpu.as_deref()).unwrap_or_default();
    let top_memory = processes.and_then(|p| p.top_memory.as_deref()).unwrap_or_default();

    fragment.push(
        "processes-cpu",
        list_or(top_cpu.iter().map(|p| process_row(p, p.cpu_percent)), NO_DATA),
    );
    fragment.push(
        "processes-memory",
        list_or(top_memory.iter().map(|p| process_row(p, p.memory_percent)), NO_DATA),
    );

    fragment
}

fn process_row(proc: &ProcessEntry, value: Option<f64>) -> String {
    format!(
        r#"<div class="process-item"><span class="process-name">{} ({})</span><span class="process-value">{}</span></div>"#,
        html_escape(&proc.name),
        proc.pid.as_ref().map(|p| html_escape(&p.to_string())).unwrap_or_else(|| DASH.to_string()),
        format_percent(value.unwrap_or(0.0))
    )
}
