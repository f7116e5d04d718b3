// Security page: logged-in users and recent failed logins
use super::{html_escape, info_row, list_or, placeholder};
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::Snapshot;

const MAX_FAILED_LOGINS: usize = 20;

pub fn render(snapshot: &Snapshot) -> Fragment {
    let mut fragment = Fragment::new(Page::Security);
    let security = snapshot.security.clone().unwrap_or_default();

    fragment.push(
        "security-users",
        list_or(
            security.logged_users.iter().map(|user| {
                let who = match user.terminal.as_deref() {
                    Some(term) if !term.is_empty() => format!("{}@{}", user.name, term),
                    _ => user.name.clone(),
                };
                info_row(&who, &html_escape(&user.started))
            }),
            "No logged users",
        ),
    );

    let lines: String = security
        .failed_logins
        .iter()
        .take(MAX_FAILED_LOGINS)
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!(r#"<div class="log-line">{}</div>"#, html_escape(line)))
        .collect();
    fragment.push(
        "security-failed",
        if lines.is_empty() {
            placeholder("No failed login attempts")
        } else {
            format!(r#"<div class="log-container">{}</div>"#, lines)
        },
    );

    fragment
}
