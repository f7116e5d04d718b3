// Services page
use super::{active_badge, html_escape, list_or, placeholder, NO_DATA};
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::Snapshot;

pub fn render(snapshot: &Snapshot) -> Fragment {
    let mut fragment = Fragment::new(Page::Services);
    let services = snapshot.services.as_ref().and_then(|s| s.services.as_ref());

    let html = match services {
        Some(services) => list_or(
            services.iter().map(|svc| {
                format!(
                    r#"<div class="service-item"><div class="service-name">{}</div><div class="service-status">{}{}</div></div>"#,
                    html_escape(&svc.name),
                    active_badge(svc.status == "active", &svc.status),
                    active_badge(svc.enabled == "enabled", &svc.enabled)
                )
            }),
            "No services",
        ),
        None => placeholder(NO_DATA),
    };
    fragment.push("services-list", html);

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_badges() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "services": {"services": [
                {"name": "nginx", "status": "active", "enabled": "enabled"},
                {"name": "redis", "status": "inactive", "enabled": "disabled"}
            ]}
        }))
        .unwrap();

        let html = render(&snapshot).get("services-list").unwrap().to_string();
        assert_eq!(html.matches("status-active").count(), 2);
        assert_eq!(html.matches("status-inactive").count(), 2);
    }

    #[test]
    fn test_missing_services() {
        let fragment = render(&Snapshot::default());
        assert_eq!(fragment.get("services-list"), Some(placeholder(NO_DATA).as_str()));
    }
}
