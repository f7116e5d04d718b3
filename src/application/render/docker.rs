// Docker page: containers and images
use super::{active_badge, html_escape, list_or, placeholder};
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::Snapshot;

pub fn render(snapshot: &Snapshot) -> Fragment {
    let mut fragment = Fragment::new(Page::Docker);

    let docker = match snapshot.docker.as_ref() {
        Some(docker) if docker.installed => docker,
        _ => {
            fragment.push("docker-containers", placeholder("Docker not installed"));
            fragment.push("docker-images", placeholder("Docker not installed"));
            return fragment;
        }
    };

    fragment.push(
        "docker-containers",
        list_or(
            docker.containers.iter().map(|c| {
                let running = c.status.to_lowercase().contains("up");
                format!(
                    r#"<div class="service-item"><div><div class="service-name">{}</div><div class="container-image">{}</div></div>{}</div>"#,
                    html_escape(&c.name),
                    html_escape(&c.image),
                    active_badge(running, &c.status)
                )
            }),
            "No containers",
        ),
    );

    fragment.push(
        "docker-images",
        list_or(
            docker.images.iter().map(|img| {
                format!(
                    r#"<div class="process-item"><span class="process-name">{}</span><span class="process-value">{}</span></div>"#,
                    html_escape(&img.name),
                    html_escape(&img.size)
                )
            }),
            "No images",
        ),
    );

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_installed() {
        let snapshot: Snapshot = serde_json::from_value(json!({"docker": {"installed": false}})).unwrap();
        let fragment = render(&snapshot);
        assert!(fragment.get("docker-containers").unwrap().contains("Docker not installed"));
        assert!(fragment.get("docker-images").unwrap().contains("Docker not installed"));

        let fragment = render(&Snapshot::default());
        assert!(fragment.get("docker-images").unwrap().contains("Docker not installed"));
    }

    #[test]
    fn test_container_status_badges() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "docker": {
                "installed": true,
                "containers": [
                    {"name": "web", "image": "nginx:1.27", "status": "Up 3 hours"},
                    {"name": "job", "image": "alpine", "status": "Exited (0) 2 days ago"}
                ],
                "images": []
            }
        }))
        .unwrap();

        let fragment = render(&snapshot);
        let containers = fragment.get("docker-containers").unwrap();
        assert!(containers.contains(r#"status-active">Up 3 hours"#));
        assert!(containers.contains(r#"status-inactive">Exited (0) 2 days ago"#));
        assert!(fragment.get("docker-images").unwrap().contains("No images"));
    }
}
