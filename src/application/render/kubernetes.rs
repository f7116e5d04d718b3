// Kubernetes page: pods, services, deployments
use super::{badge, html_escape, list_or, placeholder};
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::K8sOverview;

const TARGETS: [&str; 3] = ["k8s-pods", "k8s-services", "k8s-deployments"];

pub fn render(overview: &K8sOverview) -> Fragment {
    let mut fragment = Fragment::new(Page::Kubernetes);

    if !overview.available {
        for id in TARGETS {
            fragment.push(id, placeholder("Kubernetes not available"));
        }
        return fragment;
    }

    fragment.push(
        "k8s-pods",
        list_or(
            overview.pods.iter().map(|pod| {
                let class = if pod.status == "Running" { "status-active" } else { "status-inactive" };
                item(
                    &pod.name,
                    &[
                        badge(class, &pod.status),
                        namespace(&pod.namespace),
                        format!(r#"<span class="k8s-restarts">Restarts: {}</span>"#, pod.restarts),
                    ],
                )
            }),
            "No pods found",
        ),
    );

    fragment.push(
        "k8s-services",
        list_or(
            overview.services.iter().map(|svc| {
                item(
                    &svc.name,
                    &[
                        badge("status-active", &svc.kind),
                        namespace(&svc.namespace),
                        format!(r#"<span class="k8s-ports">{}</span>"#, html_escape(&svc.ports)),
                    ],
                )
            }),
            "No services found",
        ),
    );

    fragment.push(
        "k8s-deployments",
        list_or(
            overview.deployments.iter().map(|dep| {
                let class = if dep.ready == dep.replicas { "status-active" } else { "status-warning" };
                item(
                    &dep.name,
                    &[
                        badge(class, &format!("{}/{}", dep.ready, dep.replicas)),
                        namespace(&dep.namespace),
                    ],
                )
            }),
            "No deployments found",
        ),
    );

    fragment
}

fn item(name: &str, details: &[String]) -> String {
    format!(
        r#"<div class="k8s-item"><div class="k8s-name">{}</div><div class="k8s-details">{}</div></div>"#,
        html_escape(name),
        details.concat()
    )
}

fn namespace(ns: &str) -> String {
    format!(r#"<span class="k8s-namespace">{}</span>"#, html_escape(ns))
}
