// Dashboard pages (top-level tabs)
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Overview,
    ServerStatus,
    Hardware,
    Network,
    Services,
    Processes,
    Security,
    Storage,
    Docker,
    Kubernetes,
    Logs,
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl Page {
    pub const ALL: [Page; 11] = [
        Page::Overview,
        Page::ServerStatus,
        Page::Hardware,
        Page::Network,
        Page::Services,
        Page::Processes,
        Page::Security,
        Page::Storage,
        Page::Docker,
        Page::Kubernetes,
        Page::Logs,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::ServerStatus => "server-status",
            Page::Hardware => "hardware",
            Page::Network => "network",
            Page::Services => "services",
            Page::Processes => "processes",
            Page::Security => "security",
            Page::Storage => "storage",
            Page::Docker => "docker",
            Page::Kubernetes => "kubernetes",
            Page::Logs => "logs",
        }
    }

    /// Navigation label, also shown as the page title.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::ServerStatus => "Server Status",
            Page::Hardware => "Hardware",
            Page::Network => "Network",
            Page::Services => "Services",
            Page::Processes => "Processes",
            Page::Security => "Security",
            Page::Storage => "Storage",
            Page::Docker => "Docker",
            Page::Kubernetes => "Kubernetes",
            Page::Logs => "Logs",
        }
    }

    /// Whether the page is built from the aggregate `/api/all` snapshot.
    /// The others fetch their own endpoints.
    pub fn uses_snapshot(&self) -> bool {
        !matches!(self, Page::Logs | Page::Kubernetes)
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.slug() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
