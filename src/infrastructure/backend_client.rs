// Metrics backend HTTP client
use crate::application::metrics_source::MetricsSource;
use crate::domain::snapshot::{
    CpuInfo, Deployment, GpuReport, K8sAvailability, K8sService, LargeFile, LogBundle, Pod,
    Snapshot, StoragePartition, TrafficInterface,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} returned status {status}")]
    Status { path: String, status: StatusCode },

    #[error("could not decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BackendError::Client)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::trace!(%url, "Fetching");

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                path: path.to_string(),
                status,
            });
        }

        response.json::<T>().await.map_err(|source| BackendError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl MetricsSource for BackendClient {
    async fn snapshot(&self) -> anyhow::Result<Snapshot> {
        Ok(self.get_json("/api/all").await?)
    }

    async fn logs(&self) -> anyhow::Result<LogBundle> {
        Ok(self.get_json("/api/logs").await?)
    }

    async fn storage_summary(&self) -> anyhow::Result<Vec<StoragePartition>> {
        Ok(self.get_json("/api/storage/summary").await?)
    }

    async fn large_files(&self, path: &str, min_size_mb: u64) -> anyhow::Result<Vec<LargeFile>> {
        let query = format!(
            "/api/storage/large-files?path={}&min_size={}",
            urlencoding::encode(path),
            min_size_mb
        );
        Ok(self.get_json(&query).await?)
    }

    async fn network_traffic(&self) -> anyhow::Result<Vec<TrafficInterface>> {
        Ok(self.get_json("/api/network/traffic").await?)
    }

    async fn k8s_available(&self) -> anyhow::Result<bool> {
        let availability: K8sAvailability = self.get_json("/api/k8s/available").await?;
        Ok(availability.available)
    }

    async fn k8s_pods(&self) -> anyhow::Result<Vec<Pod>> {
        Ok(self.get_json("/api/k8s/pods").await?)
    }

    async fn k8s_services(&self) -> anyhow::Result<Vec<K8sService>> {
        Ok(self.get_json("/api/k8s/services").await?)
    }

    async fn k8s_deployments(&self) -> anyhow::Result<Vec<Deployment>> {
        Ok(self.get_json("/api/k8s/deployments").await?)
    }

    async fn gpu(&self) -> anyhow::Result<GpuReport> {
        Ok(self.get_json("/api/gpu").await?)
    }

    async fn cpu(&self) -> anyhow::Result<CpuInfo> {
        Ok(self.get_json("/api/cpu").await?)
    }
}
