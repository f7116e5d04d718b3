// Source trait for backend metrics access
use crate::domain::snapshot::{
    CpuInfo, Deployment, GpuReport, K8sService, LargeFile, LogBundle, Pod, Snapshot,
    StoragePartition, TrafficInterface,
};
use async_trait::async_trait;

/// Minimum size, in MB, of files listed by the storage browser.
pub const LARGE_FILE_MIN_MB: u64 = 100;

#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Aggregate snapshot (`/api/all`)
    async fn snapshot(&self) -> anyhow::Result<Snapshot>;

    async fn logs(&self) -> anyhow::Result<LogBundle>;

    async fn storage_summary(&self) -> anyhow::Result<Vec<StoragePartition>>;

    /// Files of at least `min_size_mb` under `path`
    async fn large_files(&self, path: &str, min_size_mb: u64) -> anyhow::Result<Vec<LargeFile>>;

    async fn network_traffic(&self) -> anyhow::Result<Vec<TrafficInterface>>;

    async fn k8s_available(&self) -> anyhow::Result<bool>;

    async fn k8s_pods(&self) -> anyhow::Result<Vec<Pod>>;

    async fn k8s_services(&self) -> anyhow::Result<Vec<K8sService>>;

    async fn k8s_deployments(&self) -> anyhow::Result<Vec<Deployment>>;

    async fn gpu(&self) -> anyhow::Result<GpuReport>;

    /// Per-core CPU usage (`/api/cpu`)
    async fn cpu(&self) -> anyhow::Result<CpuInfo>;
}
