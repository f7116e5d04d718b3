// In-memory metrics source for service and poller tests
use crate::application::metrics_source::MetricsSource;
use crate::domain::snapshot::{
    CpuInfo, Deployment, GpuReport, K8sService, LargeFile, LogBundle, Pod, Snapshot,
    StoragePartition, TrafficInterface,
};
use anyhow::anyhow;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
pub struct StubSource {
    snapshot: Value,
    logs: Value,
    traffic: Value,
    large_files: Value,
    cpu: Value,
    gpu: Value,
    fail_snapshots: AtomicBool,
    first_snapshot_delay: Option<Duration>,
    snapshot_calls: AtomicUsize,
    large_file_calls: AtomicUsize,
    chart_calls: AtomicUsize,
    traffic_calls: AtomicUsize,
}

impl StubSource {
    pub fn with_snapshot(snapshot: Value) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }

    pub fn with_logs(mut self, logs: Value) -> Self {
        self.logs = logs;
        self
    }

    pub fn with_traffic(mut self, traffic: Value) -> Self {
        self.traffic = traffic;
        self
    }

    pub fn with_large_files(mut self, files: Value) -> Self {
        self.large_files = files;
        self
    }

    pub fn with_cpu(mut self, cpu: Value) -> Self {
        self.cpu = cpu;
        self
    }

    pub fn with_gpu(mut self, gpu: Value) -> Self {
        self.gpu = gpu;
        self
    }

    /// Hold the first `snapshot()` call back so a later one can overtake it.
    pub fn with_first_snapshot_delay(mut self, delay: Duration) -> Self {
        self.first_snapshot_delay = Some(delay);
        self
    }

    pub fn fail_snapshots(&self, fail: bool) {
        self.fail_snapshots.store(fail, Ordering::SeqCst);
    }

    pub fn snapshot_calls(&self) -> usize {
        self.snapshot_calls.load(Ordering::SeqCst)
    }

    pub fn large_file_calls(&self) -> usize {
        self.large_file_calls.load(Ordering::SeqCst)
    }

    pub fn chart_calls(&self) -> usize {
        self.chart_calls.load(Ordering::SeqCst)
    }

    pub fn traffic_calls(&self) -> usize {
        self.traffic_calls.load(Ordering::SeqCst)
    }
}

fn decode<T: DeserializeOwned + Default>(value: &Value) -> anyhow::Result<T> {
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value.clone())?)
}

#[async_trait]
impl MetricsSource for StubSource {
    async fn snapshot(&self) -> anyhow::Result<Snapshot> {
        let call = self.snapshot_calls.fetch_add(1, Ordering::SeqCst);
        if let (0, Some(delay)) = (call, self.first_snapshot_delay) {
            tokio::time::sleep(delay).await;
        }
        if self.fail_snapshots.load(Ordering::SeqCst) {
            return Err(anyhow!("backend unreachable"));
        }
        decode(&self.snapshot)
    }

    async fn logs(&self) -> anyhow::Result<LogBundle> {
        decode(&self.logs)
    }

    async fn storage_summary(&self) -> anyhow::Result<Vec<StoragePartition>> {
        Ok(Vec::new())
    }

    async fn large_files(&self, _path: &str, _min_size_mb: u64) -> anyhow::Result<Vec<LargeFile>> {
        self.large_file_calls.fetch_add(1, Ordering::SeqCst);
        decode(&self.large_files)
    }

    async fn network_traffic(&self) -> anyhow::Result<Vec<TrafficInterface>> {
        self.traffic_calls.fetch_add(1, Ordering::SeqCst);
        decode(&self.traffic)
    }

    async fn k8s_available(&self) -> anyhow::Result<bool> {
        Ok(false)
    }

    async fn k8s_pods(&self) -> anyhow::Result<Vec<Pod>> {
        Ok(Vec::new())
    }

    async fn k8s_services(&self) -> anyhow::Result<Vec<K8sService>> {
        Ok(Vec::new())
    }

    async fn k8s_deployments(&self) -> anyhow::Result<Vec<Deployment>> {
        Ok(Vec::new())
    }

    async fn gpu(&self) -> anyhow::Result<GpuReport> {
        decode(&self.gpu)
    }

    async fn cpu(&self) -> anyhow::Result<CpuInfo> {
        self.chart_calls.fetch_add(1, Ordering::SeqCst);
        decode(&self.cpu)
    }
}
