// Dashboard service - active page, widget state and fragment publishing
use crate::application::export::{export_logs, LogExport};
use crate::application::metrics_source::{MetricsSource, LARGE_FILE_MIN_MB};
use crate::application::render::{self, kubernetes, logs, network, storage};
use crate::application::widgets::WidgetState;
use crate::domain::branding::{Credit, ReconcileGuard};
use crate::domain::fragment::Fragment;
use crate::domain::page::Page;
use crate::domain::snapshot::{K8sOverview, Snapshot};
use anyhow::Context;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, watch, Mutex};

/// Fragments a slow `/stream` client may fall behind by before it lags.
const STREAM_BUFFER: usize = 64;

struct ViewState {
    active: Page,
    /// Sequence number of the newest snapshot applied so far.
    last_applied: u64,
    widgets: WidgetState,
    open_panels: HashSet<String>,
}

pub struct DashboardService {
    source: Arc<dyn MetricsSource>,
    guard: ReconcileGuard,
    state: Mutex<ViewState>,
    next_seq: AtomicU64,
    fragments: watch::Sender<Option<Fragment>>,
    stream: broadcast::Sender<Fragment>,
    visible: watch::Sender<bool>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn MetricsSource>, history_capacity: usize, credit: &Credit) -> Self {
        let (fragments, _) = watch::channel(None);
        let (stream, _) = broadcast::channel(STREAM_BUFFER);
        let (visible, _) = watch::channel(true);
        Self {
            source,
            guard: ReconcileGuard::for_credit(credit),
            state: Mutex::new(ViewState {
                active: Page::Overview,
                last_applied: 0,
                widgets: WidgetState::new(history_capacity),
                open_panels: HashSet::new(),
            }),
            next_seq: AtomicU64::new(1),
            fragments,
            stream,
            visible,
        }
    }

    /// The latest fragment plus a receiver of every fragment published
    /// from now on.
    pub fn subscribe(&self) -> (Option<Fragment>, broadcast::Receiver<Fragment>) {
        let rx = self.stream.subscribe();
        (self.latest(), rx)
    }

    pub fn latest(&self) -> Option<Fragment> {
        self.fragments.borrow().clone()
    }

    pub fn visibility(&self) -> watch::Receiver<bool> {
        self.visible.subscribe()
    }

    pub fn is_visible(&self) -> bool {
        *self.visible.borrow()
    }

    /// Record dashboard visibility. Returns true when this call resumed a
    /// hidden dashboard.
    pub fn set_visible(&self, visible: bool) -> bool {
        let was_visible = self.visible.send_replace(visible);
        !was_visible && visible
    }

    pub async fn active_page(&self) -> Page {
        self.state.lock().await.active
    }

    pub async fn charts(&self) -> WidgetState {
        self.state.lock().await.widgets.clone()
    }

    fn next_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed)
    }

    /// Switch pages and render the new one right away instead of waiting for
    /// the next tick.
    pub async fn activate(&self, page: Page) -> anyhow::Result<Fragment> {
        let previous = {
            let mut state = self.state.lock().await;
            std::mem::replace(&mut state.active, page)
        };
        if previous != page {
            tracing::info!(from = %previous, to = %page, "Switched page");
        }

        let rendered = if page.uses_snapshot() {
            let seq = self.next_seq();
            let snapshot = self.source.snapshot().await.context("Failed to fetch snapshot")?;
            self.render_snapshot(seq, snapshot).await
        } else if page == Page::Logs {
            Some(self.render_logs().await?)
        } else {
            Some(kubernetes::render(&self.load_kubernetes().await?))
        };

        if matches!(page, Page::Overview | Page::Hardware) {
            self.refresh_charts().await;
        }
        let panels = self.render_panels(page).await;

        match rendered {
            Some(mut fragment) => {
                fragment.targets.extend(panels.targets);
                Ok(self.publish(fragment))
            }
            // A tick that started after us already published a newer snapshot
            None => {
                let mut current = self
                    .latest()
                    .filter(|f| f.page == page)
                    .unwrap_or_else(|| Fragment::new(page));
                if !panels.targets.is_empty() {
                    current.targets.extend(self.publish(panels).targets);
                }
                Ok(current)
            }
        }
    }

    /// Panels some pages fill in on activation, outside the snapshot.
    async fn render_panels(&self, page: Page) -> Fragment {
        match page {
            Page::Network => match self.source.network_traffic().await {
                Ok(interfaces) => return network::render_traffic(&interfaces),
                Err(e) => tracing::warn!("Error loading network traffic: {:#}", e),
            },
            Page::Storage => match self.source.storage_summary().await {
                Ok(partitions) => {
                    self.state.lock().await.open_panels.clear();
                    return storage::render_browser(&partitions);
                }
                Err(e) => tracing::warn!("Error loading storage browser: {:#}", e),
            },
            _ => {}
        }
        Fragment::new(page)
    }

    /// One poll tick for the active page.
    pub async fn poll_once(&self) -> anyhow::Result<Option<Fragment>> {
        match self.active_page().await {
            // Kubernetes refreshes on its own cadence
            Page::Kubernetes => Ok(None),
            Page::Logs => {
                let fragment = self.render_logs().await?;
                Ok(self.publish_if_active(fragment).await)
            }
            _ => {
                let seq = self.next_seq();
                let snapshot = self.source.snapshot().await.context("Failed to fetch snapshot")?;
                Ok(self.apply_snapshot(seq, snapshot).await)
            }
        }
    }

    /// Render a snapshot fetched under `seq` for the active page and publish
    /// it. Snapshots older than the last applied one are dropped.
    pub async fn apply_snapshot(&self, seq: u64, snapshot: Snapshot) -> Option<Fragment> {
        let fragment = self.render_snapshot(seq, snapshot).await?;
        Some(self.publish(fragment))
    }

    async fn render_snapshot(&self, seq: u64, snapshot: Snapshot) -> Option<Fragment> {
        let mut state = self.state.lock().await;
        if seq < state.last_applied {
            tracing::debug!(seq, last_applied = state.last_applied, "Discarding stale snapshot");
            return None;
        }
        state.last_applied = seq;
        let page = state.active;
        let fragment = render::render_snapshot_page(page, &snapshot, &mut state.widgets)?;
        Some(fragment.with_seq(seq))
    }

    /// Refresh the per-core and GPU bar charts. Each source fails on its own.
    pub async fn refresh_charts(&self) {
        let (cpu, gpu) = tokio::join!(self.source.cpu(), self.source.gpu());
        let mut state = self.state.lock().await;
        match cpu {
            Ok(cpu) if !cpu.core_usage().is_empty() => state.widgets.set_core_usage(cpu.core_usage()),
            Ok(_) => {}
            Err(e) => tracing::warn!("Error updating CPU core chart: {:#}", e),
        }
        match gpu {
            Ok(report) if !report.gpus.is_empty() => {
                let utilization: Vec<f64> = report.gpus.iter().map(|g| g.utilization).collect();
                state.widgets.set_gpu_utilization(&utilization);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Error updating GPU chart: {:#}", e),
        }
    }

    /// Refresh the live traffic panel while the network page is showing.
    pub async fn refresh_traffic(&self) -> anyhow::Result<Option<Fragment>> {
        if self.active_page().await != Page::Network {
            return Ok(None);
        }
        let interfaces = self
            .source
            .network_traffic()
            .await
            .context("Failed to fetch network traffic")?;
        Ok(self.publish_if_active(network::render_traffic(&interfaces)).await)
    }

    /// Refresh the Kubernetes panels while that page is showing.
    pub async fn refresh_kubernetes(&self) -> anyhow::Result<Option<Fragment>> {
        if self.active_page().await != Page::Kubernetes {
            return Ok(None);
        }
        let overview = self.load_kubernetes().await?;
        Ok(self.publish_if_active(kubernetes::render(&overview)).await)
    }

    /// Open or close a storage partition's panel. Opening fetches its large
    /// files; a failed fetch renders an error line in the panel.
    pub async fn toggle_partition(&self, mountpoint: &str) -> Fragment {
        let opened = {
            let mut state = self.state.lock().await;
            if state.open_panels.remove(mountpoint) {
                false
            } else {
                state.open_panels.insert(mountpoint.to_string());
                true
            }
        };

        if !opened {
            return storage::render_panel(mountpoint, storage::PanelState::Closed);
        }

        match self.source.large_files(mountpoint, LARGE_FILE_MIN_MB).await {
            Ok(files) => storage::render_panel(mountpoint, storage::PanelState::Open(&files)),
            Err(e) => {
                tracing::warn!(mountpoint, "Error loading large files: {:#}", e);
                storage::render_panel(mountpoint, storage::PanelState::Failed)
            }
        }
    }

    pub async fn export_logs(&self, kind: &str) -> anyhow::Result<LogExport> {
        let logs = self.source.logs().await.context("Failed to fetch logs")?;
        export_logs(kind, &logs, chrono::Utc::now().date_naive())
    }

    async fn render_logs(&self) -> anyhow::Result<Fragment> {
        let bundle = self.source.logs().await.context("Failed to fetch logs")?;
        Ok(logs::render(&bundle))
    }

    async fn load_kubernetes(&self) -> anyhow::Result<K8sOverview> {
        if !self.source.k8s_available().await? {
            return Ok(K8sOverview::default());
        }
        let (pods, services, deployments) = tokio::try_join!(
            self.source.k8s_pods(),
            self.source.k8s_services(),
            self.source.k8s_deployments()
        )?;
        Ok(K8sOverview {
            available: true,
            pods,
            services,
            deployments,
        })
    }

    /// Publish only if the user has not moved to another page meanwhile.
    async fn publish_if_active(&self, fragment: Fragment) -> Option<Fragment> {
        if self.active_page().await != fragment.page {
            return None;
        }
        Some(self.publish(fragment))
    }

    fn publish(&self, mut fragment: Fragment) -> Fragment {
        let restored = self.guard.reconcile_fragment(&mut fragment);
        if !restored.is_empty() {
            tracing::warn!(?restored, "Restored credit text in outgoing fragment");
        }
        self.fragments.send_replace(Some(fragment.clone()));
        // No receivers just means no open streams
        let _ = self.stream.send(fragment.clone());
        fragment
    }
}
