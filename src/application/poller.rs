// Poller - periodic refresh loops driving the dashboard service
use crate::application::dashboard_service::DashboardService;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub main: Duration,
    pub charts: Duration,
    pub traffic: Duration,
    pub kubernetes: Duration,
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            main: Duration::from_millis(3000),
            charts: Duration::from_millis(5000),
            traffic: Duration::from_millis(5000),
            kubernetes: Duration::from_millis(10000),
        }
    }
}

type Tick = fn(Arc<DashboardService>) -> BoxFuture<'static, ()>;

pub struct Poller {
    service: Arc<DashboardService>,
    intervals: PollIntervals,
}

impl Poller {
    pub fn new(service: Arc<DashboardService>, intervals: PollIntervals) -> Self {
        Self { service, intervals }
    }

    /// Start every refresh loop. Loops exit once `shutdown` flips to true.
    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> Vec<JoinHandle<()>> {
        let loops: [(&'static str, Duration, Tick); 4] = [
            ("main", self.intervals.main, main_tick),
            ("charts", self.intervals.charts, charts_tick),
            ("traffic", self.intervals.traffic, traffic_tick),
            ("kubernetes", self.intervals.kubernetes, kubernetes_tick),
        ];

        loops
            .into_iter()
            .map(|(name, period, tick)| {
                tokio::spawn(run_loop(name, period, self.service.clone(), tick, shutdown.clone()))
            })
            .collect()
    }
}

fn main_tick(service: Arc<DashboardService>) -> BoxFuture<'static, ()> {
    Box::pin(async move {
        if let Err(e) = service.poll_once().await {
            tracing::warn!("Error fetching metrics: {:#}", e);
        }
    })
}

fn charts_tick(service: Arc<DashboardService>) -> BoxFuture<'static, ()> {
    Box::pin(async move { service.refresh_charts().await })
}

fn traffic_tick(service: Arc<DashboardService>) -> BoxFuture<'static, ()> {
    Box::pin(async move {
        if let Err(e) = service.refresh_traffic().await {
            tracing::warn!("Error loading network traffic: {:#}", e);
        }
    })
}

fn kubernetes_tick(service: Arc<DashboardService>) -> BoxFuture<'static, ()> {
    Box::pin(async move {
        if let Err(e) = service.refresh_kubernetes().await {
            tracing::warn!("Error loading Kubernetes data: {:#}", e);
        }
    })
}

/// Fire `tick` every `period` while the dashboard is visible. Becoming
/// visible fires one tick right away. Each tick runs in its own task so a
/// slow response never delays the schedule.
async fn run_loop(
    name: &'static str,
    period: Duration,
    service: Arc<DashboardService>,
    tick: Tick,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut visibility = service.visibility();
    tracing::debug!(loop_name = name, ?period, "Poll loop started");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if !*visibility.borrow() {
                    continue;
                }
                tokio::spawn(tick(service.clone()));
            }
            changed = visibility.changed() => {
                if changed.is_err() {
                    break;
                }
                if *visibility.borrow_and_update() {
                    tracing::debug!(loop_name = name, "Resumed polling");
                    tokio::spawn(tick(service.clone()));
                    ticker.reset();
                } else {
                    tracing::debug!(loop_name = name, "Paused polling");
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    tracing::debug!(loop_name = name, "Poll loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::StubSource;
    use crate::domain::branding::Credit;
    use crate::domain::page::Page;

    fn slow_intervals() -> PollIntervals {
        let hour = Duration::from_secs(3600);
        PollIntervals {
            main: hour,
            charts: hour,
            traffic: hour,
            kubernetes: hour,
        }
    }

    fn setup() -> (Arc<StubSource>, Arc<DashboardService>) {
        let source = Arc::new(StubSource::default());
        let service = Arc::new(DashboardService::new(source.clone(), 30, &Credit::default()));
        (source, service)
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    #[tokio::test]
    async fn test_initial_tick_fetches_once() {
        let (source, service) = setup();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handles = Poller::new(service, slow_intervals()).spawn(shutdown_rx);
        settle().await;

        assert_eq!(source.snapshot_calls(), 1);
        assert_eq!(source.chart_calls(), 1);
        // Traffic only refreshes on the network page
        assert_eq!(source.traffic_calls(), 0);

        shutdown_tx.send(true).unwrap();
        for handle in handles {
            handle.await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_hidden_dashboard_does_not_fetch() {
        let (source, service) = setup();
        service.set_visible(false);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let _handles = Poller::new(service.clone(), slow_intervals()).spawn(shutdown_rx);
        settle().await;
        assert_eq!(source.snapshot_calls(), 0);
        assert_eq!(source.chart_calls(), 0);

        // Resuming fetches exactly once without waiting for the interval
        assert!(service.set_visible(true));
        settle().await;
        assert_eq!(source.snapshot_calls(), 1);
        assert_eq!(source.chart_calls(), 1);

        shutdown_tx.send(true).unwrap();
    }

    #[tokio::test]
    async fn test_ticks_repeat_while_visible() {
        let (source, service) = setup();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let intervals = PollIntervals {
            main: Duration::from_millis(20),
            ..slow_intervals()
        };

        let _handles = Poller::new(service, intervals).spawn(shutdown_rx);
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(source.snapshot_calls() >= 3);
        shutdown_tx.send(true).unwrap();
    }

    #[tokio::test]
    async fn test_traffic_loop_on_network_page() {
        let (source, service) = setup();
        service.activate(Page::Network).await.unwrap();
        let activation_calls = source.traffic_calls();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let _handles = Poller::new(service, slow_intervals()).spawn(shutdown_rx);
        settle().await;

        assert_eq!(source.traffic_calls(), activation_calls + 1);
        shutdown_tx.send(true).unwrap();
    }
}
