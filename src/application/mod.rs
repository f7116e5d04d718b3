// Application layer - polling, rendering and dashboard state
pub mod dashboard_service;
pub mod export;
pub mod metrics_source;
pub mod poller;
pub mod render;
pub mod widgets;

#[cfg(test)]
pub mod testing;
