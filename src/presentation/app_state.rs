// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::domain::branding::Credit;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardService>,
    pub credit: Credit,
}
