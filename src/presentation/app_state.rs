// Application state for HTTP handlers
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::analytics_repository::AnalyticsRepository;
use crate::application::report_service::ReportGenerator;

#[derive(Clone)]
pub struct AppState {
    pub reports: Arc<dyn ReportGenerator>,
    pub analytics: Arc<dyn AnalyticsRepository>,
    pub assets_dir: PathBuf,
}
