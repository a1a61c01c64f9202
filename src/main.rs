// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod errors;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use tower_http::trace::TraceLayer;

use crate::application::analytics_repository::AnalyticsRepository;
use crate::application::chart_renderer::ChartRenderer;
use crate::application::report_service::ReportService;
use crate::infrastructure::chart_assets::PrerenderedCharts;
use crate::infrastructure::cloudflare::CloudflareAnalytics;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::pdf_report::ReportAssembler;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration; a missing API token aborts startup
    let settings = load_settings()?;

    // Create the analytics client (infrastructure layer)
    let analytics: Arc<dyn AnalyticsRepository> =
        Arc::new(CloudflareAnalytics::new(&settings.api));

    // Create the report pipeline (application layer)
    let renderer: Arc<dyn ChartRenderer> =
        Arc::new(PrerenderedCharts::new(settings.report.assets_dir.clone()));
    let assembler = ReportAssembler::new(settings.report.clone());
    let reports = Arc::new(ReportService::new(
        analytics.clone(),
        renderer,
        assembler,
        settings.clients.clone(),
    ));

    // Create application state
    let state = Arc::new(AppState {
        reports,
        analytics,
        assets_dir: settings.report.assets_dir.clone(),
    });

    // Build router (presentation layer)
    let router = app_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = "0.0.0.0:5002".parse().unwrap();
    println!("Starting edge-report service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
