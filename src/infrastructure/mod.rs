// Infrastructure layer - External dependencies and adapters
pub mod chart_assets;
pub mod cloudflare;
pub mod config;
pub mod pdf_report;
