// Application layer - Use cases and their seams
pub mod analytics_repository;
pub mod chart_renderer;
pub mod report_service;
