// Router assembly
use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    admin, download_report, generate_report, health_check, home, list_accounts, list_zones,
    report_page, user_page,
};

/// Build the application router
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/admin", get(admin))
        .route("/reporte", get(report_page))
        .route("/get_report", get(generate_report))
        .route("/user", get(user_page))
        .route("/download/report", get(download_report))
        .route("/zones", get(list_zones))
        .route("/accounts", get(list_accounts))
        .route("/healthz", get(health_check))
        .fallback(handler_404)
        .with_state(state)
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::analytics_repository::AnalyticsRepository;
    use crate::application::report_service::ReportGenerator;
    use crate::domain::metric::{Metric, MetricRecord};
    use crate::domain::range::ReportRange;
    use crate::errors::AnalyticsError;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use tower::ServiceExt;

    struct StubGenerator;

    #[async_trait]
    impl ReportGenerator for StubGenerator {
        async fn generate(&self, client_name: &str, _periods: i64) -> anyhow::Result<PathBuf> {
            Ok(PathBuf::from(format!("{client_name}.pdf")))
        }
    }

    struct StubAnalytics;

    #[async_trait]
    impl AnalyticsRepository for StubAnalytics {
        async fn fetch_metric(
            &self,
            metric: Metric,
            _zone_tag: &str,
            _range: &ReportRange,
        ) -> Result<MetricRecord, AnalyticsError> {
            Ok(metric.record(vec![("2025-02-18".to_string(), 1)]))
        }

        async fn list_zones(&self) -> Result<HashMap<String, String>, AnalyticsError> {
            Ok(HashMap::from([(
                "example.com".to_string(),
                "0123abcd".to_string(),
            )]))
        }

        async fn list_accounts(&self) -> Result<HashMap<String, String>, AnalyticsError> {
            Err(AnalyticsError::Api("token lacks account scope".to_string()))
        }
    }

    fn test_router() -> Router {
        app_router(Arc::new(AppState {
            reports: Arc::new(StubGenerator),
            analytics: Arc::new(StubAnalytics),
            assets_dir: PathBuf::from("assets"),
        }))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn report_endpoint_requires_both_parameters() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/get_report?period=7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("Cliente y período requeridos"));
    }

    #[tokio::test]
    async fn report_endpoint_confirms_generation() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/get_report?client=acme&period=7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Reporte generado."));
    }

    #[tokio::test]
    async fn report_endpoint_rejects_a_non_numeric_period() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/get_report?client=acme&period=week")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn zone_listing_is_served_as_json() {
        let response = test_router()
            .oneshot(Request::builder().uri("/zones").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("example.com"));
    }

    #[tokio::test]
    async fn listing_failures_surface_as_server_errors() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/accounts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unknown_routes_fall_back_to_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
