// HTTP request handlers
use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json,
    body::Body,
    extract::{Query, State},
    http::{HeaderValue, Response, StatusCode, header},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::domain::metric::Metric;
use crate::errors::AnalyticsError;
use crate::presentation::app_state::AppState;

#[derive(Deserialize)]
pub struct ReportQuery {
    pub client: Option<String>,
    pub period: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Home page
pub async fn home() -> Html<&'static str> {
    Html("<h1>Reportes de red</h1><p>Servicio de reportes de tráfico CDN.</p>")
}

/// Admin page, listing the metric catalog a report is built from
pub async fn admin() -> Html<String> {
    let catalog: String = Metric::ALL
        .iter()
        .map(|metric| format!("<li>{}</li>", metric.title()))
        .collect();
    Html(format!(
        "<h1>Administración</h1><p>Zonas y cuentas disponibles en /zones y /accounts.</p><ul>{catalog}</ul>"
    ))
}

/// Report page
pub async fn report_page() -> Html<&'static str> {
    Html("<h1>Reporte</h1><p>Genere un reporte con /get_report?client=..&period=..</p>")
}

/// User page
pub async fn user_page() -> Html<&'static str> {
    Html("<h1>Usuario</h1>")
}

/// Build a report for a client over the given number of daily periods
pub async fn generate_report(
    Query(query): Query<ReportQuery>,
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Html<String>) {
    let client = query.client.filter(|value| !value.is_empty());
    let period = query.period.filter(|value| !value.is_empty());
    let (Some(client), Some(period)) = (client, period) else {
        return (
            StatusCode::BAD_REQUEST,
            Html("<p style='color: red;'>Error: Cliente y período requeridos</p>".to_string()),
        );
    };
    let Ok(periods) = period.parse::<i64>() else {
        return (
            StatusCode::BAD_REQUEST,
            Html("<p style='color: red;'>Error: Período inválido</p>".to_string()),
        );
    };

    match state.reports.generate(&client, periods).await {
        Ok(_) => (
            StatusCode::OK,
            Html("<p style='color: green;'>Reporte generado.</p>".to_string()),
        ),
        Err(err) => {
            tracing::error!("report generation for '{}' failed: {:#}", client, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("<p style='color: red;'>Error: {err}</p>")),
            )
        }
    }
}

/// List zones reachable with the configured token
pub async fn list_zones(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HashMap<String, String>>, (StatusCode, String)> {
    state
        .analytics
        .list_zones()
        .await
        .map(Json)
        .map_err(listing_error)
}

/// List accounts reachable with the configured token
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HashMap<String, String>>, (StatusCode, String)> {
    state
        .analytics
        .list_accounts()
        .await
        .map(Json)
        .map_err(listing_error)
}

fn listing_error(err: AnalyticsError) -> (StatusCode, String) {
    tracing::error!("listing failed: {err}");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

/// Download the current report artifact as an attachment
pub async fn download_report(State(state): State<Arc<AppState>>) -> Response<Body> {
    let path = state.assets_dir.join("report.pdf");
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("report artifact {} unavailable: {}", path.display(), err);
            return (StatusCode::NOT_FOUND, "report not found").into_response();
        }
    };

    let length = bytes.len();
    match Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=\"report.pdf\""),
        )
        .header(header::CONTENT_LENGTH, length)
        .body(Body::from(bytes))
    {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("response build error: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
