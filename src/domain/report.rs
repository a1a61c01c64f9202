// Report composition domain models
use std::path::PathBuf;

use super::metric::MetricRecord;

/// The complete metric set one report is built from, fetched in a single
/// sequential pass over the analytics API.
#[derive(Debug, Clone)]
pub struct ZoneMetrics {
    pub requests: MetricRecord,
    pub cached_requests: MetricRecord,
    pub bandwidth: MetricRecord,
    pub cached_bandwidth: MetricRecord,
    pub encrypted_requests: MetricRecord,
    pub encrypted_bandwidth: MetricRecord,
    pub visits: MetricRecord,
    pub page_views: MetricRecord,
    pub requests_by_country: MetricRecord,
    pub bandwidth_by_country: MetricRecord,
    pub http_versions: MetricRecord,
    pub ssl_versions: MetricRecord,
    pub content_types: MetricRecord,
    pub client_errors: MetricRecord,
    pub server_errors: MetricRecord,
}

/// Paths of the rendered panel images placed into the report pages.
#[derive(Debug, Clone)]
pub struct ReportCharts {
    pub requests_trend: PathBuf,
    pub bandwidth_trend: PathBuf,
    pub visits: PathBuf,
    pub country_map: PathBuf,
    pub delivery: PathBuf,
}

/// Error and encryption figures for the security section of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct SecuritySummary {
    pub client_errors: u64,
    pub server_errors: u64,
    pub encrypted_request_share: Option<f64>,
    pub encrypted_bandwidth_share: Option<f64>,
}

impl SecuritySummary {
    pub fn from_metrics(metrics: &ZoneMetrics) -> Self {
        Self {
            client_errors: metrics.client_errors.total(),
            server_errors: metrics.server_errors.total(),
            encrypted_request_share: share(
                metrics.encrypted_requests.total(),
                metrics.requests.total(),
            ),
            encrypted_bandwidth_share: share(
                metrics.encrypted_bandwidth.total(),
                metrics.bandwidth.total(),
            ),
        }
    }

    pub fn headline(&self) -> String {
        format!(
            "Errores 4xx: {} | Errores 5xx: {} | Solicitudes cifradas: {} | Ancho de banda cifrado: {}",
            self.client_errors,
            self.server_errors,
            format_share(self.encrypted_request_share),
            format_share(self.encrypted_bandwidth_share),
        )
    }
}

fn share(part: u64, whole: u64) -> Option<f64> {
    (whole > 0).then(|| part as f64 * 100.0 / whole as f64)
}

fn format_share(share: Option<f64>) -> String {
    match share {
        Some(value) => format!("{value:.1}%"),
        None => "n/d".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metric::Metric;

    fn single(metric: Metric, value: u64) -> MetricRecord {
        metric.record(vec![("2025-02-18".to_string(), value)])
    }

    fn sample_metrics() -> ZoneMetrics {
        ZoneMetrics {
            requests: single(Metric::Requests, 1000),
            cached_requests: single(Metric::CachedRequests, 100),
            bandwidth: single(Metric::Bandwidth, 2000),
            cached_bandwidth: single(Metric::CachedBandwidth, 200),
            encrypted_requests: single(Metric::EncryptedRequests, 935),
            encrypted_bandwidth: single(Metric::EncryptedBandwidth, 1000),
            visits: single(Metric::Visits, 170),
            page_views: single(Metric::PageViews, 250),
            requests_by_country: single(Metric::RequestsByCountry, 700),
            bandwidth_by_country: single(Metric::BandwidthByCountry, 1500),
            http_versions: single(Metric::HttpVersions, 900),
            ssl_versions: single(Metric::SslVersions, 900),
            content_types: single(Metric::ContentTypes, 900),
            client_errors: single(Metric::ClientErrors, 3),
            server_errors: single(Metric::ServerErrors, 2),
        }
    }

    #[test]
    fn summary_derives_totals_and_shares() {
        let summary = SecuritySummary::from_metrics(&sample_metrics());
        assert_eq!(summary.client_errors, 3);
        assert_eq!(summary.server_errors, 2);
        assert_eq!(summary.encrypted_request_share, Some(93.5));
        assert_eq!(summary.encrypted_bandwidth_share, Some(50.0));
    }

    #[test]
    fn zero_traffic_yields_no_share() {
        let mut metrics = sample_metrics();
        metrics.requests = Metric::Requests.record(vec![("2025-02-18".to_string(), 0)]);
        let summary = SecuritySummary::from_metrics(&metrics);
        assert_eq!(summary.encrypted_request_share, None);
        assert!(summary.headline().contains("n/d"));
    }

    #[test]
    fn headline_reports_error_totals() {
        let summary = SecuritySummary::from_metrics(&sample_metrics());
        assert!(summary.headline().contains("Errores 4xx: 3"));
        assert!(summary.headline().contains("Errores 5xx: 2"));
    }
}
