// Report service - Use case for building a client report
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::analytics_repository::AnalyticsRepository;
use crate::application::chart_renderer::ChartRenderer;
use crate::domain::client::Client;
use crate::domain::metric::Metric;
use crate::domain::range::ReportRange;
use crate::domain::report::{ReportCharts, ZoneMetrics};
use crate::errors::AnalyticsError;
use crate::infrastructure::pdf_report::ReportAssembler;

/// Entry point the web layer drives report generation through.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate(&self, client_name: &str, periods: i64) -> anyhow::Result<PathBuf>;
}

pub struct ReportService {
    analytics: Arc<dyn AnalyticsRepository>,
    renderer: Arc<dyn ChartRenderer>,
    assembler: ReportAssembler,
    clients: HashMap<String, String>,
}

impl ReportService {
    pub fn new(
        analytics: Arc<dyn AnalyticsRepository>,
        renderer: Arc<dyn ChartRenderer>,
        assembler: ReportAssembler,
        clients: HashMap<String, String>,
    ) -> Self {
        Self {
            analytics,
            renderer,
            assembler,
            clients,
        }
    }

    fn resolve_client(&self, client_name: &str) -> anyhow::Result<Client> {
        let zone_tag = self
            .clients
            .get(client_name)
            .ok_or_else(|| anyhow::anyhow!("unknown client '{client_name}'"))?;
        Ok(Client::new(client_name, zone_tag))
    }

    async fn collect_metrics(
        &self,
        zone_tag: &str,
        range: &ReportRange,
    ) -> Result<ZoneMetrics, AnalyticsError> {
        let fetch = |metric| self.analytics.fetch_metric(metric, zone_tag, range);
        Ok(ZoneMetrics {
            requests: fetch(Metric::Requests).await?,
            cached_requests: fetch(Metric::CachedRequests).await?,
            bandwidth: fetch(Metric::Bandwidth).await?,
            cached_bandwidth: fetch(Metric::CachedBandwidth).await?,
            encrypted_requests: fetch(Metric::EncryptedRequests).await?,
            encrypted_bandwidth: fetch(Metric::EncryptedBandwidth).await?,
            visits: fetch(Metric::Visits).await?,
            page_views: fetch(Metric::PageViews).await?,
            requests_by_country: fetch(Metric::RequestsByCountry).await?,
            bandwidth_by_country: fetch(Metric::BandwidthByCountry).await?,
            http_versions: fetch(Metric::HttpVersions).await?,
            ssl_versions: fetch(Metric::SslVersions).await?,
            content_types: fetch(Metric::ContentTypes).await?,
            client_errors: fetch(Metric::ClientErrors).await?,
            server_errors: fetch(Metric::ServerErrors).await?,
        })
    }

    fn render_charts(&self, metrics: &ZoneMetrics) -> anyhow::Result<ReportCharts> {
        Ok(ReportCharts {
            requests_trend: self
                .renderer
                .requests_trend(&metrics.requests, &metrics.cached_requests)?,
            bandwidth_trend: self
                .renderer
                .bandwidth_trend(&metrics.bandwidth, &metrics.cached_bandwidth)?,
            visits: self.renderer.visits_summary(&metrics.visits)?,
            country_map: self
                .renderer
                .country_map(&metrics.requests_by_country, &metrics.bandwidth_by_country)?,
            delivery: self.renderer.delivery_breakdown(
                &metrics.http_versions,
                &metrics.ssl_versions,
                &metrics.content_types,
            )?,
        })
    }
}

#[async_trait]
impl ReportGenerator for ReportService {
    async fn generate(&self, client_name: &str, periods: i64) -> anyhow::Result<PathBuf> {
        let client = self.resolve_client(client_name)?;
        let today = Utc::now().date_naive();
        let range = ReportRange::ending_at(&today.format("%Y-%m-%d").to_string(), periods)?;

        tracing::info!(
            "building report for '{}' over {} to {}",
            client.display_name(),
            range.since(),
            range.until()
        );

        let metrics = self.collect_metrics(&client.zone_tag, &range).await?;
        let charts = self.render_charts(&metrics)?;
        let path = self.assembler.write_report(&client, today, &metrics, &charts)?;

        tracing::info!("report written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metric::MetricRecord;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingAnalytics {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AnalyticsRepository for CountingAnalytics {
        async fn fetch_metric(
            &self,
            metric: Metric,
            _zone_tag: &str,
            _range: &ReportRange,
        ) -> Result<MetricRecord, AnalyticsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(metric.record(vec![("2025-02-18".to_string(), 1)]))
        }

        async fn list_zones(&self) -> Result<HashMap<String, String>, AnalyticsError> {
            Ok(HashMap::new())
        }

        async fn list_accounts(&self) -> Result<HashMap<String, String>, AnalyticsError> {
            Ok(HashMap::new())
        }
    }

    struct NullRenderer;

    impl ChartRenderer for NullRenderer {
        fn requests_trend(
            &self,
            _total: &MetricRecord,
            _cached: &MetricRecord,
        ) -> anyhow::Result<PathBuf> {
            Ok(PathBuf::from("requests.png"))
        }

        fn bandwidth_trend(
            &self,
            _total: &MetricRecord,
            _cached: &MetricRecord,
        ) -> anyhow::Result<PathBuf> {
            Ok(PathBuf::from("bandwidth.png"))
        }

        fn visits_summary(&self, _visits: &MetricRecord) -> anyhow::Result<PathBuf> {
            Ok(PathBuf::from("visits.png"))
        }

        fn country_map(
            &self,
            _requests: &MetricRecord,
            _bandwidth: &MetricRecord,
        ) -> anyhow::Result<PathBuf> {
            Ok(PathBuf::from("map.png"))
        }

        fn delivery_breakdown(
            &self,
            _http_versions: &MetricRecord,
            _ssl_versions: &MetricRecord,
            _content_types: &MetricRecord,
        ) -> anyhow::Result<PathBuf> {
            Ok(PathBuf::from("versions.png"))
        }
    }

    fn service_with(clients: HashMap<String, String>) -> (ReportService, Arc<CountingAnalytics>) {
        let analytics = Arc::new(CountingAnalytics {
            calls: AtomicUsize::new(0),
        });
        let service = ReportService::new(
            analytics.clone(),
            Arc::new(NullRenderer),
            ReportAssembler::default(),
            clients,
        );
        (service, analytics)
    }

    #[tokio::test]
    async fn unknown_clients_are_rejected_before_any_fetch() {
        let (service, analytics) = service_with(HashMap::new());
        let err = service.generate("nobody", 7).await.unwrap_err();
        assert!(err.to_string().contains("unknown client"));
        assert_eq!(analytics.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn collecting_metrics_covers_the_full_catalog() {
        let (service, analytics) = service_with(HashMap::new());
        let range = ReportRange::ending_at("2025-02-23", 7).unwrap();
        let metrics = service.collect_metrics("0123abcd", &range).await.unwrap();
        assert_eq!(analytics.calls.load(Ordering::SeqCst), Metric::ALL.len());
        assert_eq!(metrics.requests.title, "Requests");
        assert_eq!(metrics.server_errors.title, "500 Errors");
    }
}
