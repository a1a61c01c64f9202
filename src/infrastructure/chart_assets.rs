// Pre-rendered chart panel resolver
use std::path::PathBuf;

use crate::application::chart_renderer::ChartRenderer;
use crate::domain::metric::MetricRecord;

/// Resolves report panels to the fixed-name images the charting pipeline
/// drops into the assets directory. A panel that has not been rendered is
/// an error, not a blank spot in the report.
pub struct PrerenderedCharts {
    assets_dir: PathBuf,
}

impl PrerenderedCharts {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    fn panel(&self, file_name: &str) -> anyhow::Result<PathBuf> {
        let path = self.assets_dir.join(file_name);
        if !path.is_file() {
            anyhow::bail!("chart panel {} has not been rendered", path.display());
        }
        Ok(path)
    }
}

impl ChartRenderer for PrerenderedCharts {
    fn requests_trend(
        &self,
        total: &MetricRecord,
        cached: &MetricRecord,
    ) -> anyhow::Result<PathBuf> {
        tracing::debug!(
            "requests panel: {} total, {} cached",
            total.formatted_total(),
            cached.formatted_total()
        );
        self.panel("report_requests.png")
    }

    fn bandwidth_trend(
        &self,
        total: &MetricRecord,
        cached: &MetricRecord,
    ) -> anyhow::Result<PathBuf> {
        tracing::debug!(
            "bandwidth panel: {} total, {} cached",
            total.formatted_total(),
            cached.formatted_total()
        );
        self.panel("report_bandwidth.png")
    }

    fn visits_summary(&self, visits: &MetricRecord) -> anyhow::Result<PathBuf> {
        tracing::debug!("visits panel: {} over the period", visits.formatted_total());
        self.panel("report_visits.png")
    }

    fn country_map(
        &self,
        requests: &MetricRecord,
        _bandwidth: &MetricRecord,
    ) -> anyhow::Result<PathBuf> {
        tracing::debug!("country panel: {} countries ranked", requests.content.len());
        self.panel("report_map.png")
    }

    fn delivery_breakdown(
        &self,
        http_versions: &MetricRecord,
        ssl_versions: &MetricRecord,
        content_types: &MetricRecord,
    ) -> anyhow::Result<PathBuf> {
        tracing::debug!(
            "delivery panel: {} protocols, {} ssl versions, {} content types",
            http_versions.content.len(),
            ssl_versions.content.len(),
            content_types.content.len()
        );
        self.panel("report_versions.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metric::Metric;

    fn record() -> MetricRecord {
        Metric::Requests.record(vec![("2025-02-18".to_string(), 100)])
    }

    #[test]
    fn missing_panels_are_an_error() {
        let charts = PrerenderedCharts::new("/nonexistent/assets");
        let err = charts.requests_trend(&record(), &record()).unwrap_err();
        assert!(err.to_string().contains("report_requests.png"));
    }

    #[test]
    fn rendered_panels_resolve_to_their_path() {
        let dir = std::env::temp_dir().join(format!("edge-report-panels-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("report_visits.png"), b"png").unwrap();

        let charts = PrerenderedCharts::new(&dir);
        let path = charts.visits_summary(&record()).unwrap();
        assert_eq!(path, dir.join("report_visits.png"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
