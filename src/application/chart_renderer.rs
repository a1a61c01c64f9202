// Renderer trait for the report's chart panels
use std::path::PathBuf;

use crate::domain::metric::MetricRecord;

/// Produces the raster panels a report embeds. Implementations receive
/// normalized records and return the path of a rendered image; the
/// rasterization itself is an external concern.
pub trait ChartRenderer: Send + Sync {
    /// Requests over time with the cached portion overlaid.
    fn requests_trend(
        &self,
        total: &MetricRecord,
        cached: &MetricRecord,
    ) -> anyhow::Result<PathBuf>;

    /// Bandwidth over time with the cached portion overlaid.
    fn bandwidth_trend(
        &self,
        total: &MetricRecord,
        cached: &MetricRecord,
    ) -> anyhow::Result<PathBuf>;

    /// Unique visitors over time with period summary figures.
    fn visits_summary(&self, visits: &MetricRecord) -> anyhow::Result<PathBuf>;

    /// Country table plus shaded world map.
    fn country_map(
        &self,
        requests: &MetricRecord,
        bandwidth: &MetricRecord,
    ) -> anyhow::Result<PathBuf>;

    /// Protocol pies and content type bars.
    fn delivery_breakdown(
        &self,
        http_versions: &MetricRecord,
        ssl_versions: &MetricRecord,
        content_types: &MetricRecord,
    ) -> anyhow::Result<PathBuf>;
}
