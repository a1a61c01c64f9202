// Repository trait for traffic analytics access
use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::metric::{Metric, MetricRecord};
use crate::domain::range::ReportRange;
use crate::errors::AnalyticsError;

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Fetch one metric for a zone over a date range and reduce it into a
    /// normalized record. Each call is an independent round trip; repeating
    /// it re-fetches from the upstream source.
    async fn fetch_metric(
        &self,
        metric: Metric,
        zone_tag: &str,
        range: &ReportRange,
    ) -> Result<MetricRecord, AnalyticsError>;

    /// All zones reachable with the configured token, as name to id pairs.
    async fn list_zones(&self) -> Result<HashMap<String, String>, AnalyticsError>;

    /// All accounts reachable with the configured token, as name to id pairs.
    async fn list_accounts(&self) -> Result<HashMap<String, String>, AnalyticsError>;
}
