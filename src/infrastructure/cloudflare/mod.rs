// Cloudflare analytics client
pub mod extract;
pub mod queries;
pub mod wire;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::application::analytics_repository::AnalyticsRepository;
use crate::domain::metric::{Metric, MetricRecord};
use crate::domain::range::ReportRange;
use crate::errors::AnalyticsError;
use crate::infrastructure::config::ApiSettings;

use extract::{BreakdownMap, CountryField, DailyField, StatusClass};
use wire::{CategoryTotals, DatedStatuses, DatedTotals, DatedUniques, RestEnvelope};

#[derive(Debug, Clone)]
pub struct CloudflareAnalytics {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl CloudflareAnalytics {
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
        }
    }

    /// One POST round trip for a metric query, decoded down to the group
    /// list. No retries and no caching; every call re-fetches.
    async fn execute<G: DeserializeOwned>(
        &self,
        query: &'static str,
        zone_tag: &str,
        range: &ReportRange,
    ) -> Result<Vec<G>, AnalyticsError> {
        let payload = serde_json::json!({
            "query": query,
            "variables": {
                "zoneTag": zone_tag,
                "since": range.since(),
                "until": range.until(),
            },
        });

        let response = self
            .http
            .post(format!("{}/graphql", self.endpoint))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AnalyticsError::Transport { status, body });
        }

        wire::decode_groups(&body)
    }

    /// GET listing against the REST side of the API, mapped to name/id
    /// pairs. A 200 with `success: false` carries its own error payload.
    async fn rest_listing(&self, path: &str) -> Result<HashMap<String, String>, AnalyticsError> {
        let response = self
            .http
            .get(format!("{}/{}", self.endpoint, path))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AnalyticsError::Transport { status, body });
        }

        let envelope: RestEnvelope = serde_json::from_str(&body)
            .map_err(|err| AnalyticsError::decode(format!("{path} listing body"), err))?;
        if !envelope.success {
            let joined = envelope
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AnalyticsError::Api(joined));
        }

        Ok(envelope
            .result
            .into_iter()
            .map(|resource| (resource.name, resource.id))
            .collect())
    }

    async fn daily_total(
        &self,
        query: &'static str,
        field: DailyField,
        zone_tag: &str,
        range: &ReportRange,
    ) -> Result<Vec<(String, u64)>, AnalyticsError> {
        let groups: Vec<DatedTotals> = self.execute(query, zone_tag, range).await?;
        extract::daily_totals(&groups, field)
    }

    async fn country_total(
        &self,
        query: &'static str,
        field: CountryField,
        keep: usize,
        zone_tag: &str,
        range: &ReportRange,
    ) -> Result<Vec<(String, u64)>, AnalyticsError> {
        let groups: Vec<CategoryTotals> = self.execute(query, zone_tag, range).await?;
        extract::country_totals(&groups, field, keep)
    }

    async fn breakdown_total(
        &self,
        query: &'static str,
        map: BreakdownMap,
        zone_tag: &str,
        range: &ReportRange,
    ) -> Result<Vec<(String, u64)>, AnalyticsError> {
        let groups: Vec<CategoryTotals> = self.execute(query, zone_tag, range).await?;
        extract::breakdown_totals(&groups, map)
    }

    async fn status_total(
        &self,
        query: &'static str,
        class: StatusClass,
        zone_tag: &str,
        range: &ReportRange,
    ) -> Result<Vec<(String, u64)>, AnalyticsError> {
        let groups: Vec<DatedStatuses> = self.execute(query, zone_tag, range).await?;
        Ok(extract::status_class_totals(&groups, class))
    }
}

#[async_trait]
impl AnalyticsRepository for CloudflareAnalytics {
    async fn fetch_metric(
        &self,
        metric: Metric,
        zone_tag: &str,
        range: &ReportRange,
    ) -> Result<MetricRecord, AnalyticsError> {
        tracing::debug!(
            "fetching {} for zone {} ({} to {})",
            metric.title(),
            zone_tag,
            range.since(),
            range.until()
        );

        let content = match metric {
            Metric::Requests => {
                self.daily_total(queries::ZONE_REQUESTS, DailyField::Requests, zone_tag, range)
                    .await?
            }
            Metric::CachedRequests => {
                self.daily_total(
                    queries::CACHED_REQUESTS,
                    DailyField::CachedRequests,
                    zone_tag,
                    range,
                )
                .await?
            }
            Metric::Bandwidth => {
                self.daily_total(queries::ZONE_BANDWIDTH, DailyField::Bytes, zone_tag, range)
                    .await?
            }
            Metric::CachedBandwidth => {
                self.daily_total(
                    queries::CACHED_BANDWIDTH,
                    DailyField::CachedBytes,
                    zone_tag,
                    range,
                )
                .await?
            }
            Metric::EncryptedRequests => {
                self.daily_total(
                    queries::ENCRYPTED_REQUESTS,
                    DailyField::EncryptedRequests,
                    zone_tag,
                    range,
                )
                .await?
            }
            Metric::EncryptedBandwidth => {
                self.daily_total(
                    queries::ENCRYPTED_BANDWIDTH,
                    DailyField::EncryptedBytes,
                    zone_tag,
                    range,
                )
                .await?
            }
            Metric::PageViews => {
                self.daily_total(
                    queries::ZONE_PAGE_VIEWS,
                    DailyField::PageViews,
                    zone_tag,
                    range,
                )
                .await?
            }
            Metric::Visits => {
                let groups: Vec<DatedUniques> =
                    self.execute(queries::ZONE_VISITS, zone_tag, range).await?;
                extract::daily_uniques(&groups)
            }
            Metric::RequestsByCountry => {
                self.country_total(
                    queries::REQUESTS_BY_COUNTRY,
                    CountryField::Requests,
                    5,
                    zone_tag,
                    range,
                )
                .await?
            }
            Metric::BandwidthByCountry => {
                self.country_total(
                    queries::BANDWIDTH_BY_COUNTRY,
                    CountryField::Bytes,
                    10,
                    zone_tag,
                    range,
                )
                .await?
            }
            Metric::HttpVersions => {
                self.breakdown_total(
                    queries::HTTP_VERSIONS,
                    BreakdownMap::HttpVersions,
                    zone_tag,
                    range,
                )
                .await?
            }
            Metric::SslVersions => {
                self.breakdown_total(queries::SSL_TRAFFIC, BreakdownMap::SslVersions, zone_tag, range)
                    .await?
            }
            Metric::ContentTypes => {
                self.breakdown_total(
                    queries::CONTENT_TYPES,
                    BreakdownMap::ContentTypes,
                    zone_tag,
                    range,
                )
                .await?
            }
            Metric::ClientErrors => {
                self.status_total(queries::STATUS_4XX, StatusClass::ClientError, zone_tag, range)
                    .await?
            }
            Metric::ServerErrors => {
                self.status_total(queries::STATUS_5XX, StatusClass::ServerError, zone_tag, range)
                    .await?
            }
        };

        Ok(metric.record(content))
    }

    async fn list_zones(&self) -> Result<HashMap<String, String>, AnalyticsError> {
        self.rest_listing("zones").await
    }

    async fn list_accounts(&self) -> Result<HashMap<String, String>, AnalyticsError> {
        self.rest_listing("accounts").await
    }
}
