//! Typed wire shapes for the analytics API.
//!
//! One group struct per query family instead of ad-hoc JSON walking, so a
//! shape mismatch fails during decoding with field context rather than
//! somewhere inside a reduction.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::errors::AnalyticsError;

#[derive(Debug, Deserialize)]
struct Envelope<G> {
    #[serde(default = "Option::default")]
    data: Option<ViewerData<G>>,
    #[serde(default = "Option::default")]
    errors: Option<Vec<ApiMessage>>,
}

#[derive(Debug, Deserialize)]
struct ViewerData<G> {
    viewer: Viewer<G>,
}

#[derive(Debug, Deserialize)]
struct Viewer<G> {
    zones: Vec<ZoneGroups<G>>,
}

#[derive(Debug, Deserialize)]
struct ZoneGroups<G> {
    #[serde(rename = "httpRequests1dGroups", default = "Option::default")]
    groups: Option<Vec<G>>,
}

#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Decodes a GraphQL response body down to its group list.
///
/// Distinguishes the three non-transport failure modes: an `errors`
/// payload, a structurally valid but empty result, and a shape the types
/// don't recognize.
pub fn decode_groups<G: DeserializeOwned>(body: &str) -> Result<Vec<G>, AnalyticsError> {
    let envelope: Envelope<G> = serde_json::from_str(body)
        .map_err(|err| AnalyticsError::decode("analytics response body", err))?;

    if let Some(errors) = envelope.errors {
        if !errors.is_empty() {
            let joined = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AnalyticsError::Api(joined));
        }
    }

    let data = envelope
        .data
        .ok_or_else(|| AnalyticsError::malformed("response carries neither data nor errors"))?;
    let zone = data
        .viewer
        .zones
        .into_iter()
        .next()
        .ok_or(AnalyticsError::EmptyResult)?;
    match zone.groups {
        Some(groups) if !groups.is_empty() => Ok(groups),
        _ => Err(AnalyticsError::EmptyResult),
    }
}

// Group family: per-date scalar aggregates.

#[derive(Debug, Deserialize)]
pub struct DayDimension {
    pub date: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScalarTotals {
    pub requests: Option<u64>,
    pub bytes: Option<u64>,
    pub cached_requests: Option<u64>,
    pub cached_bytes: Option<u64>,
    pub encrypted_requests: Option<u64>,
    pub encrypted_bytes: Option<u64>,
    pub page_views: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct DatedTotals {
    pub dimensions: DayDimension,
    pub sum: ScalarTotals,
}

// Group family: per-date unique visitors.

#[derive(Debug, Deserialize)]
pub struct UniqueVisitors {
    pub uniques: u64,
}

#[derive(Debug, Deserialize)]
pub struct DatedUniques {
    pub dimensions: DayDimension,
    pub uniq: UniqueVisitors,
}

// Group family: per-date category breakdowns, summed across the range.

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryMaps {
    pub country_map: Option<Vec<CountrySlice>>,
    #[serde(rename = "clientHTTPVersionMap")]
    pub client_http_version_map: Option<Vec<HttpVersionSlice>>,
    #[serde(rename = "clientSSLMap")]
    pub client_ssl_map: Option<Vec<SslSlice>>,
    pub content_type_map: Option<Vec<ContentTypeSlice>>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryTotals {
    pub sum: CategoryMaps,
}

#[derive(Debug, Deserialize)]
pub struct CountrySlice {
    #[serde(rename = "clientCountryName")]
    pub country: String,
    #[serde(default)]
    pub requests: Option<u64>,
    #[serde(default)]
    pub bytes: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct HttpVersionSlice {
    #[serde(rename = "clientHTTPProtocol")]
    pub protocol: String,
    pub requests: u64,
}

#[derive(Debug, Deserialize)]
pub struct SslSlice {
    #[serde(rename = "clientSSLProtocol")]
    pub protocol: String,
    pub requests: u64,
}

#[derive(Debug, Deserialize)]
pub struct ContentTypeSlice {
    #[serde(rename = "edgeResponseContentTypeName")]
    pub content_type: String,
    pub requests: u64,
}

// Group family: per-date response status breakdown.

#[derive(Debug, Deserialize)]
pub struct StatusTotals {
    #[serde(rename = "responseStatusMap")]
    pub statuses: Vec<StatusSlice>,
}

#[derive(Debug, Deserialize)]
pub struct DatedStatuses {
    pub dimensions: DayDimension,
    pub sum: StatusTotals,
}

#[derive(Debug, Deserialize)]
pub struct StatusSlice {
    #[serde(rename = "edgeResponseStatus")]
    pub status: u16,
    pub requests: u64,
}

// REST envelope for the account and zone listings.

#[derive(Debug, Deserialize)]
pub struct RestEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<RestError>,
    #[serde(default)]
    pub result: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
pub struct RestError {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(groups: serde_json::Value) -> String {
        serde_json::json!({
            "data": {"viewer": {"zones": [{"httpRequests1dGroups": groups}]}}
        })
        .to_string()
    }

    #[test]
    fn decodes_dated_totals() {
        let body = body(serde_json::json!([
            {"dimensions": {"date": "2025-02-18"}, "sum": {"requests": 100}},
            {"dimensions": {"date": "2025-02-19"}, "sum": {"requests": 200}},
        ]));
        let groups: Vec<DatedTotals> = decode_groups(&body).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].dimensions.date, "2025-02-18");
        assert_eq!(groups[0].sum.requests, Some(100));
        assert_eq!(groups[1].sum.bytes, None);
    }

    #[test]
    fn api_errors_take_precedence() {
        let body = serde_json::json!({
            "data": null,
            "errors": [{"message": "zone not authorized"}]
        })
        .to_string();
        let err = decode_groups::<DatedTotals>(&body).unwrap_err();
        match err {
            AnalyticsError::Api(message) => assert!(message.contains("zone not authorized")),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn missing_zones_signal_an_empty_result() {
        let body = serde_json::json!({
            "data": {"viewer": {"zones": []}}
        })
        .to_string();
        let err = decode_groups::<DatedTotals>(&body).unwrap_err();
        assert!(matches!(err, AnalyticsError::EmptyResult));
    }

    #[test]
    fn empty_group_list_signals_an_empty_result() {
        let body = body(serde_json::json!([]));
        let err = decode_groups::<DatedTotals>(&body).unwrap_err();
        assert!(matches!(err, AnalyticsError::EmptyResult));
    }

    #[test]
    fn unrecognized_shapes_are_malformed() {
        let err = decode_groups::<DatedTotals>("not even json").unwrap_err();
        assert!(matches!(err, AnalyticsError::Malformed { .. }));

        let body = body(serde_json::json!([{"sum": {"requests": 1}}]));
        let err = decode_groups::<DatedTotals>(&body).unwrap_err();
        assert!(matches!(err, AnalyticsError::Malformed { .. }));
    }

    #[test]
    fn data_absent_without_errors_is_malformed() {
        let err = decode_groups::<DatedTotals>("{}").unwrap_err();
        assert!(matches!(err, AnalyticsError::Malformed { .. }));
    }
}
