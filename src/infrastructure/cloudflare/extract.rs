//! Reductions from decoded group lists into ordered metric content.
//!
//! Per-date families map each group to one entry in API order; category
//! families accumulate a running total per key across all days, so the
//! result is independent of day ordering.

use crate::domain::metric::rank_descending;
use crate::errors::AnalyticsError;

use super::wire::{
    CategoryTotals, DatedStatuses, DatedTotals, DatedUniques, ScalarTotals,
};

/// The scalar aggregate a per-date query selects.
#[derive(Debug, Clone, Copy)]
pub enum DailyField {
    Requests,
    Bytes,
    CachedRequests,
    CachedBytes,
    EncryptedRequests,
    EncryptedBytes,
    PageViews,
}

impl DailyField {
    fn name(self) -> &'static str {
        match self {
            DailyField::Requests => "requests",
            DailyField::Bytes => "bytes",
            DailyField::CachedRequests => "cachedRequests",
            DailyField::CachedBytes => "cachedBytes",
            DailyField::EncryptedRequests => "encryptedRequests",
            DailyField::EncryptedBytes => "encryptedBytes",
            DailyField::PageViews => "pageViews",
        }
    }

    fn pick(self, sum: &ScalarTotals) -> Option<u64> {
        match self {
            DailyField::Requests => sum.requests,
            DailyField::Bytes => sum.bytes,
            DailyField::CachedRequests => sum.cached_requests,
            DailyField::CachedBytes => sum.cached_bytes,
            DailyField::EncryptedRequests => sum.encrypted_requests,
            DailyField::EncryptedBytes => sum.encrypted_bytes,
            DailyField::PageViews => sum.page_views,
        }
    }
}

/// Which value the country breakdown carries.
#[derive(Debug, Clone, Copy)]
pub enum CountryField {
    Requests,
    Bytes,
}

/// Which non-country breakdown list to accumulate.
#[derive(Debug, Clone, Copy)]
pub enum BreakdownMap {
    HttpVersions,
    SslVersions,
    ContentTypes,
}

impl BreakdownMap {
    fn name(self) -> &'static str {
        match self {
            BreakdownMap::HttpVersions => "clientHTTPVersionMap",
            BreakdownMap::SslVersions => "clientSSLMap",
            BreakdownMap::ContentTypes => "contentTypeMap",
        }
    }
}

/// Response status class of an error metric.
#[derive(Debug, Clone, Copy)]
pub enum StatusClass {
    ClientError,
    ServerError,
}

impl StatusClass {
    fn contains(self, status: u16) -> bool {
        match self {
            StatusClass::ClientError => (400..500).contains(&status),
            StatusClass::ServerError => (500..600).contains(&status),
        }
    }
}

pub fn daily_totals(
    groups: &[DatedTotals],
    field: DailyField,
) -> Result<Vec<(String, u64)>, AnalyticsError> {
    groups
        .iter()
        .map(|group| {
            let value = field.pick(&group.sum).ok_or_else(|| {
                AnalyticsError::malformed(format!(
                    "sum.{} missing for date {}",
                    field.name(),
                    group.dimensions.date
                ))
            })?;
            Ok((group.dimensions.date.clone(), value))
        })
        .collect()
}

pub fn daily_uniques(groups: &[DatedUniques]) -> Vec<(String, u64)> {
    groups
        .iter()
        .map(|group| (group.dimensions.date.clone(), group.uniq.uniques))
        .collect()
}

pub fn country_totals(
    groups: &[CategoryTotals],
    field: CountryField,
    keep: usize,
) -> Result<Vec<(String, u64)>, AnalyticsError> {
    let mut totals: Vec<(String, u64)> = Vec::new();
    for group in groups {
        let countries = group
            .sum
            .country_map
            .as_ref()
            .ok_or_else(|| AnalyticsError::malformed("sum.countryMap missing"))?;
        for slice in countries {
            let value = match field {
                CountryField::Requests => slice.requests,
                CountryField::Bytes => slice.bytes,
            }
            .ok_or_else(|| {
                AnalyticsError::malformed(format!(
                    "countryMap entry for {} lacks the selected value",
                    slice.country
                ))
            })?;
            bump(&mut totals, &slice.country, value);
        }
    }
    Ok(rank_descending(totals, Some(keep)))
}

pub fn breakdown_totals(
    groups: &[CategoryTotals],
    map: BreakdownMap,
) -> Result<Vec<(String, u64)>, AnalyticsError> {
    let mut totals: Vec<(String, u64)> = Vec::new();
    for group in groups {
        let missing = || AnalyticsError::malformed(format!("sum.{} missing", map.name()));
        match map {
            BreakdownMap::HttpVersions => {
                for slice in group.sum.client_http_version_map.as_ref().ok_or_else(missing)? {
                    bump(&mut totals, &slice.protocol, slice.requests);
                }
            }
            BreakdownMap::SslVersions => {
                for slice in group.sum.client_ssl_map.as_ref().ok_or_else(missing)? {
                    bump(&mut totals, &slice.protocol, slice.requests);
                }
            }
            BreakdownMap::ContentTypes => {
                for slice in group.sum.content_type_map.as_ref().ok_or_else(missing)? {
                    bump(&mut totals, &slice.content_type, slice.requests);
                }
            }
        }
    }
    Ok(totals)
}

pub fn status_class_totals(groups: &[DatedStatuses], class: StatusClass) -> Vec<(String, u64)> {
    groups
        .iter()
        .map(|group| {
            let total = group
                .sum
                .statuses
                .iter()
                .filter(|slice| class.contains(slice.status))
                .map(|slice| slice.requests)
                .sum();
            (group.dimensions.date.clone(), total)
        })
        .collect()
}

fn bump(totals: &mut Vec<(String, u64)>, key: &str, value: u64) {
    match totals.iter_mut().find(|(existing, _)| existing == key) {
        Some(entry) => entry.1 += value,
        None => totals.push((key.to_string(), value)),
    }
}
