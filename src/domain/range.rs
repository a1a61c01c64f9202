// Report range domain model
use chrono::{Duration, NaiveDate};

use crate::errors::AnalyticsError;

/// Inclusive date range of a report, derived from an end date and a number
/// of daily periods. The upstream API takes date-only `since`/`until`
/// variables while the boundaries themselves carry explicit day-edge times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportRange {
    /// Builds the range ending at `end_date` (ISO 8601, `YYYY-MM-DD`) and
    /// spanning `periods` days backwards.
    ///
    /// Note: `periods = 0` produces a start one day after the end. Callers
    /// are expected to pass at least one period; the behavior is kept as-is
    /// and pinned by a test below.
    pub fn ending_at(end_date: &str, periods: i64) -> Result<Self, AnalyticsError> {
        if periods < 0 {
            return Err(AnalyticsError::InvalidArgument(periods));
        }
        let end = NaiveDate::parse_from_str(end_date, "%Y-%m-%d").map_err(|source| {
            AnalyticsError::InvalidDate {
                value: end_date.to_string(),
                source,
            }
        })?;
        let start = end - Duration::days(periods - 1);
        Ok(Self { start, end })
    }

    /// Lower boundary at the start of day, e.g. `2025-02-17T00:00:00Z`.
    pub fn geq_timestamp(&self) -> String {
        format!("{}T00:00:00Z", self.start.format("%Y-%m-%d"))
    }

    /// Upper boundary at the end of day, e.g. `2025-02-23T23:59:59Z`.
    pub fn leq_timestamp(&self) -> String {
        format!("{}T23:59:59Z", self.end.format("%Y-%m-%d"))
    }

    /// Date-only lower boundary used as the `since` query variable.
    pub fn since(&self) -> String {
        self.geq_timestamp()[..10].to_string()
    }

    /// Date-only upper boundary used as the `until` query variable.
    pub fn until(&self) -> String {
        self.leq_timestamp()[..10].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_periods_span_a_week() {
        let range = ReportRange::ending_at("2025-02-23", 7).unwrap();
        assert_eq!(range.since(), "2025-02-17");
        assert_eq!(range.until(), "2025-02-23");
        assert!(range.since() <= range.until());
    }

    #[test]
    fn boundaries_carry_day_edge_times() {
        let range = ReportRange::ending_at("2025-02-23", 7).unwrap();
        assert_eq!(range.geq_timestamp(), "2025-02-17T00:00:00Z");
        assert_eq!(range.leq_timestamp(), "2025-02-23T23:59:59Z");
    }

    #[test]
    fn single_period_is_a_single_day() {
        let range = ReportRange::ending_at("2025-02-23", 1).unwrap();
        assert_eq!(range.since(), range.until());
    }

    #[test]
    fn zero_periods_invert_the_range() {
        // Pinned behavior: start lands strictly one day after the end.
        let range = ReportRange::ending_at("2025-02-23", 0).unwrap();
        assert_eq!(range.since(), "2025-02-24");
        assert_eq!(range.until(), "2025-02-23");
        assert!(range.since() > range.until());
    }

    #[test]
    fn negative_periods_are_rejected() {
        let err = ReportRange::ending_at("2025-02-23", -1).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument(-1)));
    }

    #[test]
    fn unparsable_dates_are_rejected() {
        let err = ReportRange::ending_at("23/02/2025", 7).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidDate { .. }));
    }
}
