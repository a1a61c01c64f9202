// Metric domain models

/// How the values of a metric should be read and formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Numeric,
    Byte,
}

/// A normalized metric ready for charting: a title, an ordered list of
/// key/value pairs and the kind of its values. Keys are either ISO dates
/// (time series) or category labels (country, protocol, content type).
///
/// A record is never empty when the upstream call succeeds; an empty data
/// set surfaces as an error instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRecord {
    pub title: String,
    pub content: Vec<(String, u64)>,
    pub kind: ValueKind,
}

impl MetricRecord {
    pub fn new(title: impl Into<String>, content: Vec<(String, u64)>, kind: ValueKind) -> Self {
        Self {
            title: title.into(),
            content,
            kind,
        }
    }

    /// Sum of all values over the period.
    pub fn total(&self) -> u64 {
        self.content.iter().map(|(_, value)| value).sum()
    }

    /// Total formatted for display, e.g. `12.3K` or `75.0 MB`.
    pub fn formatted_total(&self) -> String {
        format_value(self.total(), self.kind)
    }
}

/// Formats a metric value for summary display. Numeric values render in
/// thousands, byte values in megabytes.
pub fn format_value(value: u64, kind: ValueKind) -> String {
    match kind {
        ValueKind::Numeric => format!("{:.1}K", value as f64 / 1000.0),
        ValueKind::Byte => format!("{:.1} MB", value as f64 / (1024.0 * 1024.0)),
    }
}

/// Sorts entries by descending value and optionally keeps the `keep`
/// largest ones. The sort is stable, so equal values keep their original
/// (first seen) order.
pub fn rank_descending(
    mut content: Vec<(String, u64)>,
    keep: Option<usize>,
) -> Vec<(String, u64)> {
    content.sort_by(|a, b| b.1.cmp(&a.1));
    if let Some(n) = keep {
        content.truncate(n);
    }
    content
}

/// The full metric catalog of a report. Each variant pairs a fixed query
/// with a reduction over the response; the title and value kind live here,
/// the query text and reducers live with the API client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Requests,
    CachedRequests,
    Bandwidth,
    CachedBandwidth,
    EncryptedRequests,
    EncryptedBandwidth,
    Visits,
    PageViews,
    RequestsByCountry,
    BandwidthByCountry,
    HttpVersions,
    SslVersions,
    ContentTypes,
    ClientErrors,
    ServerErrors,
}

impl Metric {
    pub const ALL: [Metric; 15] = [
        Metric::Requests,
        Metric::CachedRequests,
        Metric::Bandwidth,
        Metric::CachedBandwidth,
        Metric::EncryptedRequests,
        Metric::EncryptedBandwidth,
        Metric::Visits,
        Metric::PageViews,
        Metric::RequestsByCountry,
        Metric::BandwidthByCountry,
        Metric::HttpVersions,
        Metric::SslVersions,
        Metric::ContentTypes,
        Metric::ClientErrors,
        Metric::ServerErrors,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Metric::Requests => "Requests",
            Metric::CachedRequests => "Cached Requests",
            Metric::Bandwidth => "Bandwidth",
            Metric::CachedBandwidth => "Cached Bandwidth",
            Metric::EncryptedRequests => "Encrypted Requests",
            Metric::EncryptedBandwidth => "Encrypted Bandwidth",
            Metric::Visits => "Visits",
            Metric::PageViews => "Views",
            Metric::RequestsByCountry => "Requests per country",
            Metric::BandwidthByCountry => "Bandwidth per country",
            Metric::HttpVersions => "HTTP Versions",
            Metric::SslVersions => "SSL Versions",
            Metric::ContentTypes => "Content Type",
            Metric::ClientErrors => "400 Errors",
            Metric::ServerErrors => "500 Errors",
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            Metric::Bandwidth
            | Metric::CachedBandwidth
            | Metric::EncryptedBandwidth
            | Metric::BandwidthByCountry => ValueKind::Byte,
            _ => ValueKind::Numeric,
        }
    }

    /// Wraps reduced content into a record carrying this metric's title
    /// and value kind.
    pub fn record(self, content: Vec<(String, u64)>) -> MetricRecord {
        MetricRecord::new(self.title(), content, self.kind())
    }
}
