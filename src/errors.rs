use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for the analytics pipeline.
///
/// Every variant propagates to the caller untouched; nothing here is
/// retried. The web layer decides which ones map to a 4xx.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("periods must be a non-negative integer, got {0}")]
    InvalidArgument(i64),

    #[error("invalid date '{value}': expected ISO 8601 format 'YYYY-MM-DD'")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("analytics API returned HTTP {status}: {body}")]
    Transport { status: StatusCode, body: String },

    #[error("analytics API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("analytics API error: {0}")]
    Api(String),

    #[error("no analytics data available for the requested period")]
    EmptyResult,

    #[error("unexpected response shape: {context}")]
    Malformed {
        context: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl AnalyticsError {
    pub fn malformed(context: impl Into<String>) -> Self {
        Self::Malformed {
            context: context.into(),
            source: None,
        }
    }

    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Malformed {
            context: context.into(),
            source: Some(source),
        }
    }
}
