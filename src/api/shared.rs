use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Greeting returned by the example endpoint.
pub const GREETING: &str = "Hello from go-echo backend!";

/// RFC 3339 with seconds precision, `Z` for UTC.
pub fn format_rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Debug, Serialize)]
pub struct ExampleResponse {
    pub message: String,
    pub timestamp: String,
}

impl ExampleResponse {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            message: GREETING.to_string(),
            timestamp: format_rfc3339(at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u64,
    pub environment: String,
    pub version: String,
}

impl HealthResponse {
    pub fn up(at: DateTime<Utc>, uptime: u64, environment: String) -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: format_rfc3339(at),
            uptime,
            environment,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub status: String,
}

impl ProbeResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}
