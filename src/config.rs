// Client configuration for the public holiday provider.

use std::time::Duration;

/// Public Nager.Date v3 endpoint; one GET per (year, country code) pair,
/// appended as `/{year}/{countryCode}`.
pub const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3/PublicHolidays";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
