// Holiday Source Client: fetches one country's public holidays from the
// external provider and applies the year-forward retry policy.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use reqwest::StatusCode;

use crate::config::ClientConfig;
use crate::error::{ClientError, HolidayError};
use crate::model::PublicHoliday;

/// A source of public holiday data, one calendar year per lookup.
///
/// Implementors provide the raw per-year fetch; [`holidays_after`] layers the
/// strictly-future filter and the one-shot retry-forward policy on top.
///
/// [`holidays_after`]: HolidaySource::holidays_after
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetch every public holiday of `country_code` for `year`, in provider
    /// response order.
    async fn holidays_for_year(
        &self,
        year: i32,
        country_code: &str,
    ) -> Result<Vec<PublicHoliday>, HolidayError>;

    /// Fetch the holidays of `country_code` falling strictly after `date`.
    ///
    /// Looks up the calendar year of `date` first. If nothing in that year
    /// lies after `date` (queries near year-end exhaust the published list),
    /// the reference moves to January 1 of the following year and that year
    /// is fetched once; the original `date` still bounds the filter, so a
    /// past or same-day holiday is never returned. Provider errors are not
    /// retried.
    async fn holidays_after(
        &self,
        date: NaiveDate,
        country_code: &str,
    ) -> Result<Vec<PublicHoliday>, HolidayError> {
        let holidays = self.holidays_for_year(date.year(), country_code).await?;
        let mut future = strictly_after(holidays, date);

        if future.is_empty() {
            let next_year = date.year() + 1;
            tracing::debug!(
                country_code,
                next_year,
                "no future holidays in requested year, retrying forward"
            );
            let retried = self.holidays_for_year(next_year, country_code).await?;
            future = strictly_after(retried, date);
        }

        Ok(future)
    }
}

fn strictly_after(holidays: Vec<PublicHoliday>, date: NaiveDate) -> Vec<PublicHoliday> {
    holidays.into_iter().filter(|h| h.date > date).collect()
}

/// HTTP client for the Nager.Date public holiday API.
///
/// Stateless between invocations apart from the shared connection pool.
pub struct NagerClient {
    http: reqwest::Client,
    base_url: String,
}

impl NagerClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url must not be empty".into()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl HolidaySource for NagerClient {
    async fn holidays_for_year(
        &self,
        year: i32,
        country_code: &str,
    ) -> Result<Vec<PublicHoliday>, HolidayError> {
        let url = format!("{}/{}/{}", self.base_url, year, country_code);
        tracing::debug!(%url, "fetching public holidays");

        let response = self.http.get(&url).send().await?;
        classify_status(response.status())?;

        let body = response.text().await?;
        decode_holidays(&body)
    }
}

fn classify_status(status: StatusCode) -> Result<(), HolidayError> {
    if status.is_success() {
        Ok(())
    } else if status.is_client_error() {
        Err(HolidayError::NotFound)
    } else {
        Err(HolidayError::UpstreamFailure {
            status: status.as_u16(),
        })
    }
}

fn decode_holidays(body: &str) -> Result<Vec<PublicHoliday>, HolidayError> {
    // An unpublished year comes back as a 2xx with an empty body; treat it as
    // an empty list so the retry-forward policy engages.
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(body)?)
}
