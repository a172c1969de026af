// Error taxonomy for the holiday alignment core.

use thiserror::Error;

/// Failures surfaced by the Holiday Source Client and the Holiday Aligner.
///
/// A closed set of variants so callers discriminate by kind instead of by
/// downcasting; [`HolidayError::class`] gives the boundary layer its
/// client-vs-server split.
#[derive(Error, Debug)]
pub enum HolidayError {
    /// A country code is not a valid ISO 3166-1 alpha-2 assignment.
    #[error("country codes validation failed")]
    InvalidInput,

    /// The provider answered 4xx: no holiday data available for this request.
    #[error("no holiday data available for this request")]
    NotFound,

    /// The merged holiday sets never coincide on any future date.
    #[error("can't find any holiday for both countries")]
    NoMatch,

    /// The provider answered 5xx (or an unexpected status); potentially transient.
    #[error("public holiday provider unavailable (status {status})")]
    UpstreamFailure { status: u16 },

    /// The selected date's pair of holidays did not cover both requested countries.
    #[error("empty response from Public Holiday API")]
    MalformedResult,

    /// Network-level failure talking to the provider.
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider's response body did not decode as a holiday list.
    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// How a failure should be reported at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The query was answerable in principle but failed: invalid input,
    /// unknown data, or no shared holiday.
    Client,
    /// The provider (or the path to it) failed; retriable from the caller's
    /// point of view.
    Server,
}

impl HolidayError {
    pub fn class(&self) -> ErrorClass {
        match self {
            HolidayError::InvalidInput | HolidayError::NotFound | HolidayError::NoMatch => {
                ErrorClass::Client
            }
            HolidayError::UpstreamFailure { .. }
            | HolidayError::MalformedResult
            | HolidayError::Transport(_)
            | HolidayError::Decode(_) => ErrorClass::Server,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.class() == ErrorClass::Client
    }
}

/// Construction-time failures of the concrete provider client.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("initialization error: {0}")]
    Init(#[from] reqwest::Error),
}
