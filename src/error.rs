use reqwest::StatusCode;

use crate::model::Platform;

/// All errors that can occur while fetching profile statistics.
///
/// Every variant names the platform and the submitted username so that
/// user-visible failure messages carry both.
#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    /// The username was rejected before any network call was made.
    #[error("{platform}: invalid username {username:?}")]
    InvalidInput { platform: Platform, username: String },

    /// The platform confirmed that no such user exists.
    #[error("user {username:?} not found on {platform}")]
    NotFound { platform: Platform, username: String },

    /// The platform answered with a non-success status other than 404.
    #[error("{platform} returned status {status} for {username:?}: {body}")]
    Upstream {
        platform: Platform,
        username: String,
        status: StatusCode,
        body: String,
    },

    /// The request failed at the transport level (network, DNS, TLS).
    #[error("request to {platform} failed for {username:?}: {source}")]
    Http {
        platform: Platform,
        username: String,
        source: reqwest::Error,
    },

    /// The explicit per-request time budget was exceeded (LeetCode only).
    #[error("request to {platform} timed out for {username:?}")]
    Timeout { platform: Platform, username: String },

    /// A response was received but the expected structure was absent.
    #[error("failed to parse {platform} response for {username:?}: {context}")]
    Parse {
        platform: Platform,
        username: String,
        context: String,
    },
}

impl StatsError {
    /// HTTP-style status code for callers that frame these errors as
    /// responses: 400 invalid input, 404 not found, upstream status
    /// passthrough, 502 transport failure, 504 timeout, 500 parse failure.
    pub fn status_code(&self) -> u16 {
        match self {
            StatsError::InvalidInput { .. } => 400,
            StatsError::NotFound { .. } => 404,
            StatsError::Upstream { status, .. } => status.as_u16(),
            StatsError::Http { .. } => 502,
            StatsError::Timeout { .. } => 504,
            StatsError::Parse { .. } => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
