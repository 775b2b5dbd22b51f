use std::fmt;

use async_trait::async_trait;

use super::types::LaunchRecord;

/// Errors that can occur while fetching launch data.
///
/// An empty result set is not an error: it surfaces as `Ok` with an empty
/// list (or `Ok(None)` for the latest-launch query) and renders as a normal
/// session with zero cards.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The endpoint answered with a non-2xx status.
    Api { status: u16, message: String },
    /// A response arrived but does not match the expected shape: undecodable
    /// body, a GraphQL `errors` payload, or a missing/empty required field.
    Malformed(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Malformed(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// A source of launch records. Constructed once at process start and handed
/// to whatever owns session state; there is no global client instance.
#[async_trait]
pub trait LaunchSource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Fetches up to `limit` past launches, in the order the API returns
    /// them. No local re-ordering, no deduplication, no retry.
    async fn fetch_past(&self, limit: u32) -> Result<Vec<LaunchRecord>, FetchError>;

    /// Fetches the most recent launch. `Ok(None)` means the API has no
    /// launch on record, which is a valid outcome.
    async fn fetch_latest(&self) -> Result<Option<LaunchRecord>, FetchError>;
}
