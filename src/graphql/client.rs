//! SpaceX GraphQL client.
//!
//! Speaks the public SpaceX GraphQL schema over HTTPS:
//! - `launchesPast(limit:)` for the bounded historical list
//! - `launchLatest` for the single nullable most-recent launch
//!
//! The query documents are static strings; `limit` travels as a GraphQL
//! variable. One outbound request per call, no retry, no response caching.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::source::{FetchError, LaunchSource};
use super::types::{LaunchRecord, RawLaunch};

pub const DEFAULT_ENDPOINT: &str = "https://spacex-production.up.railway.app/";

const PAST_LAUNCHES_QUERY: &str = "\
query PastLaunches($limit: Int!) {
  launchesPast(limit: $limit) {
    mission_name
    launch_date_utc
    details
    launch_site { site_name_long }
    links { article_link video_link }
    rocket { rocket_name }
  }
}";

const LATEST_LAUNCH_QUERY: &str = "\
query LatestLaunch {
  launchLatest {
    mission_name
    launch_date_utc
    links { article_link video_link }
    rocket { rocket_name }
  }
}";

// ============================================================================
// GraphQL Envelope Types
// ============================================================================

#[derive(Serialize, Debug)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

/// Standard GraphQL response envelope. A reply may carry `data`, `errors`,
/// or both; anything with `errors` is treated as unusable here.
#[derive(Deserialize, Debug)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize, Debug)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize, Debug)]
struct PastLaunchesData {
    #[serde(rename = "launchesPast")]
    launches_past: Option<Vec<RawLaunch>>,
}

#[derive(Deserialize, Debug)]
struct LatestLaunchData {
    #[serde(rename = "launchLatest")]
    launch_latest: Option<RawLaunch>,
}

// ============================================================================
// Client Implementation
// ============================================================================

/// Client for the public SpaceX GraphQL API. No auth, no persistent state,
/// just an endpoint and a connection pool.
pub struct SpaceXClient {
    endpoint: String,
    client: reqwest::Client,
}

impl SpaceXClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `endpoint` - Optional custom endpoint URL (defaults to the public API)
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// POSTs one GraphQL document and decodes the `data` payload.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &'static str,
        variables: serde_json::Value,
    ) -> Result<T, FetchError> {
        let request = GraphQlRequest { query, variables };
        debug!("GraphQL request to {}: {:?}", self.endpoint, request);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("GraphQL response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("GraphQL endpoint error: {} - {}", status, message);
            return Err(FetchError::Api { status, message });
        }

        let envelope: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        if let Some(err) = envelope.errors.first() {
            warn!("GraphQL query rejected: {}", err.message);
            return Err(FetchError::Malformed(format!(
                "GraphQL error: {}",
                err.message
            )));
        }

        envelope.data.ok_or_else(|| {
            FetchError::Malformed("response carried neither data nor errors".to_string())
        })
    }
}

#[async_trait]
impl LaunchSource for SpaceXClient {
    fn name(&self) -> &str {
        "spacex"
    }

    async fn fetch_past(&self, limit: u32) -> Result<Vec<LaunchRecord>, FetchError> {
        info!("Fetching up to {} past launches", limit);
        let data: PastLaunchesData = self
            .execute(PAST_LAUNCHES_QUERY, json!({ "limit": limit }))
            .await?;
        let raw = data.launches_past.ok_or_else(|| {
            FetchError::Malformed("launchesPast field missing or null".to_string())
        })?;
        let records = raw
            .into_iter()
            .map(RawLaunch::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        info!("Fetched {} past launches", records.len());
        Ok(records)
    }

    async fn fetch_latest(&self) -> Result<Option<LaunchRecord>, FetchError> {
        info!("Fetching latest launch");
        let data: LatestLaunchData = self.execute(LATEST_LAUNCH_QUERY, json!({})).await?;
        data.launch_latest.map(RawLaunch::into_record).transpose()
    }
}
