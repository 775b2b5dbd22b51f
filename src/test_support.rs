//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::state::App;
use crate::graphql::{FetchError, LaunchRecord, LaunchSource};

/// A canned in-memory source for tests that don't need real HTTP.
pub struct StaticSource {
    pub records: Vec<LaunchRecord>,
}

#[async_trait]
impl LaunchSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_past(&self, limit: u32) -> Result<Vec<LaunchRecord>, FetchError> {
        Ok(self.records.iter().take(limit as usize).cloned().collect())
    }

    async fn fetch_latest(&self) -> Result<Option<LaunchRecord>, FetchError> {
        Ok(self.records.first().cloned())
    }
}

/// A source whose every fetch fails at the transport level.
pub struct FailingSource;

#[async_trait]
impl LaunchSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_past(&self, _limit: u32) -> Result<Vec<LaunchRecord>, FetchError> {
        Err(FetchError::Network("connection refused".to_string()))
    }

    async fn fetch_latest(&self) -> Result<Option<LaunchRecord>, FetchError> {
        Err(FetchError::Network("connection refused".to_string()))
    }
}

/// Builds a minimal record with the given mission name.
pub fn launch(mission_name: &str) -> LaunchRecord {
    LaunchRecord {
        mission_name: mission_name.to_string(),
        launch_date_utc: "2020-01-07T02:19:21.000Z".to_string(),
        details: None,
        rocket_name: "Falcon 9".to_string(),
        article_link: None,
        video_link: None,
        launch_site_name: None,
    }
}

/// The three-record fixture most filter and state tests run against.
pub fn sample_launches() -> Vec<LaunchRecord> {
    vec![
        launch("Falcon Heavy Demo"),
        launch("CRS-20"),
        launch("Starlink-1"),
    ]
}

/// Creates a test App backed by a StaticSource over [`sample_launches`].
pub fn test_app() -> App {
    App::new(Arc::new(StaticSource {
        records: sample_launches(),
    }))
}
