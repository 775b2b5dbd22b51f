use serde::Deserialize;

use super::source::FetchError;

/// One historical or current rocket-launch event.
///
/// Immutable once built from the wire shape. The base sequence held by the
/// session is replaced wholesale on fetch, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRecord {
    pub mission_name: String,
    /// ISO-8601 timestamp, kept opaque here. Renderers may parse it for
    /// display (see `render::format_date`).
    pub launch_date_utc: String,
    pub details: Option<String>,
    pub rocket_name: String,
    pub article_link: Option<String>,
    pub video_link: Option<String>,
    pub launch_site_name: Option<String>,
}

// ============================================================================
// Wire Types
// ============================================================================

/// A launch element exactly as it appears in the GraphQL response. Nested the
/// way the schema nests it; flattened into a `LaunchRecord` before anything
/// downstream sees it.
///
/// `details` and `launch_site` are absent entirely in the latest-launch query,
/// so every optional field tolerates a missing key as well as a null.
#[derive(Deserialize, Debug)]
pub(crate) struct RawLaunch {
    pub mission_name: String,
    pub launch_date_utc: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub launch_site: Option<RawLaunchSite>,
    #[serde(default)]
    pub links: Option<RawLinks>,
    pub rocket: RawRocket,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawLaunchSite {
    #[serde(default)]
    pub site_name_long: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct RawLinks {
    #[serde(default)]
    pub article_link: Option<String>,
    #[serde(default)]
    pub video_link: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawRocket {
    pub rocket_name: String,
}

impl RawLaunch {
    /// Flattens the nested wire shape into a `LaunchRecord`.
    ///
    /// A well-formed response never carries an empty mission name; one that
    /// does is rejected as malformed rather than let through to the filter.
    pub(crate) fn into_record(self) -> Result<LaunchRecord, FetchError> {
        if self.mission_name.trim().is_empty() {
            return Err(FetchError::Malformed(
                "launch with empty mission_name".to_string(),
            ));
        }
        let links = self.links.unwrap_or_default();
        Ok(LaunchRecord {
            mission_name: self.mission_name,
            launch_date_utc: self.launch_date_utc,
            details: self.details,
            rocket_name: self.rocket.rocket_name,
            article_link: links.article_link,
            video_link: links.video_link,
            launch_site_name: self.launch_site.and_then(|s| s.site_name_long),
        })
    }
}
