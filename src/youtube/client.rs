use super::protocol::*;
use crate::error::RankError;
use crate::ranking::types::VideoCandidate;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

/// Source of candidate videos for a query.
///
/// Implementations must not share ranking state between calls; every call is
/// independent.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Returns ids of up to `max_results` recent videos relevant to `query`,
    /// in the platform's relevance order.
    async fn search_video_ids(&self, query: &str, max_results: u32)
        -> Result<Vec<String>, RankError>;

    /// Returns metadata for exactly the given ids, in one batched call.
    async fn fetch_video_details(&self, ids: &[String]) -> Result<Vec<VideoCandidate>, RankError>;
}

/// `VideoSource` backed by the YouTube Data API v3.
pub struct YouTubeClient {
    http_client: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
    days_window: i64,
}

impl YouTubeClient {
    /// Builds a client whose every request is bounded by `timeout`.
    ///
    /// A missing `api_key` is accepted here and reported on each call as
    /// [`RankError::MissingCredential`], before any request is sent.
    pub fn new(
        api_base: &str,
        api_key: Option<String>,
        timeout: Duration,
        days_window: i64,
    ) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            days_window,
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn credential(&self) -> Result<&str, RankError> {
        self.api_key.as_deref().ok_or(RankError::MissingCredential)
    }

    /// Lower bound for `publishedAfter`: now minus the window, RFC 3339 with `Z`.
    fn window_start(&self) -> String {
        published_after(Utc::now(), self.days_window)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, String)],
    ) -> Result<T, RankError> {
        let url = format!("{}{}", self.api_base, endpoint);
        let start = Instant::now();

        let response = self
            .http_client
            .get(&url)
            .query(params)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|source| RankError::Upstream { endpoint, source })?;

        let body = response
            .text()
            .await
            .map_err(|source| RankError::Upstream { endpoint, source })?;

        tracing::debug!(
            "YouTube {} completed - duration={:.2}s, bytes={}",
            endpoint,
            start.elapsed().as_secs_f32(),
            body.len()
        );

        serde_json::from_str(&body).map_err(|e| RankError::MalformedResponse {
            endpoint,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl VideoSource for YouTubeClient {
    async fn search_video_ids(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<String>, RankError> {
        let key = self.credential()?;
        let max_results = max_results.clamp(1, MAX_SEARCH_RESULTS);

        let params = [
            ("part", "snippet".to_string()),
            ("q", query.to_string()),
            ("type", "video".to_string()),
            ("maxResults", max_results.to_string()),
            ("order", "relevance".to_string()),
            ("publishedAfter", self.window_start()),
            ("key", key.to_string()),
        ];

        let response: SearchListResponse = self.get_json(ENDPOINT_SEARCH, &params).await?;
        let ids = response.video_ids();

        tracing::debug!("Search for '{}' returned {} video ids", query, ids.len());
        Ok(ids)
    }

    async fn fetch_video_details(&self, ids: &[String]) -> Result<Vec<VideoCandidate>, RankError> {
        let key = self.credential()?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let params = [
            ("part", "snippet,statistics".to_string()),
            ("id", ids.join(",")),
            ("key", key.to_string()),
        ];

        let response: VideoListResponse = self.get_json(ENDPOINT_VIDEOS, &params).await?;

        Ok(response
            .items
            .into_iter()
            .map(VideoCandidate::from)
            .collect())
    }
}

/// Formats `now - days_window` as RFC 3339 UTC with second precision.
pub fn published_after(now: chrono::DateTime<Utc>, days_window: i64) -> String {
    (now - ChronoDuration::days(days_window)).to_rfc3339_opts(SecondsFormat::Secs, true)
}
