//! YouTube Wire Protocol
//!
//! Endpoint paths and response DTOs for the two Data API v3 calls used by the
//! ranker. Only the fields the ranker reads are modelled; everything else in
//! the platform's response is ignored by serde.

use crate::ranking::types::VideoCandidate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// --- API Endpoints ---

/// Default API root.
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
/// Relevance search over public videos.
pub const ENDPOINT_SEARCH: &str = "/search";
/// Batched metadata lookup by video id.
pub const ENDPOINT_VIDEOS: &str = "/videos";

/// Upper bound the platform accepts for `maxResults`.
pub const MAX_SEARCH_RESULTS: u32 = 50;

// --- search.list ---

/// Body of a `search.list` response.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
}

/// Resource id of a search hit.
///
/// Channel and playlist hits carry no `videoId`; with `type=video` they should
/// not appear, but they are tolerated and skipped.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchItemId {
    #[serde(rename = "videoId", default)]
    pub video_id: Option<String>,
}

impl SearchListResponse {
    pub fn video_ids(self) -> Vec<String> {
        self.items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect()
    }
}

// --- videos.list ---

/// Body of a `videos.list` response.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VideoItem {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<VideoSnippet>,
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
}

/// Text fields may be missing or `null`; both read as empty.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Counters normally arrive as decimal strings (`"viewCount": "12345"`), but
/// plain JSON numbers are accepted too. Anything else counts as zero.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount", default)]
    pub view_count: Option<Value>,
    #[serde(rename = "likeCount", default)]
    pub like_count: Option<Value>,
}

/// Parses a platform counter; hidden or garbled counters count as zero.
pub fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Reads a counter that may be a string or a non-negative integer.
pub fn count_value(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(raw)) => parse_count(Some(raw.as_str())),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

impl From<VideoItem> for VideoCandidate {
    fn from(item: VideoItem) -> Self {
        let snippet = item.snippet.unwrap_or_default();
        let stats = item.statistics.unwrap_or_default();

        VideoCandidate {
            id: item.id,
            title: snippet.title.unwrap_or_default(),
            description: snippet.description.unwrap_or_default(),
            tags: snippet.tags.unwrap_or_default(),
            views: count_value(stats.view_count.as_ref()),
            likes: count_value(stats.like_count.as_ref()),
        }
    }
}
