use serde::{Deserialize, Serialize};

/// One video returned by the platform, reduced to what scoring needs.
///
/// Lives only for the duration of a single ranking request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoCandidate {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Explicit tags set by the uploader, usually without a `#`.
    pub tags: Vec<String>,
    pub views: u64,
    pub likes: u64,
}

/// A hashtag with its aggregated score and the number of videos using it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHashtag {
    pub tag: String,
    pub score: f64,
    pub count: usize,
}

/// Per-request overrides for the ranker's defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankOptions {
    /// How many videos to request from the search call.
    pub max_results_search: Option<u32>,
    /// How many ranked hashtags to return.
    pub top_k: Option<usize>,
}

/// Response body for `GET /api/hashtags`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HashtagsResponse {
    pub hashtags: Vec<String>,
}

/// Response body for `GET /api/hashtags/ranked`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankedHashtagsResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<RankedHashtag>,
}
