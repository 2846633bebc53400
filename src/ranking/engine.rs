use super::types::{RankOptions, RankedHashtag, VideoCandidate};
use crate::error::RankError;
use crate::hashtags::extractor::{extract_from_tag_list, extract_from_text, normalize_tags};
use crate::hashtags::tokenizer::fallback_tags;
use crate::youtube::client::VideoSource;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub const DEFAULT_MAX_RESULTS_SEARCH: u32 = 20;
pub const DEFAULT_TOP_K: usize = 20;

/// Running totals for one ranking request.
///
/// Entries keep the order in which each tag was first seen, which is the
/// tie-break when two tags end with the same score.
#[derive(Debug, Default)]
pub struct ScoreAccumulator {
    entries: Vec<RankedHashtag>,
    index: HashMap<String, usize>,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the tag's score and one to its count.
    pub fn add(&mut self, tag: &str, amount: f64) {
        match self.index.get(tag) {
            Some(&pos) => {
                let entry = &mut self.entries[pos];
                entry.score += amount;
                entry.count += 1;
            }
            None => {
                self.index.insert(tag.to_string(), self.entries.len());
                self.entries.push(RankedHashtag {
                    tag: tag.to_string(),
                    score: amount,
                    count: 1,
                });
            }
        }
    }

    /// Credits every distinct hashtag of `video` once, weighted by engagement.
    pub fn add_video(&mut self, video: &VideoCandidate) {
        let contribution = 1.0 + engagement_weight(video.views, video.likes);
        for tag in video_hashtags(video) {
            self.add(&tag, contribution);
        }
    }

    #[cfg(test)]
    pub fn get(&self, tag: &str) -> Option<&RankedHashtag> {
        self.index.get(tag).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorts by score descending and keeps the first `top_k` entries.
    ///
    /// The sort is stable, so equal scores stay in first-seen order. Scores are
    /// rounded to 3 decimals only after sorting.
    pub fn into_ranked(self, top_k: usize) -> Vec<RankedHashtag> {
        let mut ranked = self.entries;
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(top_k);

        for entry in ranked.iter_mut() {
            entry.score = round_score(entry.score);
        }
        ranked
    }
}

/// `log10(views + 1) + 0.5 * log10(likes + 1)`
pub fn engagement_weight(views: u64, likes: u64) -> f64 {
    (views as f64 + 1.0).log10() + 0.5 * (likes as f64 + 1.0).log10()
}

/// Canonical hashtags of a video, each at most once, in first-seen order
/// (title, then description, then the explicit tag list).
pub fn video_hashtags(video: &VideoCandidate) -> Vec<String> {
    let mut candidates = extract_from_text(&video.title);
    candidates.extend(extract_from_text(&video.description));
    candidates.extend(extract_from_tag_list(&video.tags));

    let mut seen = HashSet::new();
    normalize_tags(candidates)
        .into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

pub fn score_videos(videos: &[VideoCandidate]) -> ScoreAccumulator {
    let mut acc = ScoreAccumulator::new();
    for video in videos {
        acc.add_video(video);
    }
    acc
}

/// Synthetic result built from the query words, each with zero score and count.
pub fn fallback_ranking(query: &str) -> Vec<RankedHashtag> {
    fallback_tags(query)
        .into_iter()
        .map(|tag| RankedHashtag {
            tag,
            score: 0.0,
            count: 0,
        })
        .collect()
}

/// Rounds to 3 decimals on the exact decimal expansion of `score`, so a value
/// stored as `1.000499..` rounds down even though it prints as `1.0005`.
pub fn round_score(score: f64) -> f64 {
    format!("{:.3}", score).parse().unwrap_or(score)
}

/// Ranks hashtags for a query against a [`VideoSource`].
///
/// Holds no per-request state; every call builds its own accumulator, so one
/// instance can serve concurrent requests.
pub struct HashtagRanker {
    source: Arc<dyn VideoSource>,
    max_results_search: u32,
    top_k: usize,
}

impl HashtagRanker {
    pub fn new(source: Arc<dyn VideoSource>) -> Self {
        Self {
            source,
            max_results_search: DEFAULT_MAX_RESULTS_SEARCH,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Overrides the defaults used when a request does not set its own caps.
    pub fn with_defaults(mut self, max_results_search: u32, top_k: usize) -> Self {
        self.max_results_search = max_results_search;
        self.top_k = top_k;
        self
    }

    /// Runs search, hydration and scoring for `query`.
    ///
    /// # Errors
    /// * `EmptyQuery` if the trimmed query is empty; no call is made.
    /// * Any error from the video source, unchanged. Nothing is retried.
    pub async fn rank(
        &self,
        query: &str,
        options: RankOptions,
    ) -> Result<Vec<RankedHashtag>, RankError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(RankError::EmptyQuery);
        }

        let max_results = options.max_results_search.unwrap_or(self.max_results_search);
        let top_k = options.top_k.unwrap_or(self.top_k);

        let video_ids = self.source.search_video_ids(query, max_results).await?;
        let videos = if video_ids.is_empty() {
            Vec::new()
        } else {
            self.source.fetch_video_details(&video_ids).await?
        };

        let acc = score_videos(&videos);
        if acc.is_empty() {
            tracing::info!(
                "No hashtags found for '{}' across {} videos, using query fallback",
                query,
                videos.len()
            );
            return Ok(fallback_ranking(query));
        }

        let distinct = acc.len();
        let ranked = acc.into_ranked(top_k);
        tracing::info!(
            "Ranked '{}' - videos={}, distinct_tags={}, returned={}",
            query,
            videos.len(),
            distinct,
            ranked.len()
        );

        Ok(ranked)
    }

    /// Like [`rank`](Self::rank), keeping only the tag strings.
    pub async fn hashtags(
        &self,
        query: &str,
        options: RankOptions,
    ) -> Result<Vec<String>, RankError> {
        Ok(self
            .rank(query, options)
            .await?
            .into_iter()
            .map(|entry| entry.tag)
            .collect())
    }
}
