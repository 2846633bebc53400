use super::engine::HashtagRanker;
use super::types::{HashtagsResponse, RankOptions, RankedHashtagsResponse};
use crate::error::RankError;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct HashtagParams {
    pub query: Option<String>,
    pub max_results: Option<u32>,
    pub top_k: Option<usize>,
}

impl HashtagParams {
    /// The trimmed query, or `EmptyQuery` when absent or blank.
    fn query(&self) -> Result<&str, RankError> {
        match self.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => Ok(q),
            _ => Err(RankError::EmptyQuery),
        }
    }

    fn options(&self) -> RankOptions {
        RankOptions {
            max_results_search: self.max_results,
            top_k: self.top_k,
        }
    }
}

/// Unwraps the query string, turning axum's plain-text rejection into a JSON error.
fn decode_params(
    params: Result<Query<HashtagParams>, QueryRejection>,
) -> Result<HashtagParams, RankError> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| RankError::InvalidParameters(rejection.body_text()))
}

pub async fn handle_get_hashtags(
    params: Result<Query<HashtagParams>, QueryRejection>,
    Extension(ranker): Extension<Arc<HashtagRanker>>,
) -> Result<Json<HashtagsResponse>, RankError> {
    let params = decode_params(params)?;
    let query = params.query()?;

    match ranker.hashtags(query, params.options()).await {
        Ok(hashtags) => Ok(Json(HashtagsResponse { hashtags })),
        Err(e) => {
            tracing::error!("Failed to rank hashtags for '{}': {}", query, e);
            Err(e)
        }
    }
}

pub async fn handle_get_ranked_hashtags(
    params: Result<Query<HashtagParams>, QueryRejection>,
    Extension(ranker): Extension<Arc<HashtagRanker>>,
) -> Result<Json<RankedHashtagsResponse>, RankError> {
    let params = decode_params(params)?;
    let query = params.query()?;

    match ranker.rank(query, params.options()).await {
        Ok(results) => Ok(Json(RankedHashtagsResponse {
            query: query.to_string(),
            count: results.len(),
            results,
        })),
        Err(e) => {
            tracing::error!("Failed to rank hashtags for '{}': {}", query, e);
            Err(e)
        }
    }
}
