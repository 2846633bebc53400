//! HTTP Router
//!
//! Wires the ranking handlers into an Axum `Router`. Kept out of `main` so the
//! same router can be exercised in tests with a stub video source.

use crate::ranking::engine::HashtagRanker;
use crate::ranking::handlers::{handle_get_hashtags, handle_get_ranked_hashtags};
use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Public endpoint returning hashtag strings, best first.
pub const ENDPOINT_HASHTAGS: &str = "/api/hashtags";
/// Public endpoint returning full `{tag, score, count}` records.
pub const ENDPOINT_HASHTAGS_RANKED: &str = "/api/hashtags/ranked";

pub fn router(ranker: Arc<HashtagRanker>) -> Router {
    Router::new()
        .route(ENDPOINT_HASHTAGS, get(handle_get_hashtags))
        .route(ENDPOINT_HASHTAGS_RANKED, get(handle_get_ranked_hashtags))
        .layer(Extension(ranker))
        // The browser frontend is served from a different origin.
        .layer(CorsLayer::permissive())
}
