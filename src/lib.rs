//! Trending Hashtag Ranker Library
//!
//! This library crate holds everything behind the `hashtag_ranker` binary
//! (`main.rs`): given a topic, it finds recent videos about it and ranks the
//! hashtags those videos use.
//!
//! ## Modules
//! - **`hashtags`**: Pure extraction and normalization of hashtags from video
//!   titles, descriptions and tag lists.
//! - **`ranking`**: The scoring pipeline (per-video dedup, engagement weighting,
//!   top-K selection) and its HTTP handlers.
//! - **`youtube`**: The `VideoSource` abstraction and the YouTube Data API client.
//! - **`routes`**: The Axum router exposing `/api/hashtags`.
//! - **`config`**: Environment-driven settings, read once at start-up.
//! - **`error`**: The `RankError` taxonomy and its HTTP mapping.

pub mod config;
pub mod error;
pub mod hashtags;
pub mod ranking;
pub mod routes;
pub mod youtube;
