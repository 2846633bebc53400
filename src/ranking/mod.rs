//! Hashtag Ranking Module
//!
//! Turns a text query into a ranked list of hashtags used by recent videos on
//! that topic.
//!
//! ## Pipeline
//! 1. **Search**: Ask the [`VideoSource`](crate::youtube::client::VideoSource) for
//!    candidate video ids.
//! 2. **Hydrate**: Fetch title, description, tags and counters for those ids.
//! 3. **Score**: Extract hashtags per video, count each at most once per video,
//!    and weight it by the video's engagement.
//! 4. **Rank**: Sort by cumulative score (ties keep first-seen order) and keep
//!    the top K, or fall back to tags built from the query words.
//!
//! ## Submodules
//! - **`engine`**: The accumulator, the scoring loop and the `HashtagRanker` service.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Video candidates, ranked records and API response bodies.

pub mod engine;
pub mod handlers;
pub mod types;
