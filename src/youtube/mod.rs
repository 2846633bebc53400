//! YouTube Data API Module
//!
//! The only place that talks to the network. Ranking code depends on the
//! [`client::VideoSource`] trait, never on reqwest directly, so it can be driven
//! by fixtures in tests.
//!
//! ## Workflow
//! 1. **Search**: `search.list` returns ids of recent videos relevant to the query.
//! 2. **Details**: `videos.list` returns snippet and statistics for those ids in
//!    one batched call.
//!
//! ## Submodules
//! - **`client`**: The `VideoSource` trait and its reqwest-backed implementation.
//! - **`protocol`**: Endpoint paths and the JSON shapes returned by the platform.

pub mod client;
pub mod protocol;

#[cfg(test)]
mod tests;
